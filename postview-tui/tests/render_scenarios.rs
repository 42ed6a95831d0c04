//! Mount a view against an in-memory source, let the fetch settle, and
//! check what a terminal would show.

use std::sync::Arc;

use async_trait::async_trait;
use postview_core::{FetchFailure, MountedView, Post, PostListView, PostSource};
use postview_tui::{Labels, PostListWidget, Selection};
use ratatui::{Terminal, backend::TestBackend};

struct StaticSource {
    posts: Option<Vec<Post>>,
}

#[async_trait]
impl PostSource for StaticSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchFailure> {
        match &self.posts {
            Some(posts) => Ok(posts.clone()),
            None => Err(FetchFailure::status("http://example.test/posts", 503)),
        }
    }
}

async fn settled_view(posts: Option<Vec<Post>>) -> MountedView {
    let mut view = PostListView::new(Arc::new(StaticSource { posts })).mount();
    view.settled().await;
    view
}

fn draw(view: &MountedView) -> String {
    let backend = TestBackend::new(40, 10);
    let mut terminal = Terminal::new(backend).unwrap();
    let state = view.snapshot();
    let labels = Labels::default();
    let selection = Selection::default();
    terminal
        .draw(|frame| {
            frame.render_widget(PostListWidget::new(&state, &labels, &selection), frame.area());
        })
        .unwrap();
    format!("{}", terminal.backend())
}

#[tokio::test]
async fn loading_screen_before_fetch_settles() {
    let view = PostListView::new(Arc::new(StaticSource { posts: Some(Vec::new()) })).mount();
    let screen = draw(&view);
    assert!(screen.contains("Loading . . ."));
}

#[tokio::test]
async fn one_post_screen() {
    let view = settled_view(Some(vec![Post::new(1, "Hello")])).await;
    let screen = draw(&view);
    assert!(screen.contains("Posts"));
    assert!(screen.contains("Hello"));
    assert!(!screen.contains("Loading"));
}

#[tokio::test]
async fn empty_list_screen() {
    let view = settled_view(Some(Vec::new())).await;
    let screen = draw(&view);
    assert!(screen.contains("Posts"));
    assert!(!screen.contains("Loading"));
    assert!(!screen.contains("> "));
}

#[tokio::test]
async fn failed_fetch_screen_is_empty_list() {
    let view = settled_view(None).await;
    let screen = draw(&view);
    assert!(!screen.contains("Loading"));
    assert!(!screen.contains("503"));
}
