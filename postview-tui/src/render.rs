//! Pure rendering of the post list.
//!
//! Output depends only on the view state, the labels and the selection, never
//! on how the state was reached.

use postview_config::UiConfig;
use postview_config::constants::ui;
use postview_core::ViewState;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{
    Block, BorderType, List, ListDirection, ListItem, ListState, Paragraph, StatefulWidget,
    Widget,
};

use crate::selection::Selection;
use crate::styles;

const HEADER_HEIGHT: u16 = 3;

/// Fixed text shown around the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub title: String,
    pub loading_text: String,
    pub hint: Option<String>,
}

impl Labels {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            title: config.title.clone(),
            loading_text: config.loading_text.clone(),
            hint: Some(ui::CONTROLS_HINT.to_string()),
        }
    }

    pub fn without_hint(mut self) -> Self {
        self.hint = None;
        self
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

pub struct PostListWidget<'a> {
    state: &'a ViewState,
    labels: &'a Labels,
    selection: &'a Selection,
}

impl<'a> PostListWidget<'a> {
    pub fn new(state: &'a ViewState, labels: &'a Labels, selection: &'a Selection) -> Self {
        Self {
            state,
            labels,
            selection,
        }
    }
}

impl Widget for PostListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint_height = u16::from(self.labels.hint.is_some());
        let [header_area, body_area, hint_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(hint_height),
        ])
        .areas(area);

        Paragraph::new(Line::styled(self.labels.title.as_str(), styles::HEADER_TITLE))
            .block(Block::bordered().border_type(BorderType::Rounded))
            .render(header_area, buf);

        if self.state.loading {
            Paragraph::new(Line::styled(
                self.labels.loading_text.as_str(),
                styles::LOADING,
            ))
            .render(body_area, buf);
        } else {
            let items: Vec<ListItem> = self
                .state
                .posts
                .iter()
                .map(|post| ListItem::new(post.title.as_str()).style(styles::POST_ITEM))
                .collect();

            let list = List::new(items)
                .block(Block::bordered().border_type(BorderType::Rounded))
                .highlight_style(styles::HIGHLIGHT)
                .highlight_symbol("> ")
                .direction(ListDirection::TopToBottom)
                .scroll_padding(1);

            let mut list_state =
                ListState::default().with_selected(self.selection.index_in(&self.state.posts));
            StatefulWidget::render(list, body_area, buf, &mut list_state);
        }

        if let Some(hint) = self.labels.hint.as_deref() {
            Paragraph::new(Line::styled(hint, styles::HINT)).render(hint_area, buf);
        }
    }
}

/// Plain-text rendering used by headless mode: the title, then either the
/// loading text or one post title per line.
pub fn render_plain(state: &ViewState, labels: &Labels) -> Vec<String> {
    let mut lines = vec![labels.title.clone()];
    if state.loading {
        lines.push(labels.loading_text.clone());
    } else {
        lines.extend(state.posts.iter().map(|post| post.title.clone()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use postview_core::Post;
    use pretty_assertions::assert_eq;

    fn render_lines(state: &ViewState, selection: &Selection, width: u16, height: u16) -> Vec<String> {
        let labels = Labels::default().without_hint();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        PostListWidget::new(state, &labels, selection).render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    #[test]
    fn loading_shows_placeholder_and_no_items() {
        let state = ViewState {
            loading: true,
            posts: Vec::new(),
        };
        let lines = render_lines(&state, &Selection::default(), 40, 8);
        assert!(contains(&lines, "Posts"));
        assert!(contains(&lines, "Loading . . ."));
    }

    #[test]
    fn loading_hides_stale_posts() {
        let state = ViewState {
            loading: true,
            posts: vec![Post::new(1, "Stale")],
        };
        let lines = render_lines(&state, &Selection::default(), 40, 8);
        assert!(!contains(&lines, "Stale"));
    }

    #[test]
    fn single_post_is_listed_without_placeholder() {
        let state = ViewState {
            loading: false,
            posts: vec![Post::new(1, "Hello")],
        };
        let lines = render_lines(&state, &Selection::default(), 40, 8);
        assert!(contains(&lines, "> Hello"));
        assert!(!contains(&lines, "Loading"));
    }

    #[test]
    fn empty_list_renders_frame_only() {
        let state = ViewState::default();
        let lines = render_lines(&state, &Selection::default(), 20, 7);
        assert!(!contains(&lines, "Loading"));
        assert!(!contains(&lines, ">"));
        // Header box (3 rows) then the list box frame.
        assert!(lines[3].starts_with('╭'));
        assert!(lines[6].starts_with('╰'));
    }

    #[test]
    fn posts_render_in_order() {
        let state = ViewState {
            loading: false,
            posts: vec![Post::new(1, "alpha"), Post::new(2, "beta"), Post::new(3, "gamma")],
        };
        let lines = render_lines(&state, &Selection::default(), 30, 10);
        let position = |needle: &str| lines.iter().position(|line| line.contains(needle));
        assert!(position("alpha") < position("beta"));
        assert!(position("beta") < position("gamma"));
    }

    #[test]
    fn same_state_renders_identically_regardless_of_history() {
        let mut reached = ViewState::default();
        reached.begin_fetch();
        reached.finish_fetch(Some(vec![Post::new(1, "a")]));
        reached.begin_fetch();
        reached.finish_fetch(None);

        let built = ViewState {
            loading: false,
            posts: vec![Post::new(1, "a")],
        };

        let selection = Selection::default();
        assert_eq!(
            render_lines(&reached, &selection, 30, 8),
            render_lines(&built, &selection, 30, 8)
        );
    }

    #[test]
    fn plain_rendering_lists_titles() {
        let labels = Labels::default();
        let state = ViewState {
            loading: false,
            posts: vec![Post::new(1, "Hello"), Post::new(2, "World")],
        };
        assert_eq!(render_plain(&state, &labels), vec!["Posts", "Hello", "World"]);

        let loading = ViewState {
            loading: true,
            posts: Vec::new(),
        };
        assert_eq!(render_plain(&loading, &labels), vec!["Posts", "Loading . . ."]);
    }
}
