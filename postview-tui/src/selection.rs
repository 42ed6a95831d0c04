use postview_core::{Post, PostId};

/// Cursor over the post list, keyed by post id so it stays on the same post
/// when the list is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<PostId>,
}

impl Selection {
    /// Row to highlight. Falls back to the first row when nothing is selected
    /// or the selected post is no longer listed.
    pub fn index_in(&self, posts: &[Post]) -> Option<usize> {
        if posts.is_empty() {
            return None;
        }
        let found = self
            .selected
            .as_ref()
            .and_then(|id| posts.iter().position(|post| &post.id == id));
        Some(found.unwrap_or(0))
    }

    /// Move one row up, wrapping to the last row.
    pub fn previous(&mut self, posts: &[Post]) {
        let Some(current) = self.index_in(posts) else {
            return;
        };
        let target = if current == 0 {
            posts.len() - 1
        } else {
            current - 1
        };
        self.select_index(posts, target);
    }

    /// Move one row down, wrapping to the first row.
    pub fn next(&mut self, posts: &[Post]) {
        let Some(current) = self.index_in(posts) else {
            return;
        };
        self.select_index(posts, (current + 1) % posts.len());
    }

    pub fn first(&mut self, posts: &[Post]) {
        self.select_index(posts, 0);
    }

    pub fn last(&mut self, posts: &[Post]) {
        self.select_index(posts, posts.len().saturating_sub(1));
    }

    fn select_index(&mut self, posts: &[Post], index: usize) {
        if let Some(post) = posts.get(index) {
            self.selected = Some(post.id.clone());
        }
    }
}
