use crate::post::Post;

/// Render state owned by one mounted view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// True while a fetch is in flight
    pub loading: bool,
    /// Posts in response order
    pub posts: Vec<Post>,
}

impl ViewState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Settle an in-flight fetch. `None` marks a failed fetch and keeps
    /// whatever posts were already shown.
    pub fn finish_fetch(&mut self, posts: Option<Vec<Post>>) {
        if let Some(posts) = posts {
            self.posts = posts;
        }
        self.loading = false;
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_idle_and_empty() {
        let state = ViewState::default();
        assert!(!state.loading);
        assert!(state.is_empty());
    }

    #[test]
    fn success_replaces_posts_in_order() {
        let mut state = ViewState::default();
        state.begin_fetch();
        assert!(state.loading);

        state.finish_fetch(Some(vec![Post::new(2, "b"), Post::new(1, "a")]));
        assert!(!state.loading);
        let titles: Vec<_> = state.posts.iter().map(|post| post.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn failure_keeps_stale_posts() {
        let mut state = ViewState {
            loading: false,
            posts: vec![Post::new(1, "kept")],
        };
        let before = state.posts.clone();

        state.begin_fetch();
        state.finish_fetch(None);

        assert!(!state.loading);
        assert_eq!(state.posts, before);
    }

    #[test]
    fn failure_on_empty_state_stays_empty() {
        let mut state = ViewState::default();
        state.begin_fetch();
        state.finish_fetch(None);
        assert_eq!(state, ViewState::default());
    }
}
