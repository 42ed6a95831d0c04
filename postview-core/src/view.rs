//! Mount lifecycle of the post list.
//!
//! Mounting publishes `loading = true`, then spawns one fetch task. The task
//! only holds a weak reference to the state and watches a cancellation token,
//! so a fetch that resolves after teardown is dropped without touching
//! anything.

use std::sync::{Arc, Weak};

use postview_commons::{DiagnosticSink, TracingDiagnostics};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::FetchFailure;
use crate::post::Post;
use crate::source::PostSource;
use crate::state::ViewState;

type StateCell = watch::Sender<ViewState>;

/// An unmounted post list: a source plus the sink that receives fetch
/// failures.
pub struct PostListView {
    source: Arc<dyn PostSource>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl PostListView {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self {
            source,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Mount the view and start its single fetch.
    ///
    /// Must be called from within a tokio runtime. `loading` is already true
    /// in the returned handle's state.
    pub fn mount(self) -> MountedView {
        let (sender, _) = watch::channel(ViewState::default());
        let state = Arc::new(sender);
        state.send_modify(ViewState::begin_fetch);

        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_fetch(
            self.source,
            Arc::downgrade(&state),
            cancel.clone(),
            self.diagnostics,
        ));
        tracing::debug!("post list mounted");

        MountedView {
            state,
            cancel,
            task: Some(task),
        }
    }
}

/// A mounted post list. Dropping it tears the view down.
pub struct MountedView {
    state: Arc<StateCell>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl MountedView {
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change, for driving redraws.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Wait until the fetch task has finished. Returns immediately if it
    /// already has been awaited.
    pub async fn settled(&mut self) {
        if let Some(task) = self.task.take()
            && let Err(error) = task.await
        {
            tracing::warn!(%error, "post fetch task ended abnormally");
        }
    }

    /// Tear the view down. A pending fetch is cancelled and its result, if
    /// any, discarded.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for MountedView {
    fn drop(&mut self) {
        self.cancel.cancel();
        tracing::debug!("post list unmounted");
    }
}

async fn run_fetch(
    source: Arc<dyn PostSource>,
    state: Weak<StateCell>,
    cancel: CancellationToken,
    diagnostics: Arc<dyn DiagnosticSink>,
) {
    let outcome = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::debug!("post list unmounted before fetch resolved");
            return;
        }
        outcome = source.fetch_posts() => outcome,
    };

    apply_outcome(&state, &cancel, outcome, diagnostics.as_ref());
}

/// Apply a resolved fetch to the view state. Returns false when the view is
/// gone and the outcome was discarded.
fn apply_outcome(
    state: &Weak<StateCell>,
    cancel: &CancellationToken,
    outcome: Result<Vec<Post>, FetchFailure>,
    diagnostics: &dyn DiagnosticSink,
) -> bool {
    if cancel.is_cancelled() {
        tracing::debug!("discarding fetch result for unmounted post list");
        return false;
    }
    let Some(state) = state.upgrade() else {
        tracing::debug!("discarding fetch result, post list state already dropped");
        return false;
    };

    let posts = match outcome {
        Ok(posts) => {
            tracing::debug!(count = posts.len(), "applying fetched posts");
            Some(posts)
        }
        Err(failure) => {
            tracing::error!(error = %failure, url = failure.url(), "failed to fetch posts");
            diagnostics.capture(&anyhow::Error::new(failure));
            None
        }
    };
    state.send_modify(|view| view.finish_fetch(posts));
    true
}
