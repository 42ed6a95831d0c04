//! Core of postview: the `Post` model and its decode step, the remote
//! source, and the mount/fetch lifecycle of the post list view.
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use std::sync::Arc;
//! use postview_config::SourceConfig;
//! use postview_core::{HttpPostSource, PostListView};
//!
//! let source = HttpPostSource::from_config(&SourceConfig::default())?;
//! let mut view = PostListView::new(Arc::new(source)).mount();
//! view.settled().await;
//! for post in view.snapshot().posts {
//!     println!("{}", post.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod post;
pub mod source;
pub mod state;
pub mod view;

pub use error::FetchFailure;
pub use post::{DecodeFailure, Post, PostId, decode_posts};
pub use source::{HttpPostSource, PostSource};
pub use state::ViewState;
pub use view::{MountedView, PostListView};
