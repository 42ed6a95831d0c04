//! Terminal front end for the post list: pure rendering, key handling and
//! the full-screen event loop.

pub mod input;
pub mod render;
pub mod runner;
pub mod selection;
pub mod styles;
mod terminal;

pub use input::{Action, action_for_event};
pub use render::{Labels, PostListWidget, render_plain};
pub use runner::run;
pub use selection::Selection;
