//! Configuration for postview: `postview.toml` loading, defaults and
//! shared constants.

pub mod constants;
pub mod debug;
pub mod loader;
pub mod source;
pub mod ui;

pub use debug::{DebugConfig, TraceLevel};
pub use loader::{ConfigManager, PostviewConfig};
pub use source::SourceConfig;
pub use ui::UiConfig;
