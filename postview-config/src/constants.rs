/// Remote source defaults
pub mod source {
    pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 5;
}

/// Terminal UI defaults
pub mod ui {
    pub const DEFAULT_TITLE: &str = "Posts";
    pub const DEFAULT_LOADING_TEXT: &str = "Loading . . .";
    pub const DEFAULT_TICK_RATE_HZ: f64 = 4.0;
    pub const MIN_TICK_RATE_HZ: f64 = 0.5;
    pub const MAX_TICK_RATE_HZ: f64 = 60.0;
    pub const CONTROLS_HINT: &str = "↑/↓ j/k to move  •  Home/End to jump  •  q/Esc to quit";
}

/// Config file discovery
pub mod files {
    pub const CONFIG_FILE_NAME: &str = "postview.toml";
}

/// Tracing defaults
pub mod debug {
    pub const DEFAULT_TRACE_TARGETS: &str =
        "postview,postview_core,postview_tui,postview_commons,postview_config";
}
