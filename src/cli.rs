use std::path::PathBuf;

use clap::Parser;
use postview_config::PostviewConfig;

/// Fetch posts from a REST endpoint and browse their titles in the terminal.
#[derive(Debug, Parser)]
#[command(name = "postview", version, about)]
pub struct Cli {
    /// Config file to load instead of ./postview.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Endpoint returning a JSON array of posts
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Whole-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print post titles to stdout once the fetch settles instead of opening
    /// the terminal UI
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// Command-line values win over the config file.
    pub fn apply_overrides(&self, config: &mut PostviewConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint.clone_from(endpoint);
        }
        if let Some(timeout) = self.timeout {
            config.source.timeout_seconds = timeout;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "postview",
            "--endpoint",
            "http://localhost:3000/posts",
            "--timeout",
            "3",
            "--plain",
        ]);
        let mut config = PostviewConfig::default();
        cli.apply_overrides(&mut config);

        assert!(cli.plain);
        assert_eq!(config.source.endpoint, "http://localhost:3000/posts");
        assert_eq!(config.source.timeout_seconds, 3);
    }

    #[test]
    fn no_flags_keep_config_values() {
        let cli = Cli::parse_from(["postview"]);
        let mut config = PostviewConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, PostviewConfig::default());
    }
}
