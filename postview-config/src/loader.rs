use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::files::CONFIG_FILE_NAME;
use crate::{DebugConfig, SourceConfig, UiConfig};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostviewConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl PostviewConfig {
    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }
}

pub struct ConfigManager {
    config: PostviewConfig,
}

impl ConfigManager {
    /// Load `postview.toml` from the current directory.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        Self::load_from_workspace(cwd)
    }

    pub fn load_from_workspace(workspace_root: impl AsRef<Path>) -> Result<Self> {
        let path = workspace_root.as_ref().join(CONFIG_FILE_NAME);
        Self::load_from_path(path)
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let parsed = toml::from_str::<PostviewConfig>(&raw)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            parsed
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            PostviewConfig::default()
        };

        config
            .validate()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;

        Ok(Self { config })
    }

    pub fn into_config(self) -> PostviewConfig {
        self.config
    }
}
