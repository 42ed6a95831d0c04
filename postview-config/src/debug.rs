//! Debug and tracing configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::constants::debug;

/// Trace level for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl TraceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

// Unknown levels fall back to the default instead of failing the whole file.
impl<'de> Deserialize<'de> for TraceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw).unwrap_or_default())
    }
}

/// Debug and tracing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DebugConfig {
    /// Enable structured logging for development and troubleshooting
    #[serde(default)]
    pub enable_tracing: bool,

    /// Trace level (error, warn, info, debug, trace)
    #[serde(default)]
    pub trace_level: TraceLevel,

    /// List of tracing targets to enable
    /// Examples: "postview_core", "postview_tui"
    #[serde(default)]
    pub trace_targets: Vec<String>,

    /// File that receives log output. Required for logs while the TUI owns
    /// the terminal.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl DebugConfig {
    /// `EnvFilter` directive built from the configured targets and level.
    pub fn filter_directive(&self) -> String {
        let targets = if self.trace_targets.is_empty() {
            debug::DEFAULT_TRACE_TARGETS
                .split(',')
                .map(str::to_string)
                .collect::<Vec<_>>()
        } else {
            self.trace_targets.clone()
        };
        targets
            .iter()
            .map(|target| format!("{}={}", target.trim(), self.trace_level.as_str()))
            .collect::<Vec<_>>()
            .join(",")
    }
}
