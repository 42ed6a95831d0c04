use std::sync::{Arc, Mutex};

use anyhow::Error;

/// Receives non-fatal errors that are caught and swallowed by a component.
///
/// Nothing captured here is shown to the user; sinks exist so failures stay
/// observable in logs and tests.
pub trait DiagnosticSink: Send + Sync {
    /// Record the provided error.
    fn capture(&self, error: &Error);
}

/// Forwards every captured error to `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn capture(&self, error: &Error) {
        tracing::error!(error = format!("{error:#}"), "diagnostic captured");
    }
}

/// Keeps captured errors in memory as rendered strings, for assertions.
#[derive(Debug, Default, Clone)]
pub struct MemoryDiagnostics {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far, oldest first.
    pub fn entries(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn capture(&self, error: &Error) {
        let rendered = format!("{error:#}");
        match self.entries.lock() {
            Ok(mut entries) => entries.push(rendered),
            Err(poisoned) => poisoned.into_inner().push(rendered),
        }
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn capture(&self, error: &Error) {
        (**self).capture(error);
    }
}
