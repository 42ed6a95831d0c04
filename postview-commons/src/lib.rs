//! Shared helpers reused by the postview crates. Keeps the view component
//! decoupled from how HTTP clients are built and where diagnostics end up.

pub mod diagnostics;
pub mod http;

pub use diagnostics::{DiagnosticSink, MemoryDiagnostics, TracingDiagnostics};
pub use http::{HttpTimeouts, create_client};
