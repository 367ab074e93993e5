//! Diagnostic sink.
//!
//! Fire-and-forget: the engine reports, never reads back. Diagnostics are
//! not consulted for control flow.

use std::sync::Mutex;

/// Severity of a diagnostic message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Receiver for engine diagnostics.
///
/// Used for: the raw item list (info), missing item ids (warning), store
/// failures with the attempted key (error), skipped non-finite aggregate
/// entries (warning), and top-level failures (error).
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }
}

/// Forwards diagnostics to the process-wide `tracing` subscriber.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!("{message}"),
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }
}

/// In-memory sink that records every diagnostic. For tests/dev.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// True if any recorded entry of the given severity contains `needle`.
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.entries()
            .iter()
            .any(|(s, message)| *s == severity && message.contains(needle))
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, severity: Severity, message: &str) {
        // Fire-and-forget: a poisoned lock just drops the entry.
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((severity, message.to_string()));
        }
    }
}
