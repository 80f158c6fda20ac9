use crate::error::ScopedError;
use std::sync::Mutex;
use tracing::warn;

/// Sink for non-fatal diagnostics
///
/// Implementations must never panic; emission is fire-and-forget.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, diagnostic: &ScopedError);
}

/// Sink that forwards diagnostics to `tracing` at WARN level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, diagnostic: &ScopedError) {
        warn!(scope = %diagnostic.scope, "{}", diagnostic);
    }
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _diagnostic: &ScopedError) {}
}

/// Capturing sink for testing
#[derive(Debug, Default)]
pub struct CapturingSink {
    captured: Mutex<Vec<ScopedError>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in emission order
    pub fn diagnostics(&self) -> Vec<ScopedError> {
        match self.captured.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CapturingSink {
    fn warn(&self, diagnostic: &ScopedError) {
        match self.captured.lock() {
            Ok(mut guard) => guard.push(diagnostic.clone()),
            Err(poisoned) => poisoned.into_inner().push(diagnostic.clone()),
        }
    }
}
