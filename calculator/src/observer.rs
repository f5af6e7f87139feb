//! Invocation observability
//!
//! Every calculator invocation emits exactly one record, before the result
//! is computed. The sink is injected into the service rather than reached
//! through ambient global state, so tests can swap in a recording or no-op
//! observer without touching a global subscriber.

use serde_json::Value;
use std::sync::Mutex;

/// Observer notified once per operation invocation
///
/// Emission is fire-and-forget: implementations must not block, and a
/// failure to emit must never fail the invocation itself. Implementations
/// must be safe to call from any task concurrently.
pub trait InvocationObserver: Send + Sync {
    /// Record that `operation` was invoked with `arguments`
    fn record(&self, operation: &str, arguments: &Value);
}

/// Observer that emits one `tracing` info event per invocation
///
/// This is the production default: wire a `tracing` subscriber in the host
/// and every invocation shows up as a structured log record.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl InvocationObserver for TracingObserver {
    fn record(&self, operation: &str, arguments: &Value) {
        tracing::info!(operation, %arguments, "calculator invocation");
    }
}

/// Observer that discards every record
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl InvocationObserver for NoopObserver {
    fn record(&self, _operation: &str, _arguments: &Value) {}
}

/// One captured invocation record
#[derive(Clone, Debug, PartialEq)]
pub struct InvocationRecord {
    /// Operation name as registered with the host
    pub operation: String,
    /// Argument object the operation was invoked with
    pub arguments: Value,
}

/// Observer that keeps every record in memory
///
/// Intended for tests asserting the one-record-per-invocation contract.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    records: Mutex<Vec<InvocationRecord>>,
}

impl RecordingObserver {
    /// Create an empty recording observer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records captured so far, in emission order
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn records(&self) -> Vec<InvocationRecord> {
        self.records
            .lock()
            .expect("Recording observer lock poisoned - indicates a panic in another thread")
            .clone()
    }

    /// Number of records captured so far
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn count(&self) -> usize {
        self.records
            .lock()
            .expect("Recording observer lock poisoned - indicates a panic in another thread")
            .len()
    }
}

impl InvocationObserver for RecordingObserver {
    #[allow(clippy::expect_used)]
    fn record(&self, operation: &str, arguments: &Value) {
        self.records
            .lock()
            .expect("Recording observer lock poisoned - indicates a panic in another thread")
            .push(InvocationRecord {
                operation: operation.to_string(),
                arguments: arguments.clone(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recording_observer_captures_in_order() {
        let observer = RecordingObserver::new();
        observer.record("add", &json!({ "a": 1.0, "b": 2.0 }));
        observer.record("divide", &json!({ "a": 1.0, "b": 0.0 }));

        let records = observer.records();
        assert_eq!(observer.count(), 2);
        assert_eq!(records[0].operation, "add");
        assert_eq!(records[1].operation, "divide");
        assert_eq!(records[1].arguments["b"], 0.0);
    }

    #[test]
    fn test_noop_observer_discards() {
        // Just exercise the path; there is nothing to observe.
        NoopObserver.record("sin", &json!({ "a": 0.5 }));
    }
}
