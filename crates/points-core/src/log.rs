//! # Logging Sink
//!
//! The core never logs on its own initiative through global state. Callers
//! hand it a [`LogSink`], and every message is tagged with the caller's
//! [`RequestId`].
//!
//! ```text
//! ┌──────────────┐  RequestId  ┌──────────────┐  warn/error  ┌──────────────┐
//! │  middleware  │────────────►│   handler    │─────────────►│ TracingSink  │
//! │ (mints id)   │  extension  │ (passes id)  │   via core   │ request_id=… │
//! └──────────────┘             └──────────────┘              └──────────────┘
//! ```
//!
//! Logging is never required for correctness: [`NullSink`] drops everything.

use std::fmt;

use uuid::Uuid;

// =============================================================================
// Request Correlation
// =============================================================================

/// Opaque per-request correlation id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Mints a fresh random id (UUID v4).
    pub fn generate() -> Self {
        RequestId(Uuid::new_v4().to_string())
    }

    /// Wraps an id supplied by someone else.
    pub fn new(id: impl Into<String>) -> Self {
        RequestId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Sink
// =============================================================================

/// Severity of a sink message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Warn,
    Error,
}

/// Destination for messages about rejected or malformed input.
pub trait LogSink {
    fn log(&self, level: LogLevel, message: &str);

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _level: LogLevel, _message: &str) {}
}

/// Forwards messages to `tracing` with a `request_id` field.
#[derive(Debug, Clone)]
pub struct TracingSink {
    request_id: RequestId,
}

impl TracingSink {
    pub fn new(request_id: RequestId) -> Self {
        TracingSink { request_id }
    }
}

impl LogSink for TracingSink {
    fn log(&self, level: LogLevel, message: &str) {
        let request_id = self.request_id.as_str();
        match level {
            LogLevel::Warn => tracing::warn!(request_id, "{}", message),
            LogLevel::Error => tracing::error!(request_id, "{}", message),
        }
    }
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::{LogLevel, LogSink};

    /// Keeps every message for later assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        entries: Mutex<Vec<(LogLevel, String)>>,
    }

    impl RecordingSink {
        pub fn entries(&self) -> Vec<(LogLevel, String)> {
            self.entries.lock().unwrap().clone()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.lock().unwrap().is_empty()
        }
    }

    impl LogSink for RecordingSink {
        fn log(&self, level: LogLevel, message: &str) {
            self.entries.lock().unwrap().push((level, message.to_string()));
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_default_methods_route_levels() {
        let sink = RecordingSink::default();
        sink.warn("first");
        sink.error("second");
        assert_eq!(
            sink.entries(),
            vec![
                (LogLevel::Warn, "first".to_string()),
                (LogLevel::Error, "second".to_string()),
            ]
        );
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        let sink = TracingSink::new(RequestId::new("req-1"));
        sink.warn("dropped");
        sink.error("dropped");
    }
}
