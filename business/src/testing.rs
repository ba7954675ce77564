//! Assertion helpers shared by the workspace's tests.

use std::error::Error;
use std::fmt::Debug;
use std::sync::Mutex;

use crate::domain::logger::Logger;

/// Runs `op` and asserts it ends in a failure accepted by `classify`.
///
/// Returns the failure untouched so callers can inspect its message.
#[track_caller]
pub fn assert_fails_with<T, E, F, C>(op: F, classify: C) -> E
where
    T: Debug,
    E: Debug,
    F: FnOnce() -> Result<T, E>,
    C: FnOnce(&E) -> bool,
{
    match op() {
        Ok(value) => panic!("expected a failure, operation returned Ok({value:?})"),
        Err(err) => {
            assert!(classify(&err), "failure has an unexpected kind: {err:?}");
            err
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// `Display` of the attached cause, if any.
    pub cause: Option<String>,
}

/// Logger that keeps every emission in memory.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn push(&self, level: LogLevel, message: &str, cause: Option<String>) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(LogEntry {
                level,
                message: message.to_string(),
                cause,
            });
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message, None);
    }
    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message, None);
    }
    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message, None);
    }
    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message, None);
    }
    fn info_with_cause(&self, message: &str, cause: &(dyn Error + 'static)) {
        self.push(LogLevel::Info, message, Some(cause.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorKind;

    #[test]
    fn should_return_the_failure_when_kind_matches() {
        let err = assert_fails_with(
            || -> Result<(), ErrorKind> { Err(ErrorKind::new("ex")) },
            |_| true,
        );
        assert_eq!(err.message(), "ex");
    }

    #[test]
    #[should_panic(expected = "expected a failure")]
    fn should_panic_when_operation_succeeds() {
        assert_fails_with(|| -> Result<u8, ErrorKind> { Ok(1) }, |_| true);
    }

    #[test]
    #[should_panic(expected = "unexpected kind")]
    fn should_panic_when_kind_does_not_match() {
        assert_fails_with(
            || -> Result<(), ErrorKind> { Err(ErrorKind::new("ex")) },
            |_| false,
        );
    }

    #[test]
    fn should_record_entries_in_order() {
        let logger = RecordingLogger::default();
        logger.debug("first");
        logger.info_with_cause("second", &ErrorKind::new("cause"));

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, LogLevel::Debug);
        assert_eq!(entries[0].cause, None);
        assert_eq!(entries[1].message, "second");
        assert_eq!(entries[1].cause.as_deref(), Some("cause"));
    }
}
