use business::domain::call::repository::CallRepository;
use business::domain::errors::{ErrorKind, RepositoryError};

const DEFAULT_MESSAGE: &str = "ex";

/// Repository whose only outcome is a failure.
///
/// Every call raises a fresh `ErrorKind` carrying the configured message.
#[derive(Debug, Clone)]
pub struct FailingRepository {
    message: String,
}

impl FailingRepository {
    pub fn new() -> Self {
        Self::with_message(DEFAULT_MESSAGE)
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for FailingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CallRepository for FailingRepository {
    fn call(&self) -> Result<(), RepositoryError> {
        tracing::debug!(failure = %self.message, "repository call failing");
        Err(ErrorKind::new(self.message.as_str()).into())
    }
}
