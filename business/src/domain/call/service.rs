use crate::domain::errors::RepositoryError;

/// Entry points that either absorb or propagate a repository failure.
pub trait CallService: Send + Sync {
    /// Handles `RepositoryError::Kind` locally. Any other failure is returned as is.
    fn call_catch(&self) -> Result<(), RepositoryError>;
    /// No handling: the repository failure reaches the caller unchanged.
    fn call_throw(&self) -> Result<(), RepositoryError>;
}
