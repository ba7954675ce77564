use crate::domain::errors::RepositoryError;

/// Leaf dependency of the call chain.
pub trait CallRepository: Send + Sync {
    fn call(&self) -> Result<(), RepositoryError>;
}
