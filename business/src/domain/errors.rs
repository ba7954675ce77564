/// Failure classification raised at the repository failure site.
///
/// Carries its message verbatim and is never rebuilt while it travels up the
/// call chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ErrorKind {
    message: String,
}

impl ErrorKind {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Repository errors for domain layer.
/// Variants without a payload use code-style identifiers for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Kind(#[from] ErrorKind),
    #[error("repository.unavailable")]
    Unavailable,
}

impl RepositoryError {
    pub fn kind(message: impl Into<String>) -> Self {
        RepositoryError::Kind(ErrorKind::new(message))
    }
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }

    pub fn as_kind(&self) -> Option<&ErrorKind> {
        match self {
            RepositoryError::Kind(kind) => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn should_keep_message_verbatim() {
        let err = ErrorKind::new("ex");
        assert_eq!(err.message(), "ex");
        assert_eq!(err.to_string(), "ex");
    }

    #[test]
    fn should_not_chain_a_source() {
        let err = ErrorKind::new("ex");
        let err_ref: &dyn Error = &err;
        assert!(err_ref.source().is_none());
    }

    #[test]
    fn should_display_kind_transparently() {
        let err = RepositoryError::kind("boom");
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.as_kind(), Some(&ErrorKind::new("boom")));
    }

    #[test]
    fn should_use_code_identifier_for_unavailable() {
        let err = RepositoryError::unavailable();
        assert_eq!(err.to_string(), "repository.unavailable");
        assert!(err.as_kind().is_none());
    }

    #[test]
    fn should_convert_error_kind_without_touching_it() {
        let kind = ErrorKind::new("converted");
        let err: RepositoryError = kind.clone().into();
        assert!(matches!(err, RepositoryError::Kind(ref k) if *k == kind));
    }
}
