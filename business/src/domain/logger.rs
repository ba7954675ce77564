use std::error::Error;

pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
    /// Info-level entry with the failure attached for diagnostics only.
    fn info_with_cause(&self, message: &str, cause: &(dyn Error + 'static));
}
