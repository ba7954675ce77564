use std::error::Error;

use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Propagation -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Propagation -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Propagation -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Propagation -- ", "{}", message);
    }
    fn info_with_cause(&self, message: &str, cause: &(dyn Error + 'static)) {
        info!(target: "Propagation -- ", error = %cause, "{}", message);
    }
}
