use std::sync::Arc;

use crate::domain::call::repository::CallRepository;
use crate::domain::call::service::CallService;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CallServiceImpl {
    pub repository: Arc<dyn CallRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CallService for CallServiceImpl {
    fn call_catch(&self) -> Result<(), RepositoryError> {
        match self.repository.call() {
            Err(RepositoryError::Kind(e)) => {
                self.logger.info_with_cause(
                    &format!("exception handled, message={}", e.message()),
                    &e,
                );
                Ok(())
            }
            other => other,
        }
    }

    fn call_throw(&self) -> Result<(), RepositoryError> {
        self.repository.call()?;
        Ok(())
    }
}
