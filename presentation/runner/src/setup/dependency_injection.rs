use std::sync::Arc;

use business::application::call::service::CallServiceImpl;
use business::domain::call::service::CallService;
use logger::TracingLogger;
use repository::failing::FailingRepository;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub service: Arc<dyn CallService>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let repository = Arc::new(FailingRepository::with_message(
            config.scenario.repository_message.clone(),
        ));

        let service = Arc::new(CallServiceImpl { repository, logger });

        Self { service }
    }
}
