use business::domain::call::service::CallService;
use business::domain::errors::RepositoryError;

use crate::config::scenario_config::Scenario;

pub struct ScenarioRunner;

impl ScenarioRunner {
    /// Runs the scenario against `service`.
    ///
    /// A failure from `call_throw` is not handled here and reaches the caller.
    pub fn run(scenario: Scenario, service: &dyn CallService) -> Result<(), RepositoryError> {
        tracing::info!(%scenario, "running scenario");

        if matches!(scenario, Scenario::Catch | Scenario::Both) {
            service.call_catch()?;
            tracing::info!("call_catch returned normally");
        }

        if matches!(scenario, Scenario::Throw | Scenario::Both) {
            service.call_throw()?;
            tracing::info!("call_throw returned normally");
        }

        Ok(())
    }
}
