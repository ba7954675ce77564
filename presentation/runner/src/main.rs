use dotenvy::dotenv;

mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, runner::ScenarioRunner};

/// Runner Entry Point
///
/// Wires the call service to the failing repository and the tracing logger,
/// then runs the configured scenario. A propagated failure ends up here and
/// is returned from `main`, so the process exits with an error.
fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run scenario
    ScenarioRunner::run(config.scenario.scenario, container.service.as_ref())?;

    Ok(())
}
