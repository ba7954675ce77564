use super::scenario_config::{ConfigError, ScenarioConfig};

pub struct AppConfig {
    pub scenario: ScenarioConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            scenario: ScenarioConfig::from_env()?,
        })
    }
}
