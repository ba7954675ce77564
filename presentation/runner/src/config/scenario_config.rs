use std::env;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config.invalid_scenario: {0}")]
    InvalidScenario(String),
}

/// Which service entry points the runner exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Catch,
    Throw,
    Both,
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scenario::Catch => write!(f, "catch"),
            Scenario::Throw => write!(f, "throw"),
            Scenario::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for Scenario {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catch" => Ok(Scenario::Catch),
            "throw" => Ok(Scenario::Throw),
            "both" => Ok(Scenario::Both),
            _ => Err(ConfigError::InvalidScenario(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub scenario: Scenario,
    pub repository_message: String,
}

impl ScenarioConfig {
    /// Load scenario configuration from environment variables
    ///
    /// Environment variables:
    /// - RUNNER_SCENARIO: catch, throw or both (default: "both")
    /// - REPOSITORY_MESSAGE: message raised by the repository (default: "ex")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("RUNNER_SCENARIO").ok(),
            env::var("REPOSITORY_MESSAGE").ok(),
        )
    }

    fn from_values(
        scenario: Option<String>,
        repository_message: Option<String>,
    ) -> Result<Self, ConfigError> {
        let scenario = match scenario {
            Some(value) => value.parse()?,
            None => Scenario::Both,
        };
        let repository_message = repository_message.unwrap_or_else(|| "ex".to_string());

        Ok(Self {
            scenario,
            repository_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_both_and_ex() {
        let config = ScenarioConfig::from_values(None, None).unwrap();

        assert_eq!(config.scenario, Scenario::Both);
        assert_eq!(config.repository_message, "ex");
    }

    #[test]
    fn should_parse_scenario_case_insensitively() {
        let config =
            ScenarioConfig::from_values(Some(" Throw ".to_string()), Some("boom".to_string()))
                .unwrap();

        assert_eq!(config.scenario, Scenario::Throw);
        assert_eq!(config.repository_message, "boom");
    }

    #[test]
    fn should_reject_unknown_scenario() {
        let result = ScenarioConfig::from_values(Some("retry".to_string()), None);

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidScenario("retry".to_string())
        );
    }

    #[test]
    fn should_display_scenario_names_that_parse_back() {
        for scenario in [Scenario::Catch, Scenario::Throw, Scenario::Both] {
            assert_eq!(scenario.to_string().parse::<Scenario>(), Ok(scenario));
        }
    }
}
