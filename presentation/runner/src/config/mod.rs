pub mod app_config;
pub mod scenario_config;
