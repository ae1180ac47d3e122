//! Application configuration
//!
//! Settings are layered: `config/default.toml`, then `config/{VIGIL_ENV}.toml`,
//! then `VIGIL__SECTION__KEY` environment variables.

use chrono::Duration;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;

use crate::error::VigilError;
use crate::ews::audit::DEFAULT_PREDICTION_RETENTION;
use crate::ews::population::DEFAULT_STALENESS_HOURS;
use crate::ews::trend::DEFAULT_TREND_WINDOW;
use crate::ews::{PopulationAggregator, ScoreEngine, ScoringTables};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub scoring: ScoringTables,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Hours after which a patient's vitals are overdue.
    pub staleness_hours: i64,
    pub trend_window: usize,
    /// Prediction records kept per patient in the in-process log.
    pub prediction_retention: usize,
}

/// One week; anything longer is treated as a configuration mistake.
pub const MAX_STALENESS_HOURS: i64 = 24 * 7;

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            staleness_hours: DEFAULT_STALENESS_HOURS,
            trend_window: DEFAULT_TREND_WINDOW,
            prediction_retention: DEFAULT_PREDICTION_RETENTION,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), VigilError> {
        if !(1..=MAX_STALENESS_HOURS).contains(&self.monitoring.staleness_hours) {
            return Err(ConfigError::Message(format!(
                "monitoring.staleness_hours must be between 1 and {}",
                MAX_STALENESS_HOURS
            ))
            .into());
        }
        if self.monitoring.trend_window < 2 {
            return Err(ConfigError::Message("monitoring.trend_window must be at least 2".into()).into());
        }
        if self.monitoring.prediction_retention < self.monitoring.trend_window {
            return Err(ConfigError::Message(
                "monitoring.prediction_retention must cover the trend window".into(),
            )
            .into());
        }
        self.scoring.validate()
    }

    pub fn staleness(&self) -> Duration {
        Duration::hours(self.monitoring.staleness_hours)
    }

    pub fn aggregator(&self) -> PopulationAggregator {
        PopulationAggregator::new(
            ScoreEngine::new(self.scoring.clone()),
            self.staleness(),
            self.monitoring.trend_window,
        )
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)
}

/// Build and validate a configuration from extra sources layered over defaults.
pub fn load_from(
    layer: impl FnOnce(ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState>,
) -> Result<Config, VigilError> {
    let config: Config = layer(defaults()?).build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from files and the environment
pub fn load_config() -> Result<Config, VigilError> {
    let env = std::env::var("VIGIL_ENV").unwrap_or_else(|_| "development".into());
    load_from(|builder| {
        builder
            // Start with default settings
            .add_source(config::File::with_name("config/default").required(false))
            // Override with environment-specific settings
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("VIGIL").separator("__"))
    })
}
