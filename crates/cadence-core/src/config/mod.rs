use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use config::Config;
use serde::Deserialize;


pub const CONFIG_FILE_NAME: &str = "cadence.toml";
pub const ENV_PREFIX: &str = "CADENCE";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub evaluation: EvaluationConfig,
    #[serde(default)]
    pub overrides: Vec<ScheduledOverrideConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Controls the reference instant overrides are evaluated against.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluationConfig {
    /// Fixed reference instant; the current time is used when unset.
    pub now: Option<DateTime<FixedOffset>>,
}

/// A declared override window, as written in configuration.
///
/// The frequency is kept as text so that an unknown token can be reported
/// verbatim when the override is validated.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledOverrideConfig {
    pub name: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub recurrence_rule: Option<RecurrenceRuleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecurrenceRuleConfig {
    #[serde(default)]
    pub frequency: String,
    pub until_time: Option<DateTime<FixedOffset>>,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `cadence.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::from_sources(
            config::File::with_name(CONFIG_FILE_NAME).required(false),
            Some(environment(None)),
        )
    }

    /// ## Summary
    /// Loads configuration from a TOML document alone, applying the same defaults
    /// as [`Settings::load`]. Environment variables are not consulted.
    ///
    /// ## Errors
    /// Returns an error if the document is malformed or does not deserialize.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_sources(
            config::File::from_str(source, config::FileFormat::Toml),
            None,
        )
    }

    fn from_sources<S>(file: S, environment: Option<config::Environment>) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut builder = Config::builder()
            .set_default("logging.level", "info")?
            .add_source(file);
        if let Some(environment) = environment {
            builder = builder.add_source(environment);
        }

        let settings = builder.build()?.try_deserialize::<Settings>()?;

        tracing::debug!(
            override_count = settings.overrides.len(),
            "Configuration deserialized"
        );

        Ok(settings)
    }
}

/// `CADENCE__*` variables, read from `vars` when given and from the process
/// environment otherwise.
fn environment(vars: Option<config::Map<String, String>>) -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
        .source(vars)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
