use std::env;

use clap::ValueEnum;
use thiserror::Error;

use crate::OutputFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid LENDER_MATCH_OUTPUT '{0}': expected json, table, csv or minimal")]
    InvalidOutput(String),
}

/// Settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Output format used when `--output` is not given.
    pub default_output: OutputFormat,
}

impl CliConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_values(
            env::var("LENDER_MATCH_LOG_LEVEL").ok(),
            env::var("LENDER_MATCH_OUTPUT").ok(),
        )
    }

    fn from_values(
        log_level: Option<String>,
        output: Option<String>,
    ) -> Result<Self, ConfigError> {
        let default_output = match output {
            Some(raw) => OutputFormat::from_str(raw.trim(), true)
                .map_err(|_| ConfigError::InvalidOutput(raw))?,
            None => OutputFormat::Json,
        };

        Ok(Self {
            log_level: log_level.unwrap_or_else(|| "warn".to_string()),
            default_output,
        })
    }
}
