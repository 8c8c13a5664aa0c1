// openmeta-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(openmeta::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(openmeta::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Connector configuration not found: {0}")]
    #[diagnostic(code(openmeta::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Invalid connector configuration: {0}")]
    #[diagnostic(
        code(openmeta::infra::config_invalid),
        help("connector_name and user_id are mandatory, refresh_interval_secs must be >= 1.")
    )]
    InvalidConfig(String),

    #[error("Configuration Error: {0}")]
    ConfigError(String),
}

impl From<anyhow::Error> for InfrastructureError {
    fn from(err: anyhow::Error) -> Self {
        InfrastructureError::ConfigError(format!("{:#}", err))
    }
}
