// openmeta-core/src/infrastructure/config/connector.rs

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::connector::ConnectorConfig;
use crate::domain::synchronization::PermittedSynchronization;
use crate::infrastructure::error::InfrastructureError;

pub const ENV_PERMITTED_SYNCHRONIZATION: &str = "OPENMETA_PERMITTED_SYNCHRONIZATION";
pub const ENV_USER_ID: &str = "OPENMETA_USER_ID";
pub const ENV_CONNECTOR_NAME: &str = "OPENMETA_CONNECTOR_NAME";

const CANDIDATES: [&str; 4] = [
    "openmeta.yaml",
    "openmeta.yml",
    "connector.yaml",
    "connector.yml",
];

// --- LOADERS ---

/// Looks for a connector configuration file in `config_dir` and loads it.
#[instrument(skip(config_dir))]
pub fn load_connector_config(config_dir: &Path) -> Result<ConnectorConfig, InfrastructureError> {
    let config_path = find_connector_config(config_dir)?;
    load_connector_config_file(&config_path)
}

#[instrument]
pub fn load_connector_config_file(path: &Path) -> Result<ConnectorConfig, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(format!("{:?}", path)));
    }
    info!(path = ?path, "Loading connector configuration");

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read connector config at {:?}", path))?;
    let mut config = parse_connector_config(&content)?;

    // Layering: file first, then environment
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    config
        .validate()
        .map_err(|e| InfrastructureError::InvalidConfig(e.to_string()))?;

    Ok(config)
}

pub fn parse_connector_config(content: &str) -> Result<ConnectorConfig, InfrastructureError> {
    let config: ConnectorConfig = serde_yaml::from_str(content)?;
    Ok(config)
}

fn find_connector_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    for filename in CANDIDATES {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, CANDIDATES
    )))
}

/// Overrides file values with environment values. `lookup` is injected so tests
/// don't have to touch the process environment.
pub fn apply_env_overrides<F>(
    config: &mut ConnectorConfig,
    lookup: F,
) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_PERMITTED_SYNCHRONIZATION) {
        let policy = PermittedSynchronization::from_str(&val).map_err(|e| {
            warn!(value = %val, "Rejected permitted synchronization override");
            InfrastructureError::InvalidConfig(e.to_string())
        })?;
        info!(old = %config.permitted_synchronization, new = %policy, "Overriding permitted synchronization via ENV");
        config.permitted_synchronization = policy;
    }
    if let Some(val) = lookup(ENV_USER_ID) {
        info!(old = ?config.user_id, new = ?val, "Overriding user id via ENV");
        config.user_id = val;
    }
    if let Some(val) = lookup(ENV_CONNECTOR_NAME) {
        info!(old = ?config.connector_name, new = ?val, "Overriding connector name via ENV");
        config.connector_name = val;
    }
    Ok(())
}
