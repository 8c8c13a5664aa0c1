// openmeta-core/src/domain/connector/configuration.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::context::ExternalSource;
use crate::domain::synchronization::{PermittedSynchronization, SynchronizationGuard};

/// Settings the context manager needs to wire an integration connector.
#[derive(Debug, Deserialize, Serialize, Clone, Validate, PartialEq)]
pub struct ConnectorConfig {
    #[validate(length(min = 1, message = "connector_name cannot be empty"))]
    pub connector_name: String,

    #[validate(length(min = 1, message = "user_id cannot be empty"))]
    pub user_id: String,

    #[serde(default)]
    pub permitted_synchronization: PermittedSynchronization,

    /// Direction that blocks mutating calls. Defaults to `to_third_party`.
    #[serde(default)]
    pub blocked_synchronization: Option<PermittedSynchronization>,

    #[serde(default)]
    pub external_source: ExternalSource,

    #[serde(default)]
    pub for_lineage: bool,

    #[serde(default)]
    pub for_duplicate_processing: bool,

    #[serde(default = "default_refresh_interval_secs")]
    #[validate(range(min = 1, message = "refresh_interval_secs must be at least 1"))]
    pub refresh_interval_secs: u64,
}

impl ConnectorConfig {
    pub fn new(connector_name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            connector_name: connector_name.into(),
            user_id: user_id.into(),
            permitted_synchronization: PermittedSynchronization::default(),
            blocked_synchronization: None,
            external_source: ExternalSource::default(),
            for_lineage: false,
            for_duplicate_processing: false,
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }

    pub fn with_synchronization(mut self, permitted: PermittedSynchronization) -> Self {
        self.permitted_synchronization = permitted;
        self
    }

    pub fn with_external_source(mut self, external_source: ExternalSource) -> Self {
        self.external_source = external_source;
        self
    }

    pub fn guard(&self) -> SynchronizationGuard {
        SynchronizationGuard::with_blocked(
            self.permitted_synchronization,
            self.blocked_synchronization
                .unwrap_or(SynchronizationGuard::DEFAULT_BLOCKED),
        )
    }
}

fn default_refresh_interval_secs() -> u64 {
    60
}
