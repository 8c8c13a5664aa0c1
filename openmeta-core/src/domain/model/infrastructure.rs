// openmeta-core/src/domain/model/infrastructure.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ElementHeader, Properties};

/// Hosts, platforms and servers share this bundle; `type_name` picks the kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InfrastructureProperties {
    pub qualified_name: String,
    pub type_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deployed_implementation_type: Option<String>,
    #[serde(default)]
    pub version_identifier: Option<String>,
    #[serde(default)]
    pub additional_properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InfrastructureElement {
    pub header: ElementHeader,
    pub properties: InfrastructureProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SoftwareCapabilityProperties {
    pub qualified_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub capability_type: Option<String>,
    #[serde(default)]
    pub capability_version: Option<String>,
    #[serde(default)]
    pub patch_level: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub additional_properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SoftwareCapabilityElement {
    pub header: ElementHeader,
    pub properties: SoftwareCapabilityProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationalStatus {
    #[default]
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CapabilityDeploymentProperties {
    #[serde(default)]
    pub deployment_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deployer: Option<String>,
    #[serde(default)]
    pub deployer_type_name: Option<String>,
    #[serde(default)]
    pub operational_status: OperationalStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerAssetUseType {
    Owns,
    Governs,
    Maintains,
    #[default]
    Uses,
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerAssetUseProperties {
    #[serde(default)]
    pub use_type: ServerAssetUseType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub minimum_instances: Option<u32>,
    #[serde(default)]
    pub maximum_instances: Option<u32>,
}
