// openmeta-core/src/domain/model/connection.rs

use serde::{Deserialize, Serialize};

use super::common::{ElementHeader, ElementStub, Properties};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectionProperties {
    pub qualified_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Names of the secured properties; their values stay in the secrets store.
    #[serde(default)]
    pub secured_property_names: Vec<String>,
    #[serde(default)]
    pub configuration_properties: Properties,
    #[serde(default)]
    pub additional_properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectionElement {
    pub header: ElementHeader,
    pub properties: ConnectionProperties,
    #[serde(default)]
    pub connector_type: Option<ElementStub>,
    #[serde(default)]
    pub endpoint: Option<ElementStub>,
    #[serde(default)]
    pub embedded_connections: Vec<ElementStub>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EndpointProperties {
    pub qualified_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub network_address: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub encryption_method: Option<String>,
    #[serde(default)]
    pub additional_properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EndpointElement {
    pub header: ElementHeader,
    pub properties: EndpointProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectorTypeProperties {
    pub qualified_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub connector_provider_class_name: String,
    #[serde(default)]
    pub supported_asset_type_name: Option<String>,
    #[serde(default)]
    pub expected_data_format: Option<String>,
    #[serde(default)]
    pub recognized_configuration_properties: Vec<String>,
    #[serde(default)]
    pub additional_properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectorTypeElement {
    pub header: ElementHeader,
    pub properties: ConnectorTypeProperties,
}

/// Properties of the link between a virtual connection and one it embeds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbeddedConnectionProperties {
    pub position: u32,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub arguments: Properties,
}

/// Properties of the link between an asset and the connection used to reach it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetConnectionProperties {
    #[serde(default)]
    pub asset_summary: Option<String>,
}
