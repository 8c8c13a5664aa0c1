// openmeta-core/src/domain/model/lineage.rs

use serde::{Deserialize, Serialize};

use super::common::{ElementHeader, ElementStub, Properties, RelationshipHeader};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    #[default]
    Draft,
    Proposed,
    Approved,
    Active,
    Disabled,
    Deleted,
}

/// How a parent process relates to one of its steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessContainmentType {
    #[default]
    Owned,
    Used,
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessProperties {
    pub qualified_name: String,
    #[serde(default)]
    pub technical_name: Option<String>,
    #[serde(default)]
    pub technical_description: Option<String>,
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default)]
    pub implementation_language: Option<String>,
    #[serde(default)]
    pub additional_properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessElement {
    pub header: ElementHeader,
    pub properties: ProcessProperties,
    #[serde(default)]
    pub status: ProcessStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortType {
    InIn,
    OutOut,
    #[default]
    InOut,
    OutIn,
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortProperties {
    pub qualified_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub port_type: PortType,
    #[serde(default)]
    pub additional_properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortElement {
    pub header: ElementHeader,
    pub properties: PortProperties,
}

/// Properties shared by data flows, control flows and lineage mappings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineageRelationshipProperties {
    #[serde(default)]
    pub qualified_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default)]
    pub guard: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineageRelationshipElement {
    pub header: RelationshipHeader,
    pub properties: LineageRelationshipProperties,
    pub source: ElementStub,
    pub destination: ElementStub,
}
