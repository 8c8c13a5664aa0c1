// openmeta-core/src/domain/model/metadata.rs
//
// Generic open metadata elements used by the governance service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ElementStub, Properties, RelationshipHeader};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementStatus {
    Draft,
    Prepared,
    Proposed,
    Approved,
    Rejected,
    #[default]
    Active,
    Disabled,
    Deprecated,
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewMetadataElement {
    pub type_name: String,
    #[serde(default)]
    pub initial_status: ElementStatus,
    #[serde(default)]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub effective_to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub template_guid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenMetadataElement {
    pub guid: String,
    pub type_name: String,
    #[serde(default)]
    pub status: ElementStatus,
    #[serde(default)]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub effective_to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub classifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelatedMetadataElement {
    pub relationship: RelationshipHeader,
    #[serde(default)]
    pub relationship_properties: Properties,
    pub element: OpenMetadataElement,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelatedMetadataElements {
    pub relationship: RelationshipHeader,
    #[serde(default)]
    pub properties: Properties,
    pub end1: ElementStub,
    pub end2: ElementStub,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewRelatedElements {
    pub relationship_type_name: String,
    pub end1_guid: String,
    pub end2_guid: String,
    #[serde(default)]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub effective_to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub properties: Properties,
}
