// openmeta-core/src/domain/model/common.rs
//
// Value objects shared by every exchange family. They are owned by the remote
// metadata client; the exchange services only carry them through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form property bundle (additional/extended properties, search properties...).
pub type Properties = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementHeader {
    pub guid: String,
    pub type_name: String,
    #[serde(default)]
    pub classifications: Vec<String>,
    #[serde(default)]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub effective_to: Option<DateTime<Utc>>,
}

/// Lightweight reference to an element at the end of a relationship.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementStub {
    pub guid: String,
    pub type_name: String,
    #[serde(default)]
    pub unique_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelationshipHeader {
    pub guid: String,
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelatedElement {
    pub relationship: RelationshipHeader,
    #[serde(default)]
    pub relationship_properties: Properties,
    pub related_element: ElementStub,
}

/// Values that override the template's own when copying an element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemplateProperties {
    pub qualified_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub network_address: Option<String>,
    #[serde(default)]
    pub version_identifier: Option<String>,
}

impl TemplateProperties {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Default::default()
        }
    }
}
