// openmeta-core/src/domain/model/stewardship.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ElementHeader, ElementStub, Properties};

/// Properties of the confidence, criticality and confidentiality classifications.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GovernanceClassificationProperties {
    pub level_identifier: i32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub steward: Option<String>,
    #[serde(default)]
    pub steward_type_name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetentionClassificationProperties {
    #[serde(flatten)]
    pub classification: GovernanceClassificationProperties,
    #[serde(default)]
    pub associated_guid: Option<String>,
    #[serde(default)]
    pub archive_after: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delete_after: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SecurityTagsProperties {
    #[serde(default)]
    pub security_labels: Vec<String>,
    #[serde(default)]
    pub security_properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OwnershipProperties {
    pub owner: String,
    #[serde(default)]
    pub owner_type_name: Option<String>,
    #[serde(default)]
    pub owner_property_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticAssignmentStatus {
    #[default]
    Discovered,
    Proposed,
    Imported,
    Validated,
    Deprecated,
    Obsolete,
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SemanticAssignmentProperties {
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: SemanticAssignmentStatus,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub steward: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GovernanceDefinitionProperties {
    pub document_identifier: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub domain_identifier: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GovernanceDefinitionElement {
    pub header: ElementHeader,
    pub properties: GovernanceDefinitionProperties,
}

/// An element returned by a classification-driven query, with the matching
/// classification's properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassifiedElement {
    pub element: ElementStub,
    pub classification_name: String,
    #[serde(default)]
    pub classification_properties: Properties,
}
