// openmeta-core/src/domain/model/glossary.rs

use serde::{Deserialize, Serialize};

use super::common::{ElementHeader, Properties};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlossaryProperties {
    pub qualified_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(default)]
    pub additional_properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlossaryElement {
    pub header: ElementHeader,
    pub properties: GlossaryProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlossaryCategoryProperties {
    pub qualified_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub additional_properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlossaryCategoryElement {
    pub header: ElementHeader,
    pub properties: GlossaryCategoryProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlossaryTermStatus {
    #[default]
    Draft,
    Prepared,
    Proposed,
    Approved,
    Rejected,
    Active,
    Deprecated,
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlossaryTermProperties {
    pub qualified_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub examples: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(default)]
    pub additional_properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlossaryTermElement {
    pub header: ElementHeader,
    pub properties: GlossaryTermProperties,
    #[serde(default)]
    pub status: GlossaryTermStatus,
}

/// Properties of a relationship between two terms (synonym, antonym, ISA...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlossaryTermRelationship {
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub steward: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlossaryTermCategorization {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
