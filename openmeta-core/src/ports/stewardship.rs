// openmeta-core/src/ports/stewardship.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::context::RequestContext;
use crate::domain::model::RelatedElement;
use crate::domain::model::glossary::GlossaryTermElement;
use crate::domain::model::stewardship::{
    ClassifiedElement, GovernanceClassificationProperties, GovernanceDefinitionElement,
    OwnershipProperties, RetentionClassificationProperties, SecurityTagsProperties,
    SemanticAssignmentProperties,
};
use crate::error::ExchangeError;

/// Remote client for governance classifications and stewardship relationships.
#[async_trait]
pub trait StewardshipExchangeClient: Send + Sync {
    // --- Governance action classifications ---
    async fn set_confidence_classification(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &GovernanceClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_confidence_classification(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn set_criticality_classification(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &GovernanceClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_criticality_classification(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn set_confidentiality_classification(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &GovernanceClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_confidentiality_classification(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn set_retention_classification(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &RetentionClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_retention_classification(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_confidence_classified_elements(
        &self,
        request: &RequestContext,
        return_specific_level: bool,
        level_identifier: i32,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError>;

    async fn get_elements_by_classification(
        &self,
        request: &RequestContext,
        classification_name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError>;

    // --- Security and ownership ---
    async fn add_security_tags(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &SecurityTagsProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_security_tags(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn add_ownership(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &OwnershipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_ownership(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_owners_elements(
        &self,
        request: &RequestContext,
        owner: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError>;

    // --- Subject areas ---
    async fn add_element_to_subject_area(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        subject_area_name: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_element_from_subject_area(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_members_of_subject_area(
        &self,
        request: &RequestContext,
        subject_area_name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError>;

    // --- Semantic assignments ---
    async fn setup_semantic_assignment(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        glossary_term_guid: &str,
        properties: &SemanticAssignmentProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_semantic_assignment(
        &self,
        request: &RequestContext,
        element_guid: &str,
        glossary_term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_meanings(
        &self,
        request: &RequestContext,
        element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError>;

    async fn get_semantic_assignees(
        &self,
        request: &RequestContext,
        glossary_term_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError>;

    // --- Governance definitions ---
    async fn add_governance_definition_to_element(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        definition_guid: &str,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_governance_definition_from_element(
        &self,
        request: &RequestContext,
        definition_guid: &str,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_governed_elements(
        &self,
        request: &RequestContext,
        definition_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError>;

    async fn get_governed_by_definitions(
        &self,
        request: &RequestContext,
        element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GovernanceDefinitionElement>, ExchangeError>;

    // --- Duplicates ---
    async fn link_elements_as_peer_duplicates(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element1_guid: &str,
        element2_guid: &str,
        properties: &GovernanceClassificationProperties,
        set_known_duplicate: bool,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn unlink_elements_as_peer_duplicates(
        &self,
        request: &RequestContext,
        element1_guid: &str,
        element2_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_peer_duplicates(
        &self,
        request: &RequestContext,
        element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError>;
}
