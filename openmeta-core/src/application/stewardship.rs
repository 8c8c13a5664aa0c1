// openmeta-core/src/application/stewardship.rs

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::exchange::{ExchangeContext, ExchangeService};
use crate::domain::model::RelatedElement;
use crate::domain::model::glossary::GlossaryTermElement;
use crate::domain::model::stewardship::{
    ClassifiedElement, GovernanceClassificationProperties, GovernanceDefinitionElement,
    OwnershipProperties, RetentionClassificationProperties, SecurityTagsProperties,
    SemanticAssignmentProperties,
};
use crate::error::ExchangeError;
use crate::ports::stewardship::StewardshipExchangeClient;

/// Governance classifications, ownership, subject areas, semantic assignments,
/// governance definition links and peer duplicates.
pub struct StewardshipExchangeService {
    client: Arc<dyn StewardshipExchangeClient>,
    context: ExchangeContext,
}

impl ExchangeService for StewardshipExchangeService {
    fn exchange_context(&self) -> &ExchangeContext {
        &self.context
    }

    fn exchange_context_mut(&mut self) -> &mut ExchangeContext {
        &mut self.context
    }
}

impl StewardshipExchangeService {
    pub fn new(client: Arc<dyn StewardshipExchangeClient>, context: ExchangeContext) -> Self {
        Self { client, context }
    }

    // ── Governance action classifications ────────────────────────────

    pub async fn set_confidence_classification(
        &self,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &GovernanceClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("set_confidence_classification", |request| async move {
                self.client
                    .set_confidence_classification(
                        &request,
                        external_source_is_home,
                        element_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_confidence_classification(
        &self,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_confidence_classification", |request| async move {
                self.client
                    .clear_confidence_classification(&request, element_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn set_criticality_classification(
        &self,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &GovernanceClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("set_criticality_classification", |request| async move {
                self.client
                    .set_criticality_classification(
                        &request,
                        external_source_is_home,
                        element_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_criticality_classification(
        &self,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_criticality_classification", |request| async move {
                self.client
                    .clear_criticality_classification(&request, element_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn set_confidentiality_classification(
        &self,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &GovernanceClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("set_confidentiality_classification", |request| async move {
                self.client
                    .set_confidentiality_classification(
                        &request,
                        external_source_is_home,
                        element_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_confidentiality_classification(
        &self,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_confidentiality_classification", |request| async move {
                self.client
                    .clear_confidentiality_classification(&request, element_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn set_retention_classification(
        &self,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &RetentionClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("set_retention_classification", |request| async move {
                self.client
                    .set_retention_classification(
                        &request,
                        external_source_is_home,
                        element_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_retention_classification(
        &self,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_retention_classification", |request| async move {
                self.client
                    .clear_retention_classification(&request, element_guid, effective_time)
                    .await
            })
            .await
    }

    /// With `return_specific_level` unset, every confidence-classified element
    /// is returned regardless of `level_identifier`.
    pub async fn get_confidence_classified_elements(
        &self,
        return_specific_level: bool,
        level_identifier: i32,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError> {
        self.client
            .get_confidence_classified_elements(
                &self.context.request(),
                return_specific_level,
                level_identifier,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_elements_by_classification(
        &self,
        classification_name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError> {
        self.client
            .get_elements_by_classification(
                &self.context.request(),
                classification_name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    // ── Security and ownership ───────────────────────────────────────

    pub async fn add_security_tags(
        &self,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &SecurityTagsProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("add_security_tags", |request| async move {
                self.client
                    .add_security_tags(
                        &request,
                        external_source_is_home,
                        element_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_security_tags(
        &self,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_security_tags", |request| async move {
                self.client
                    .clear_security_tags(&request, element_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn add_ownership(
        &self,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &OwnershipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("add_ownership", |request| async move {
                self.client
                    .add_ownership(
                        &request,
                        external_source_is_home,
                        element_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_ownership(
        &self,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_ownership", |request| async move {
                self.client
                    .clear_ownership(&request, element_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn get_owners_elements(
        &self,
        owner: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError> {
        self.client
            .get_owners_elements(
                &self.context.request(),
                owner,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    // ── Subject areas ────────────────────────────────────────────────

    pub async fn add_element_to_subject_area(
        &self,
        external_source_is_home: bool,
        element_guid: &str,
        subject_area_name: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("add_element_to_subject_area", |request| async move {
                self.client
                    .add_element_to_subject_area(
                        &request,
                        external_source_is_home,
                        element_guid,
                        subject_area_name,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn remove_element_from_subject_area(
        &self,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("remove_element_from_subject_area", |request| async move {
                self.client
                    .remove_element_from_subject_area(&request, element_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn get_members_of_subject_area(
        &self,
        subject_area_name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError> {
        self.client
            .get_members_of_subject_area(
                &self.context.request(),
                subject_area_name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    // ── Semantic assignments ─────────────────────────────────────────

    pub async fn setup_semantic_assignment(
        &self,
        external_source_is_home: bool,
        element_guid: &str,
        glossary_term_guid: &str,
        properties: &SemanticAssignmentProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_semantic_assignment", |request| async move {
                self.client
                    .setup_semantic_assignment(
                        &request,
                        external_source_is_home,
                        element_guid,
                        glossary_term_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_semantic_assignment(
        &self,
        element_guid: &str,
        glossary_term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_semantic_assignment", |request| async move {
                self.client
                    .clear_semantic_assignment(
                        &request,
                        element_guid,
                        glossary_term_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    /// Glossary terms assigned as meanings of the element.
    pub async fn get_meanings(
        &self,
        element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError> {
        self.client
            .get_meanings(
                &self.context.request(),
                element_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_semantic_assignees(
        &self,
        glossary_term_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError> {
        self.client
            .get_semantic_assignees(
                &self.context.request(),
                glossary_term_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    // ── Governance definitions ───────────────────────────────────────

    pub async fn add_governance_definition_to_element(
        &self,
        external_source_is_home: bool,
        definition_guid: &str,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("add_governance_definition_to_element", |request| async move {
                self.client
                    .add_governance_definition_to_element(
                        &request,
                        external_source_is_home,
                        definition_guid,
                        element_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn remove_governance_definition_from_element(
        &self,
        definition_guid: &str,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward(
                "remove_governance_definition_from_element",
                |request| async move {
                    self.client
                        .remove_governance_definition_from_element(
                            &request,
                            definition_guid,
                            element_guid,
                            effective_time,
                        )
                        .await
                },
            )
            .await
    }

    pub async fn get_governed_elements(
        &self,
        definition_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError> {
        self.client
            .get_governed_elements(
                &self.context.request(),
                definition_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_governed_by_definitions(
        &self,
        element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GovernanceDefinitionElement>, ExchangeError> {
        self.client
            .get_governed_by_definitions(
                &self.context.request(),
                element_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    // ── Duplicates ───────────────────────────────────────────────────

    /// Marks two elements as describing the same thing. With
    /// `set_known_duplicate`, both also receive the KnownDuplicate classification.
    pub async fn link_elements_as_peer_duplicates(
        &self,
        external_source_is_home: bool,
        element1_guid: &str,
        element2_guid: &str,
        properties: &GovernanceClassificationProperties,
        set_known_duplicate: bool,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("link_elements_as_peer_duplicates", |request| async move {
                self.client
                    .link_elements_as_peer_duplicates(
                        &request,
                        external_source_is_home,
                        element1_guid,
                        element2_guid,
                        properties,
                        set_known_duplicate,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn unlink_elements_as_peer_duplicates(
        &self,
        element1_guid: &str,
        element2_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("unlink_elements_as_peer_duplicates", |request| async move {
                self.client
                    .unlink_elements_as_peer_duplicates(
                        &request,
                        element1_guid,
                        element2_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn get_peer_duplicates(
        &self,
        element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError> {
        self.client
            .get_peer_duplicates(
                &self.context.request(),
                element_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }
}
