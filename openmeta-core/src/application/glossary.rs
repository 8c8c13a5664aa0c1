// openmeta-core/src/application/glossary.rs

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::exchange::{ExchangeContext, ExchangeService};
use crate::domain::model::glossary::{
    GlossaryCategoryElement, GlossaryCategoryProperties, GlossaryElement, GlossaryProperties,
    GlossaryTermCategorization, GlossaryTermElement, GlossaryTermProperties,
    GlossaryTermRelationship, GlossaryTermStatus,
};
use crate::domain::model::{RelatedElement, TemplateProperties};
use crate::error::ExchangeError;
use crate::ports::glossary::GlossaryExchangeClient;

/// Glossaries, their categories and terms.
pub struct GlossaryExchangeService {
    client: Arc<dyn GlossaryExchangeClient>,
    context: ExchangeContext,
}

impl ExchangeService for GlossaryExchangeService {
    fn exchange_context(&self) -> &ExchangeContext {
        &self.context
    }

    fn exchange_context_mut(&mut self) -> &mut ExchangeContext {
        &mut self.context
    }
}

impl GlossaryExchangeService {
    pub fn new(client: Arc<dyn GlossaryExchangeClient>, context: ExchangeContext) -> Self {
        Self { client, context }
    }

    // ── Glossaries ───────────────────────────────────────────────────

    pub async fn create_glossary(
        &self,
        external_source_is_home: bool,
        properties: &GlossaryProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_glossary", |request| async move {
                self.client
                    .create_glossary(&request, external_source_is_home, properties)
                    .await
            })
            .await
    }

    pub async fn create_glossary_from_template(
        &self,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_glossary_from_template", |request| async move {
                self.client
                    .create_glossary_from_template(
                        &request,
                        external_source_is_home,
                        template_guid,
                        template_properties,
                    )
                    .await
            })
            .await
    }

    pub async fn update_glossary(
        &self,
        glossary_guid: &str,
        is_merge_update: bool,
        properties: &GlossaryProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_glossary", |request| async move {
                self.client
                    .update_glossary(
                        &request,
                        glossary_guid,
                        is_merge_update,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn remove_glossary(
        &self,
        glossary_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("remove_glossary", |request| async move {
                self.client
                    .remove_glossary(&request, glossary_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn find_glossaries(
        &self,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryElement>, ExchangeError> {
        self.client
            .find_glossaries(
                &self.context.request(),
                search_string,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_glossaries_by_name(
        &self,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryElement>, ExchangeError> {
        self.client
            .get_glossaries_by_name(
                &self.context.request(),
                name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_glossary_by_guid(
        &self,
        glossary_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<GlossaryElement, ExchangeError> {
        self.client
            .get_glossary_by_guid(&self.context.request(), glossary_guid, effective_time)
            .await
    }

    // ── Categories ───────────────────────────────────────────────────

    pub async fn create_glossary_category(
        &self,
        external_source_is_home: bool,
        glossary_guid: &str,
        properties: &GlossaryCategoryProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_glossary_category", |request| async move {
                self.client
                    .create_glossary_category(
                        &request,
                        external_source_is_home,
                        glossary_guid,
                        properties,
                    )
                    .await
            })
            .await
    }

    pub async fn update_glossary_category(
        &self,
        category_guid: &str,
        is_merge_update: bool,
        properties: &GlossaryCategoryProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_glossary_category", |request| async move {
                self.client
                    .update_glossary_category(
                        &request,
                        category_guid,
                        is_merge_update,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn remove_glossary_category(
        &self,
        category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("remove_glossary_category", |request| async move {
                self.client
                    .remove_glossary_category(&request, category_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn setup_category_parent(
        &self,
        external_source_is_home: bool,
        parent_category_guid: &str,
        child_category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_category_parent", |request| async move {
                self.client
                    .setup_category_parent(
                        &request,
                        external_source_is_home,
                        parent_category_guid,
                        child_category_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_category_parent(
        &self,
        parent_category_guid: &str,
        child_category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_category_parent", |request| async move {
                self.client
                    .clear_category_parent(
                        &request,
                        parent_category_guid,
                        child_category_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn find_glossary_categories(
        &self,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryCategoryElement>, ExchangeError> {
        self.client
            .find_glossary_categories(
                &self.context.request(),
                search_string,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_categories_for_glossary(
        &self,
        glossary_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryCategoryElement>, ExchangeError> {
        self.client
            .get_categories_for_glossary(
                &self.context.request(),
                glossary_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_glossary_category_by_guid(
        &self,
        category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<GlossaryCategoryElement, ExchangeError> {
        self.client
            .get_glossary_category_by_guid(&self.context.request(), category_guid, effective_time)
            .await
    }

    // ── Terms ────────────────────────────────────────────────────────

    pub async fn create_glossary_term(
        &self,
        external_source_is_home: bool,
        glossary_guid: &str,
        properties: &GlossaryTermProperties,
        initial_status: GlossaryTermStatus,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_glossary_term", |request| async move {
                self.client
                    .create_glossary_term(
                        &request,
                        external_source_is_home,
                        glossary_guid,
                        properties,
                        initial_status,
                    )
                    .await
            })
            .await
    }

    pub async fn create_glossary_term_from_template(
        &self,
        external_source_is_home: bool,
        glossary_guid: &str,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_glossary_term_from_template", |request| async move {
                self.client
                    .create_glossary_term_from_template(
                        &request,
                        external_source_is_home,
                        glossary_guid,
                        template_guid,
                        template_properties,
                    )
                    .await
            })
            .await
    }

    pub async fn update_glossary_term(
        &self,
        term_guid: &str,
        is_merge_update: bool,
        properties: &GlossaryTermProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_glossary_term", |request| async move {
                self.client
                    .update_glossary_term(
                        &request,
                        term_guid,
                        is_merge_update,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn update_glossary_term_status(
        &self,
        term_guid: &str,
        status: GlossaryTermStatus,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_glossary_term_status", |request| async move {
                self.client
                    .update_glossary_term_status(&request, term_guid, status, effective_time)
                    .await
            })
            .await
    }

    pub async fn remove_glossary_term(
        &self,
        term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("remove_glossary_term", |request| async move {
                self.client
                    .remove_glossary_term(&request, term_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn setup_term_category(
        &self,
        external_source_is_home: bool,
        category_guid: &str,
        term_guid: &str,
        properties: &GlossaryTermCategorization,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_term_category", |request| async move {
                self.client
                    .setup_term_category(
                        &request,
                        external_source_is_home,
                        category_guid,
                        term_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_term_category(
        &self,
        category_guid: &str,
        term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_term_category", |request| async move {
                self.client
                    .clear_term_category(&request, category_guid, term_guid, effective_time)
                    .await
            })
            .await
    }

    /// `relationship_type_name` is one of the term-to-term relationship types
    /// (Synonym, Antonym, ISARelationship...); it is passed through unchecked.
    pub async fn setup_term_relationship(
        &self,
        external_source_is_home: bool,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        properties: &GlossaryTermRelationship,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_term_relationship", |request| async move {
                self.client
                    .setup_term_relationship(
                        &request,
                        external_source_is_home,
                        relationship_type_name,
                        term1_guid,
                        term2_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn update_term_relationship(
        &self,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        properties: &GlossaryTermRelationship,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_term_relationship", |request| async move {
                self.client
                    .update_term_relationship(
                        &request,
                        relationship_type_name,
                        term1_guid,
                        term2_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_term_relationship(
        &self,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_term_relationship", |request| async move {
                self.client
                    .clear_term_relationship(
                        &request,
                        relationship_type_name,
                        term1_guid,
                        term2_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn find_glossary_terms(
        &self,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError> {
        self.client
            .find_glossary_terms(
                &self.context.request(),
                search_string,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_terms_for_glossary(
        &self,
        glossary_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError> {
        self.client
            .get_terms_for_glossary(
                &self.context.request(),
                glossary_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_terms_for_glossary_category(
        &self,
        category_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError> {
        self.client
            .get_terms_for_glossary_category(
                &self.context.request(),
                category_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_glossary_term_by_guid(
        &self,
        term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<GlossaryTermElement, ExchangeError> {
        self.client
            .get_glossary_term_by_guid(&self.context.request(), term_guid, effective_time)
            .await
    }

    /// With no `relationship_type_name`, every term-to-term relationship is returned.
    pub async fn get_related_terms(
        &self,
        term_guid: &str,
        relationship_type_name: Option<&str>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError> {
        self.client
            .get_related_terms(
                &self.context.request(),
                term_guid,
                relationship_type_name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }
}
