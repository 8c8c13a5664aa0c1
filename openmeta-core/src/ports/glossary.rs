// openmeta-core/src/ports/glossary.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::context::RequestContext;
use crate::domain::model::glossary::{
    GlossaryCategoryElement, GlossaryCategoryProperties, GlossaryElement, GlossaryProperties,
    GlossaryTermCategorization, GlossaryTermElement, GlossaryTermProperties,
    GlossaryTermRelationship, GlossaryTermStatus,
};
use crate::domain::model::{RelatedElement, TemplateProperties};
use crate::error::ExchangeError;

/// Remote client for glossaries, categories and terms.
#[async_trait]
pub trait GlossaryExchangeClient: Send + Sync {
    // --- Glossaries ---
    async fn create_glossary(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &GlossaryProperties,
    ) -> Result<String, ExchangeError>;

    async fn create_glossary_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError>;

    async fn update_glossary(
        &self,
        request: &RequestContext,
        glossary_guid: &str,
        is_merge_update: bool,
        properties: &GlossaryProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_glossary(
        &self,
        request: &RequestContext,
        glossary_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn find_glossaries(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryElement>, ExchangeError>;

    async fn get_glossaries_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryElement>, ExchangeError>;

    async fn get_glossary_by_guid(
        &self,
        request: &RequestContext,
        glossary_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<GlossaryElement, ExchangeError>;

    // --- Categories ---
    async fn create_glossary_category(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        glossary_guid: &str,
        properties: &GlossaryCategoryProperties,
    ) -> Result<String, ExchangeError>;

    async fn update_glossary_category(
        &self,
        request: &RequestContext,
        category_guid: &str,
        is_merge_update: bool,
        properties: &GlossaryCategoryProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_glossary_category(
        &self,
        request: &RequestContext,
        category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn setup_category_parent(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        parent_category_guid: &str,
        child_category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_category_parent(
        &self,
        request: &RequestContext,
        parent_category_guid: &str,
        child_category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn find_glossary_categories(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryCategoryElement>, ExchangeError>;

    async fn get_categories_for_glossary(
        &self,
        request: &RequestContext,
        glossary_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryCategoryElement>, ExchangeError>;

    async fn get_glossary_category_by_guid(
        &self,
        request: &RequestContext,
        category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<GlossaryCategoryElement, ExchangeError>;

    // --- Terms ---
    async fn create_glossary_term(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        glossary_guid: &str,
        properties: &GlossaryTermProperties,
        initial_status: GlossaryTermStatus,
    ) -> Result<String, ExchangeError>;

    async fn create_glossary_term_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        glossary_guid: &str,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError>;

    async fn update_glossary_term(
        &self,
        request: &RequestContext,
        term_guid: &str,
        is_merge_update: bool,
        properties: &GlossaryTermProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn update_glossary_term_status(
        &self,
        request: &RequestContext,
        term_guid: &str,
        status: GlossaryTermStatus,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_glossary_term(
        &self,
        request: &RequestContext,
        term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn setup_term_category(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        category_guid: &str,
        term_guid: &str,
        properties: &GlossaryTermCategorization,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_term_category(
        &self,
        request: &RequestContext,
        category_guid: &str,
        term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn setup_term_relationship(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        properties: &GlossaryTermRelationship,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn update_term_relationship(
        &self,
        request: &RequestContext,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        properties: &GlossaryTermRelationship,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_term_relationship(
        &self,
        request: &RequestContext,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn find_glossary_terms(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError>;

    async fn get_terms_for_glossary(
        &self,
        request: &RequestContext,
        glossary_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError>;

    async fn get_terms_for_glossary_category(
        &self,
        request: &RequestContext,
        category_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError>;

    async fn get_glossary_term_by_guid(
        &self,
        request: &RequestContext,
        term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<GlossaryTermElement, ExchangeError>;

    async fn get_related_terms(
        &self,
        request: &RequestContext,
        term_guid: &str,
        relationship_type_name: Option<&str>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError>;
}
