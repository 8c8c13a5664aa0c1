// openmeta-core/src/ports/governance.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::context::RequestContext;
use crate::domain::model::Properties;
use crate::domain::model::metadata::{
    ElementStatus, NewMetadataElement, NewRelatedElements, OpenMetadataElement,
    RelatedMetadataElement, RelatedMetadataElements,
};
use crate::error::ExchangeError;

/// Remote client working directly on generic open metadata elements.
#[async_trait]
pub trait OpenMetadataStoreClient: Send + Sync {
    // --- Elements ---
    async fn create_metadata_element_in_store(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element: &NewMetadataElement,
    ) -> Result<String, ExchangeError>;

    async fn update_metadata_element_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        replace_properties: bool,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn update_metadata_element_status_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        new_status: ElementStatus,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn update_metadata_element_effectivity_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_from: Option<DateTime<Utc>>,
        effective_to: Option<DateTime<Utc>>,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn delete_metadata_element_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_metadata_element_by_guid(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<OpenMetadataElement, ExchangeError>;

    async fn get_metadata_element_by_unique_name(
        &self,
        request: &RequestContext,
        unique_name: &str,
        unique_property_name: Option<&str>,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Option<OpenMetadataElement>, ExchangeError>;

    async fn find_metadata_elements_with_string(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<OpenMetadataElement>, ExchangeError>;

    async fn find_metadata_elements_by_type(
        &self,
        request: &RequestContext,
        type_name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<OpenMetadataElement>, ExchangeError>;

    // --- Classifications ---
    async fn classify_metadata_element_in_store(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        classification_name: &str,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn reclassify_metadata_element_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        classification_name: &str,
        replace_properties: bool,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn declassify_metadata_element_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        classification_name: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    // --- Relationships ---
    async fn create_related_elements_in_store(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        relationship: &NewRelatedElements,
    ) -> Result<String, ExchangeError>;

    async fn update_related_elements_in_store(
        &self,
        request: &RequestContext,
        relationship_guid: &str,
        replace_properties: bool,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn delete_related_elements_in_store(
        &self,
        request: &RequestContext,
        relationship_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_related_metadata_elements(
        &self,
        request: &RequestContext,
        element_guid: &str,
        starting_at_end: u8,
        relationship_type_name: Option<&str>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedMetadataElement>, ExchangeError>;

    async fn get_metadata_element_relationships(
        &self,
        request: &RequestContext,
        end1_guid: &str,
        end2_guid: &str,
        relationship_type_name: Option<&str>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedMetadataElements>, ExchangeError>;
}
