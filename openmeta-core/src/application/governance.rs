// openmeta-core/src/application/governance.rs
//
// Generic access to the open metadata store for connectors that need element
// types the dedicated families do not cover.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::exchange::{ExchangeContext, ExchangeService};
use crate::domain::model::Properties;
use crate::domain::model::metadata::{
    ElementStatus, NewMetadataElement, NewRelatedElements, OpenMetadataElement,
    RelatedMetadataElement, RelatedMetadataElements,
};
use crate::error::ExchangeError;
use crate::ports::governance::OpenMetadataStoreClient;

pub struct OpenMetadataGovernanceService {
    client: Arc<dyn OpenMetadataStoreClient>,
    context: ExchangeContext,
}

impl ExchangeService for OpenMetadataGovernanceService {
    fn exchange_context(&self) -> &ExchangeContext {
        &self.context
    }

    fn exchange_context_mut(&mut self) -> &mut ExchangeContext {
        &mut self.context
    }
}

impl OpenMetadataGovernanceService {
    pub fn new(client: Arc<dyn OpenMetadataStoreClient>, context: ExchangeContext) -> Self {
        Self { client, context }
    }

    pub async fn create_metadata_element_in_store(
        &self,
        external_source_is_home: bool,
        element: &NewMetadataElement,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_metadata_element_in_store", |request| async move {
                self.client
                    .create_metadata_element_in_store(&request, external_source_is_home, element)
                    .await
            })
            .await
    }

    /// With `replace_properties` the element's properties become exactly
    /// `properties`; otherwise they are merged in.
    pub async fn update_metadata_element_in_store(
        &self,
        element_guid: &str,
        replace_properties: bool,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_metadata_element_in_store", |request| async move {
                self.client
                    .update_metadata_element_in_store(
                        &request,
                        element_guid,
                        replace_properties,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn update_metadata_element_status_in_store(
        &self,
        element_guid: &str,
        new_status: ElementStatus,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward(
                "update_metadata_element_status_in_store",
                |request| async move {
                    self.client
                        .update_metadata_element_status_in_store(
                            &request,
                            element_guid,
                            new_status,
                            effective_time,
                        )
                        .await
                },
            )
            .await
    }

    pub async fn update_metadata_element_effectivity_in_store(
        &self,
        element_guid: &str,
        effective_from: Option<DateTime<Utc>>,
        effective_to: Option<DateTime<Utc>>,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward(
                "update_metadata_element_effectivity_in_store",
                |request| async move {
                    self.client
                        .update_metadata_element_effectivity_in_store(
                            &request,
                            element_guid,
                            effective_from,
                            effective_to,
                            effective_time,
                        )
                        .await
                },
            )
            .await
    }

    pub async fn delete_metadata_element_in_store(
        &self,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("delete_metadata_element_in_store", |request| async move {
                self.client
                    .delete_metadata_element_in_store(&request, element_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn get_metadata_element_by_guid(
        &self,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<OpenMetadataElement, ExchangeError> {
        self.client
            .get_metadata_element_by_guid(&self.context.request(), element_guid, effective_time)
            .await
    }

    /// Looks the element up by a unique property, `qualifiedName` unless
    /// `unique_property_name` says otherwise.
    pub async fn get_metadata_element_by_unique_name(
        &self,
        unique_name: &str,
        unique_property_name: Option<&str>,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Option<OpenMetadataElement>, ExchangeError> {
        self.client
            .get_metadata_element_by_unique_name(
                &self.context.request(),
                unique_name,
                unique_property_name,
                effective_time,
            )
            .await
    }

    pub async fn find_metadata_elements_with_string(
        &self,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<OpenMetadataElement>, ExchangeError> {
        self.client
            .find_metadata_elements_with_string(
                &self.context.request(),
                search_string,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn find_metadata_elements_by_type(
        &self,
        type_name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<OpenMetadataElement>, ExchangeError> {
        self.client
            .find_metadata_elements_by_type(
                &self.context.request(),
                type_name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn classify_metadata_element_in_store(
        &self,
        external_source_is_home: bool,
        element_guid: &str,
        classification_name: &str,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("classify_metadata_element_in_store", |request| async move {
                self.client
                    .classify_metadata_element_in_store(
                        &request,
                        external_source_is_home,
                        element_guid,
                        classification_name,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn reclassify_metadata_element_in_store(
        &self,
        element_guid: &str,
        classification_name: &str,
        replace_properties: bool,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("reclassify_metadata_element_in_store", |request| async move {
                self.client
                    .reclassify_metadata_element_in_store(
                        &request,
                        element_guid,
                        classification_name,
                        replace_properties,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn declassify_metadata_element_in_store(
        &self,
        element_guid: &str,
        classification_name: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("declassify_metadata_element_in_store", |request| async move {
                self.client
                    .declassify_metadata_element_in_store(
                        &request,
                        element_guid,
                        classification_name,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    /// Returns the guid of the new relationship.
    pub async fn create_related_elements_in_store(
        &self,
        external_source_is_home: bool,
        relationship: &NewRelatedElements,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_related_elements_in_store", |request| async move {
                self.client
                    .create_related_elements_in_store(
                        &request,
                        external_source_is_home,
                        relationship,
                    )
                    .await
            })
            .await
    }

    pub async fn update_related_elements_in_store(
        &self,
        relationship_guid: &str,
        replace_properties: bool,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_related_elements_in_store", |request| async move {
                self.client
                    .update_related_elements_in_store(
                        &request,
                        relationship_guid,
                        replace_properties,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn delete_related_elements_in_store(
        &self,
        relationship_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("delete_related_elements_in_store", |request| async move {
                self.client
                    .delete_related_elements_in_store(&request, relationship_guid, effective_time)
                    .await
            })
            .await
    }

    /// `starting_at_end` is 1 or 2: which end of the relationship `element_guid`
    /// sits at. 0 matches either end.
    pub async fn get_related_metadata_elements(
        &self,
        element_guid: &str,
        starting_at_end: u8,
        relationship_type_name: Option<&str>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedMetadataElement>, ExchangeError> {
        self.client
            .get_related_metadata_elements(
                &self.context.request(),
                element_guid,
                starting_at_end,
                relationship_type_name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_metadata_element_relationships(
        &self,
        end1_guid: &str,
        end2_guid: &str,
        relationship_type_name: Option<&str>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedMetadataElements>, ExchangeError> {
        self.client
            .get_metadata_element_relationships(
                &self.context.request(),
                end1_guid,
                end2_guid,
                relationship_type_name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }
}
