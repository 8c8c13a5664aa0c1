// openmeta-core/src/application/testing.rs
//
// Recording stand-in for every remote client port, shared by the service tests.

#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};

use crate::application::exchange::ExchangeContext;
use crate::domain::context::{ExternalSource, RequestContext};
use crate::domain::model::connection::*;
use crate::domain::model::glossary::*;
use crate::domain::model::infrastructure::*;
use crate::domain::model::lineage::*;
use crate::domain::model::metadata::*;
use crate::domain::model::stewardship::*;
use crate::domain::model::{Properties, RelatedElement, TemplateProperties};
use crate::domain::synchronization::{PermittedSynchronization, SynchronizationGuard};
use crate::error::ExchangeError;
use crate::ports::error::RemoteError;
use crate::ports::{
    ConnectionExchangeClient, GlossaryExchangeClient, InfrastructureExchangeClient,
    LineageExchangeClient, OpenMetadataStoreClient, StewardshipExchangeClient,
};

/// Context used across service tests: connector `csv-monitor` acting as
/// `csv-npa` on behalf of the "CSV Landing Area" source.
pub(crate) fn test_context(policy: PermittedSynchronization) -> ExchangeContext {
    ExchangeContext::new(
        "csv-npa",
        ExternalSource::new("src-guid", "CSV Landing Area"),
        "csv-monitor",
        SynchronizationGuard::new(policy),
    )
}

/// Fixed point in time so effective times show up in recorded arguments.
pub(crate) fn effective_time() -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single()
}

/// Runs a mutating operation against a blocked service and a permitted one.
///
/// The blocked call must fail with a policy violation naming the operation; the
/// permitted call must reach the client under the same name with its arguments
/// untouched. Arguments are evaluated more than once, so pass cheap expressions.
macro_rules! assert_guarded_forward {
    ($blocked:ident, $permitted:ident, $client:ident, $op:ident($($arg:expr),+ $(,)?)) => {{
        match $blocked.$op($($arg),+).await {
            Err($crate::error::ExchangeError::Domain(
                $crate::domain::error::DomainError::PolicyViolation { method_name, .. },
            )) => assert_eq!(method_name, stringify!($op)),
            other => panic!("{} was not blocked: {:?}", stringify!($op), other),
        }
        $permitted.$op($($arg),+).await.unwrap();
        let call = $client.calls().pop().unwrap();
        assert_eq!(call.method, stringify!($op));
        assert_eq!(call.args, format!("{:?}", ($($arg,)+)));
    }};
}
pub(crate) use assert_guarded_forward;

/// Runs a read-only operation and checks it reached the client unchanged.
macro_rules! assert_read_forward {
    ($service:ident, $client:ident, $op:ident($($arg:expr),+ $(,)?)) => {{
        $service.$op($($arg),+).await.unwrap();
        let call = $client.calls().pop().unwrap();
        assert_eq!(call.method, stringify!($op));
        assert_eq!(call.args, format!("{:?}", ($($arg,)+)));
    }};
}
pub(crate) use assert_read_forward;

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub method: String,
    pub request: RequestContext,
    /// Debug rendering of the arguments after the request context.
    pub args: String,
}

/// Implements all six client ports. Creations answer `guid-<method>`, everything
/// else answers the type's default, unless a failure was injected.
#[derive(Default)]
pub(crate) struct RecordingClient {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    failure: Option<RemoteError>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failure: RemoteError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(
        &self,
        method: &str,
        request: &RequestContext,
        args: String,
    ) -> Result<(), ExchangeError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            request: request.clone(),
            args,
        });
        match &self.failure {
            Some(failure) => Err(ExchangeError::Remote(failure.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ConnectionExchangeClient for RecordingClient {
    async fn create_connection(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &ConnectionProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_connection",
            request,
            format!("{:?}", (external_source_is_home, properties)),
        )?;
        Ok("guid-create_connection".to_string())
    }

    async fn create_connection_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_connection_from_template",
            request,
            format!("{:?}", (external_source_is_home, template_guid, template_properties)),
        )?;
        Ok("guid-create_connection_from_template".to_string())
    }

    async fn update_connection(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        is_merge_update: bool,
        properties: &ConnectionProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_connection",
            request,
            format!("{:?}", (connection_guid, is_merge_update, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_connection(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_connection",
            request,
            format!("{:?}", (connection_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_connector_type(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        connection_guid: &str,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_connector_type",
            request,
            format!("{:?}", (external_source_is_home, connection_guid, connector_type_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_connector_type(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_connector_type",
            request,
            format!("{:?}", (connection_guid, connector_type_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_endpoint(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        connection_guid: &str,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_endpoint",
            request,
            format!("{:?}", (external_source_is_home, connection_guid, endpoint_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_endpoint(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_endpoint",
            request,
            format!("{:?}", (connection_guid, endpoint_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_embedded_connection(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        connection_guid: &str,
        embedded_connection_guid: &str,
        properties: &EmbeddedConnectionProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_embedded_connection",
            request,
            format!("{:?}", (external_source_is_home, connection_guid, embedded_connection_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_embedded_connection(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        embedded_connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_embedded_connection",
            request,
            format!("{:?}", (connection_guid, embedded_connection_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_asset_connection(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        asset_guid: &str,
        connection_guid: &str,
        properties: &AssetConnectionProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_asset_connection",
            request,
            format!("{:?}", (external_source_is_home, asset_guid, connection_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_asset_connection(
        &self,
        request: &RequestContext,
        asset_guid: &str,
        connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_asset_connection",
            request,
            format!("{:?}", (asset_guid, connection_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn find_connections(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectionElement>, ExchangeError> {
        self.record(
            "find_connections",
            request,
            format!("{:?}", (search_string, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_connections_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectionElement>, ExchangeError> {
        self.record(
            "get_connections_by_name",
            request,
            format!("{:?}", (name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_connection_by_guid(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<ConnectionElement, ExchangeError> {
        self.record(
            "get_connection_by_guid",
            request,
            format!("{:?}", (connection_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn create_endpoint(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &EndpointProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_endpoint",
            request,
            format!("{:?}", (external_source_is_home, properties)),
        )?;
        Ok("guid-create_endpoint".to_string())
    }

    async fn create_endpoint_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_endpoint_from_template",
            request,
            format!("{:?}", (external_source_is_home, template_guid, template_properties)),
        )?;
        Ok("guid-create_endpoint_from_template".to_string())
    }

    async fn update_endpoint(
        &self,
        request: &RequestContext,
        endpoint_guid: &str,
        is_merge_update: bool,
        properties: &EndpointProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_endpoint",
            request,
            format!("{:?}", (endpoint_guid, is_merge_update, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_endpoint(
        &self,
        request: &RequestContext,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_endpoint",
            request,
            format!("{:?}", (endpoint_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn find_endpoints(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<EndpointElement>, ExchangeError> {
        self.record(
            "find_endpoints",
            request,
            format!("{:?}", (search_string, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_endpoints_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<EndpointElement>, ExchangeError> {
        self.record(
            "get_endpoints_by_name",
            request,
            format!("{:?}", (name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_endpoint_by_guid(
        &self,
        request: &RequestContext,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<EndpointElement, ExchangeError> {
        self.record(
            "get_endpoint_by_guid",
            request,
            format!("{:?}", (endpoint_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn create_connector_type(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &ConnectorTypeProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_connector_type",
            request,
            format!("{:?}", (external_source_is_home, properties)),
        )?;
        Ok("guid-create_connector_type".to_string())
    }

    async fn create_connector_type_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_connector_type_from_template",
            request,
            format!("{:?}", (external_source_is_home, template_guid, template_properties)),
        )?;
        Ok("guid-create_connector_type_from_template".to_string())
    }

    async fn update_connector_type(
        &self,
        request: &RequestContext,
        connector_type_guid: &str,
        is_merge_update: bool,
        properties: &ConnectorTypeProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_connector_type",
            request,
            format!("{:?}", (connector_type_guid, is_merge_update, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_connector_type(
        &self,
        request: &RequestContext,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_connector_type",
            request,
            format!("{:?}", (connector_type_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn find_connector_types(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectorTypeElement>, ExchangeError> {
        self.record(
            "find_connector_types",
            request,
            format!("{:?}", (search_string, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_connector_types_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectorTypeElement>, ExchangeError> {
        self.record(
            "get_connector_types_by_name",
            request,
            format!("{:?}", (name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_connector_type_by_guid(
        &self,
        request: &RequestContext,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<ConnectorTypeElement, ExchangeError> {
        self.record(
            "get_connector_type_by_guid",
            request,
            format!("{:?}", (connector_type_guid, effective_time)),
        )?;
        Ok(Default::default())
    }
}

#[async_trait]
impl GlossaryExchangeClient for RecordingClient {
    async fn create_glossary(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &GlossaryProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_glossary",
            request,
            format!("{:?}", (external_source_is_home, properties)),
        )?;
        Ok("guid-create_glossary".to_string())
    }

    async fn create_glossary_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_glossary_from_template",
            request,
            format!("{:?}", (external_source_is_home, template_guid, template_properties)),
        )?;
        Ok("guid-create_glossary_from_template".to_string())
    }

    async fn update_glossary(
        &self,
        request: &RequestContext,
        glossary_guid: &str,
        is_merge_update: bool,
        properties: &GlossaryProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_glossary",
            request,
            format!("{:?}", (glossary_guid, is_merge_update, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_glossary(
        &self,
        request: &RequestContext,
        glossary_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_glossary",
            request,
            format!("{:?}", (glossary_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn find_glossaries(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryElement>, ExchangeError> {
        self.record(
            "find_glossaries",
            request,
            format!("{:?}", (search_string, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_glossaries_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryElement>, ExchangeError> {
        self.record(
            "get_glossaries_by_name",
            request,
            format!("{:?}", (name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_glossary_by_guid(
        &self,
        request: &RequestContext,
        glossary_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<GlossaryElement, ExchangeError> {
        self.record(
            "get_glossary_by_guid",
            request,
            format!("{:?}", (glossary_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn create_glossary_category(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        glossary_guid: &str,
        properties: &GlossaryCategoryProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_glossary_category",
            request,
            format!("{:?}", (external_source_is_home, glossary_guid, properties)),
        )?;
        Ok("guid-create_glossary_category".to_string())
    }

    async fn update_glossary_category(
        &self,
        request: &RequestContext,
        category_guid: &str,
        is_merge_update: bool,
        properties: &GlossaryCategoryProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_glossary_category",
            request,
            format!("{:?}", (category_guid, is_merge_update, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_glossary_category(
        &self,
        request: &RequestContext,
        category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_glossary_category",
            request,
            format!("{:?}", (category_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_category_parent(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        parent_category_guid: &str,
        child_category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_category_parent",
            request,
            format!("{:?}", (external_source_is_home, parent_category_guid, child_category_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_category_parent(
        &self,
        request: &RequestContext,
        parent_category_guid: &str,
        child_category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_category_parent",
            request,
            format!("{:?}", (parent_category_guid, child_category_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn find_glossary_categories(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryCategoryElement>, ExchangeError> {
        self.record(
            "find_glossary_categories",
            request,
            format!("{:?}", (search_string, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_categories_for_glossary(
        &self,
        request: &RequestContext,
        glossary_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryCategoryElement>, ExchangeError> {
        self.record(
            "get_categories_for_glossary",
            request,
            format!("{:?}", (glossary_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_glossary_category_by_guid(
        &self,
        request: &RequestContext,
        category_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<GlossaryCategoryElement, ExchangeError> {
        self.record(
            "get_glossary_category_by_guid",
            request,
            format!("{:?}", (category_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn create_glossary_term(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        glossary_guid: &str,
        properties: &GlossaryTermProperties,
        initial_status: GlossaryTermStatus,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_glossary_term",
            request,
            format!("{:?}", (external_source_is_home, glossary_guid, properties, initial_status)),
        )?;
        Ok("guid-create_glossary_term".to_string())
    }

    async fn create_glossary_term_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        glossary_guid: &str,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_glossary_term_from_template",
            request,
            format!("{:?}", (external_source_is_home, glossary_guid, template_guid, template_properties)),
        )?;
        Ok("guid-create_glossary_term_from_template".to_string())
    }

    async fn update_glossary_term(
        &self,
        request: &RequestContext,
        term_guid: &str,
        is_merge_update: bool,
        properties: &GlossaryTermProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_glossary_term",
            request,
            format!("{:?}", (term_guid, is_merge_update, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn update_glossary_term_status(
        &self,
        request: &RequestContext,
        term_guid: &str,
        status: GlossaryTermStatus,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_glossary_term_status",
            request,
            format!("{:?}", (term_guid, status, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_glossary_term(
        &self,
        request: &RequestContext,
        term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_glossary_term",
            request,
            format!("{:?}", (term_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_term_category(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        category_guid: &str,
        term_guid: &str,
        properties: &GlossaryTermCategorization,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_term_category",
            request,
            format!("{:?}", (external_source_is_home, category_guid, term_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_term_category(
        &self,
        request: &RequestContext,
        category_guid: &str,
        term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_term_category",
            request,
            format!("{:?}", (category_guid, term_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_term_relationship(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        properties: &GlossaryTermRelationship,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_term_relationship",
            request,
            format!("{:?}", (external_source_is_home, relationship_type_name, term1_guid, term2_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn update_term_relationship(
        &self,
        request: &RequestContext,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        properties: &GlossaryTermRelationship,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_term_relationship",
            request,
            format!("{:?}", (relationship_type_name, term1_guid, term2_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_term_relationship(
        &self,
        request: &RequestContext,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_term_relationship",
            request,
            format!("{:?}", (relationship_type_name, term1_guid, term2_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn find_glossary_terms(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError> {
        self.record(
            "find_glossary_terms",
            request,
            format!("{:?}", (search_string, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_terms_for_glossary(
        &self,
        request: &RequestContext,
        glossary_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError> {
        self.record(
            "get_terms_for_glossary",
            request,
            format!("{:?}", (glossary_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_terms_for_glossary_category(
        &self,
        request: &RequestContext,
        category_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError> {
        self.record(
            "get_terms_for_glossary_category",
            request,
            format!("{:?}", (category_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_glossary_term_by_guid(
        &self,
        request: &RequestContext,
        term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<GlossaryTermElement, ExchangeError> {
        self.record(
            "get_glossary_term_by_guid",
            request,
            format!("{:?}", (term_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_related_terms(
        &self,
        request: &RequestContext,
        term_guid: &str,
        relationship_type_name: Option<&str>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError> {
        self.record(
            "get_related_terms",
            request,
            format!("{:?}", (term_guid, relationship_type_name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }
}

#[async_trait]
impl LineageExchangeClient for RecordingClient {
    async fn create_process(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &ProcessProperties,
        initial_status: ProcessStatus,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_process",
            request,
            format!("{:?}", (external_source_is_home, properties, initial_status)),
        )?;
        Ok("guid-create_process".to_string())
    }

    async fn create_process_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_process_from_template",
            request,
            format!("{:?}", (external_source_is_home, template_guid, template_properties)),
        )?;
        Ok("guid-create_process_from_template".to_string())
    }

    async fn update_process(
        &self,
        request: &RequestContext,
        process_guid: &str,
        is_merge_update: bool,
        properties: &ProcessProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_process",
            request,
            format!("{:?}", (process_guid, is_merge_update, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn update_process_status(
        &self,
        request: &RequestContext,
        process_guid: &str,
        status: ProcessStatus,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_process_status",
            request,
            format!("{:?}", (process_guid, status, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_process(
        &self,
        request: &RequestContext,
        process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_process",
            request,
            format!("{:?}", (process_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_process_parent(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        parent_process_guid: &str,
        child_process_guid: &str,
        containment_type: ProcessContainmentType,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_process_parent",
            request,
            format!("{:?}", (external_source_is_home, parent_process_guid, child_process_guid, containment_type, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_process_parent(
        &self,
        request: &RequestContext,
        parent_process_guid: &str,
        child_process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_process_parent",
            request,
            format!("{:?}", (parent_process_guid, child_process_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn find_processes(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProcessElement>, ExchangeError> {
        self.record(
            "find_processes",
            request,
            format!("{:?}", (search_string, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_processes_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProcessElement>, ExchangeError> {
        self.record(
            "get_processes_by_name",
            request,
            format!("{:?}", (name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_process_by_guid(
        &self,
        request: &RequestContext,
        process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<ProcessElement, ExchangeError> {
        self.record(
            "get_process_by_guid",
            request,
            format!("{:?}", (process_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_process_parent(
        &self,
        request: &RequestContext,
        process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Option<ProcessElement>, ExchangeError> {
        self.record(
            "get_process_parent",
            request,
            format!("{:?}", (process_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_sub_processes(
        &self,
        request: &RequestContext,
        process_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProcessElement>, ExchangeError> {
        self.record(
            "get_sub_processes",
            request,
            format!("{:?}", (process_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn create_port(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &PortProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_port",
            request,
            format!("{:?}", (external_source_is_home, properties)),
        )?;
        Ok("guid-create_port".to_string())
    }

    async fn update_port(
        &self,
        request: &RequestContext,
        port_guid: &str,
        is_merge_update: bool,
        properties: &PortProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_port",
            request,
            format!("{:?}", (port_guid, is_merge_update, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_port(
        &self,
        request: &RequestContext,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_port",
            request,
            format!("{:?}", (port_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_process_port(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        process_guid: &str,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_process_port",
            request,
            format!("{:?}", (external_source_is_home, process_guid, port_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_process_port(
        &self,
        request: &RequestContext,
        process_guid: &str,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_process_port",
            request,
            format!("{:?}", (process_guid, port_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_port_delegation(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        port_guid: &str,
        delegated_port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_port_delegation",
            request,
            format!("{:?}", (external_source_is_home, port_guid, delegated_port_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_port_delegation(
        &self,
        request: &RequestContext,
        port_guid: &str,
        delegated_port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_port_delegation",
            request,
            format!("{:?}", (port_guid, delegated_port_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_port_schema_type(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        port_guid: &str,
        schema_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_port_schema_type",
            request,
            format!("{:?}", (external_source_is_home, port_guid, schema_type_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_port_schema_type(
        &self,
        request: &RequestContext,
        port_guid: &str,
        schema_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_port_schema_type",
            request,
            format!("{:?}", (port_guid, schema_type_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_ports_for_process(
        &self,
        request: &RequestContext,
        process_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<PortElement>, ExchangeError> {
        self.record(
            "get_ports_for_process",
            request,
            format!("{:?}", (process_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_port_by_guid(
        &self,
        request: &RequestContext,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<PortElement, ExchangeError> {
        self.record(
            "get_port_by_guid",
            request,
            format!("{:?}", (port_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_data_flow(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        data_supplier_guid: &str,
        data_consumer_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError> {
        self.record(
            "setup_data_flow",
            request,
            format!("{:?}", (external_source_is_home, data_supplier_guid, data_consumer_guid, properties, effective_time)),
        )?;
        Ok("guid-setup_data_flow".to_string())
    }

    async fn update_data_flow(
        &self,
        request: &RequestContext,
        data_flow_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_data_flow",
            request,
            format!("{:?}", (data_flow_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_data_flow(
        &self,
        request: &RequestContext,
        data_flow_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_data_flow",
            request,
            format!("{:?}", (data_flow_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_data_flows(
        &self,
        request: &RequestContext,
        data_supplier_guid: &str,
        data_consumer_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError> {
        self.record(
            "get_data_flows",
            request,
            format!("{:?}", (data_supplier_guid, data_consumer_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_control_flow(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        current_step_guid: &str,
        next_step_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError> {
        self.record(
            "setup_control_flow",
            request,
            format!("{:?}", (external_source_is_home, current_step_guid, next_step_guid, properties, effective_time)),
        )?;
        Ok("guid-setup_control_flow".to_string())
    }

    async fn clear_control_flow(
        &self,
        request: &RequestContext,
        control_flow_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_control_flow",
            request,
            format!("{:?}", (control_flow_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_control_flows(
        &self,
        request: &RequestContext,
        current_step_guid: &str,
        next_step_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError> {
        self.record(
            "get_control_flows",
            request,
            format!("{:?}", (current_step_guid, next_step_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_lineage_mapping(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        source_element_guid: &str,
        destination_element_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError> {
        self.record(
            "setup_lineage_mapping",
            request,
            format!("{:?}", (external_source_is_home, source_element_guid, destination_element_guid, properties, effective_time)),
        )?;
        Ok("guid-setup_lineage_mapping".to_string())
    }

    async fn clear_lineage_mapping(
        &self,
        request: &RequestContext,
        lineage_mapping_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_lineage_mapping",
            request,
            format!("{:?}", (lineage_mapping_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_destination_lineage_mappings(
        &self,
        request: &RequestContext,
        source_element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError> {
        self.record(
            "get_destination_lineage_mappings",
            request,
            format!("{:?}", (source_element_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_source_lineage_mappings(
        &self,
        request: &RequestContext,
        destination_element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError> {
        self.record(
            "get_source_lineage_mappings",
            request,
            format!("{:?}", (destination_element_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }
}

#[async_trait]
impl StewardshipExchangeClient for RecordingClient {
    async fn set_confidence_classification(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &GovernanceClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "set_confidence_classification",
            request,
            format!("{:?}", (external_source_is_home, element_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_confidence_classification(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_confidence_classification",
            request,
            format!("{:?}", (element_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn set_criticality_classification(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &GovernanceClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "set_criticality_classification",
            request,
            format!("{:?}", (external_source_is_home, element_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_criticality_classification(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_criticality_classification",
            request,
            format!("{:?}", (element_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn set_confidentiality_classification(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &GovernanceClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "set_confidentiality_classification",
            request,
            format!("{:?}", (external_source_is_home, element_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_confidentiality_classification(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_confidentiality_classification",
            request,
            format!("{:?}", (element_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn set_retention_classification(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &RetentionClassificationProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "set_retention_classification",
            request,
            format!("{:?}", (external_source_is_home, element_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_retention_classification(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_retention_classification",
            request,
            format!("{:?}", (element_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_confidence_classified_elements(
        &self,
        request: &RequestContext,
        return_specific_level: bool,
        level_identifier: i32,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError> {
        self.record(
            "get_confidence_classified_elements",
            request,
            format!("{:?}", (return_specific_level, level_identifier, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_elements_by_classification(
        &self,
        request: &RequestContext,
        classification_name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError> {
        self.record(
            "get_elements_by_classification",
            request,
            format!("{:?}", (classification_name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn add_security_tags(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &SecurityTagsProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "add_security_tags",
            request,
            format!("{:?}", (external_source_is_home, element_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_security_tags(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_security_tags",
            request,
            format!("{:?}", (element_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn add_ownership(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        properties: &OwnershipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "add_ownership",
            request,
            format!("{:?}", (external_source_is_home, element_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_ownership(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_ownership",
            request,
            format!("{:?}", (element_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_owners_elements(
        &self,
        request: &RequestContext,
        owner: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError> {
        self.record(
            "get_owners_elements",
            request,
            format!("{:?}", (owner, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn add_element_to_subject_area(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        subject_area_name: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "add_element_to_subject_area",
            request,
            format!("{:?}", (external_source_is_home, element_guid, subject_area_name, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_element_from_subject_area(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_element_from_subject_area",
            request,
            format!("{:?}", (element_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_members_of_subject_area(
        &self,
        request: &RequestContext,
        subject_area_name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClassifiedElement>, ExchangeError> {
        self.record(
            "get_members_of_subject_area",
            request,
            format!("{:?}", (subject_area_name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_semantic_assignment(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        glossary_term_guid: &str,
        properties: &SemanticAssignmentProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_semantic_assignment",
            request,
            format!("{:?}", (external_source_is_home, element_guid, glossary_term_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_semantic_assignment(
        &self,
        request: &RequestContext,
        element_guid: &str,
        glossary_term_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_semantic_assignment",
            request,
            format!("{:?}", (element_guid, glossary_term_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_meanings(
        &self,
        request: &RequestContext,
        element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GlossaryTermElement>, ExchangeError> {
        self.record(
            "get_meanings",
            request,
            format!("{:?}", (element_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_semantic_assignees(
        &self,
        request: &RequestContext,
        glossary_term_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError> {
        self.record(
            "get_semantic_assignees",
            request,
            format!("{:?}", (glossary_term_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn add_governance_definition_to_element(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        definition_guid: &str,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "add_governance_definition_to_element",
            request,
            format!("{:?}", (external_source_is_home, definition_guid, element_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_governance_definition_from_element(
        &self,
        request: &RequestContext,
        definition_guid: &str,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_governance_definition_from_element",
            request,
            format!("{:?}", (definition_guid, element_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_governed_elements(
        &self,
        request: &RequestContext,
        definition_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError> {
        self.record(
            "get_governed_elements",
            request,
            format!("{:?}", (definition_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_governed_by_definitions(
        &self,
        request: &RequestContext,
        element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<GovernanceDefinitionElement>, ExchangeError> {
        self.record(
            "get_governed_by_definitions",
            request,
            format!("{:?}", (element_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn link_elements_as_peer_duplicates(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element1_guid: &str,
        element2_guid: &str,
        properties: &GovernanceClassificationProperties,
        set_known_duplicate: bool,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "link_elements_as_peer_duplicates",
            request,
            format!("{:?}", (external_source_is_home, element1_guid, element2_guid, properties, set_known_duplicate, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn unlink_elements_as_peer_duplicates(
        &self,
        request: &RequestContext,
        element1_guid: &str,
        element2_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "unlink_elements_as_peer_duplicates",
            request,
            format!("{:?}", (element1_guid, element2_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_peer_duplicates(
        &self,
        request: &RequestContext,
        element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError> {
        self.record(
            "get_peer_duplicates",
            request,
            format!("{:?}", (element_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }
}

#[async_trait]
impl InfrastructureExchangeClient for RecordingClient {
    async fn create_infrastructure(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &InfrastructureProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_infrastructure",
            request,
            format!("{:?}", (external_source_is_home, properties)),
        )?;
        Ok("guid-create_infrastructure".to_string())
    }

    async fn create_infrastructure_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_infrastructure_from_template",
            request,
            format!("{:?}", (external_source_is_home, template_guid, template_properties)),
        )?;
        Ok("guid-create_infrastructure_from_template".to_string())
    }

    async fn update_infrastructure(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        is_merge_update: bool,
        properties: &InfrastructureProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_infrastructure",
            request,
            format!("{:?}", (infrastructure_guid, is_merge_update, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn publish_infrastructure(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "publish_infrastructure",
            request,
            format!("{:?}", (infrastructure_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn withdraw_infrastructure(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "withdraw_infrastructure",
            request,
            format!("{:?}", (infrastructure_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_infrastructure(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_infrastructure",
            request,
            format!("{:?}", (infrastructure_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn find_infrastructure(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<InfrastructureElement>, ExchangeError> {
        self.record(
            "find_infrastructure",
            request,
            format!("{:?}", (search_string, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_infrastructure_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<InfrastructureElement>, ExchangeError> {
        self.record(
            "get_infrastructure_by_name",
            request,
            format!("{:?}", (name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_infrastructure_by_guid(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<InfrastructureElement, ExchangeError> {
        self.record(
            "get_infrastructure_by_guid",
            request,
            format!("{:?}", (infrastructure_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn create_software_capability(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        infrastructure_guid: Option<&str>,
        properties: &SoftwareCapabilityProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_software_capability",
            request,
            format!("{:?}", (external_source_is_home, infrastructure_guid, properties)),
        )?;
        Ok("guid-create_software_capability".to_string())
    }

    async fn create_software_capability_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_software_capability_from_template",
            request,
            format!("{:?}", (external_source_is_home, template_guid, template_properties)),
        )?;
        Ok("guid-create_software_capability_from_template".to_string())
    }

    async fn update_software_capability(
        &self,
        request: &RequestContext,
        capability_guid: &str,
        is_merge_update: bool,
        properties: &SoftwareCapabilityProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_software_capability",
            request,
            format!("{:?}", (capability_guid, is_merge_update, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn remove_software_capability(
        &self,
        request: &RequestContext,
        capability_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "remove_software_capability",
            request,
            format!("{:?}", (capability_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn deploy_capability(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        capability_guid: &str,
        infrastructure_guid: &str,
        properties: &CapabilityDeploymentProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "deploy_capability",
            request,
            format!("{:?}", (external_source_is_home, capability_guid, infrastructure_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn undeploy_capability(
        &self,
        request: &RequestContext,
        capability_guid: &str,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "undeploy_capability",
            request,
            format!("{:?}", (capability_guid, infrastructure_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn find_software_capabilities(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<SoftwareCapabilityElement>, ExchangeError> {
        self.record(
            "find_software_capabilities",
            request,
            format!("{:?}", (search_string, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_software_capabilities_for_element(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<SoftwareCapabilityElement>, ExchangeError> {
        self.record(
            "get_software_capabilities_for_element",
            request,
            format!("{:?}", (infrastructure_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_software_capability_by_guid(
        &self,
        request: &RequestContext,
        capability_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<SoftwareCapabilityElement, ExchangeError> {
        self.record(
            "get_software_capability_by_guid",
            request,
            format!("{:?}", (capability_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_server_asset_use(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        capability_guid: &str,
        asset_guid: &str,
        properties: &ServerAssetUseProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError> {
        self.record(
            "setup_server_asset_use",
            request,
            format!("{:?}", (external_source_is_home, capability_guid, asset_guid, properties, effective_time)),
        )?;
        Ok("guid-setup_server_asset_use".to_string())
    }

    async fn update_server_asset_use(
        &self,
        request: &RequestContext,
        server_asset_use_guid: &str,
        is_merge_update: bool,
        properties: &ServerAssetUseProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_server_asset_use",
            request,
            format!("{:?}", (server_asset_use_guid, is_merge_update, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_server_asset_use(
        &self,
        request: &RequestContext,
        server_asset_use_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_server_asset_use",
            request,
            format!("{:?}", (server_asset_use_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_server_asset_uses_for_capability(
        &self,
        request: &RequestContext,
        capability_guid: &str,
        use_type: Option<ServerAssetUseType>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError> {
        self.record(
            "get_server_asset_uses_for_capability",
            request,
            format!("{:?}", (capability_guid, use_type, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn setup_deployed_on(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        host_guid: &str,
        properties: &CapabilityDeploymentProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "setup_deployed_on",
            request,
            format!("{:?}", (external_source_is_home, element_guid, host_guid, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn clear_deployed_on(
        &self,
        request: &RequestContext,
        element_guid: &str,
        host_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "clear_deployed_on",
            request,
            format!("{:?}", (element_guid, host_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_deployed_elements(
        &self,
        request: &RequestContext,
        host_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<InfrastructureElement>, ExchangeError> {
        self.record(
            "get_deployed_elements",
            request,
            format!("{:?}", (host_guid, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }
}

#[async_trait]
impl OpenMetadataStoreClient for RecordingClient {
    async fn create_metadata_element_in_store(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element: &NewMetadataElement,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_metadata_element_in_store",
            request,
            format!("{:?}", (external_source_is_home, element)),
        )?;
        Ok("guid-create_metadata_element_in_store".to_string())
    }

    async fn update_metadata_element_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        replace_properties: bool,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_metadata_element_in_store",
            request,
            format!("{:?}", (element_guid, replace_properties, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn update_metadata_element_status_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        new_status: ElementStatus,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_metadata_element_status_in_store",
            request,
            format!("{:?}", (element_guid, new_status, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn update_metadata_element_effectivity_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_from: Option<DateTime<Utc>>,
        effective_to: Option<DateTime<Utc>>,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_metadata_element_effectivity_in_store",
            request,
            format!("{:?}", (element_guid, effective_from, effective_to, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn delete_metadata_element_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "delete_metadata_element_in_store",
            request,
            format!("{:?}", (element_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_metadata_element_by_guid(
        &self,
        request: &RequestContext,
        element_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<OpenMetadataElement, ExchangeError> {
        self.record(
            "get_metadata_element_by_guid",
            request,
            format!("{:?}", (element_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_metadata_element_by_unique_name(
        &self,
        request: &RequestContext,
        unique_name: &str,
        unique_property_name: Option<&str>,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Option<OpenMetadataElement>, ExchangeError> {
        self.record(
            "get_metadata_element_by_unique_name",
            request,
            format!("{:?}", (unique_name, unique_property_name, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn find_metadata_elements_with_string(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<OpenMetadataElement>, ExchangeError> {
        self.record(
            "find_metadata_elements_with_string",
            request,
            format!("{:?}", (search_string, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn find_metadata_elements_by_type(
        &self,
        request: &RequestContext,
        type_name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<OpenMetadataElement>, ExchangeError> {
        self.record(
            "find_metadata_elements_by_type",
            request,
            format!("{:?}", (type_name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn classify_metadata_element_in_store(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        classification_name: &str,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "classify_metadata_element_in_store",
            request,
            format!("{:?}", (external_source_is_home, element_guid, classification_name, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn reclassify_metadata_element_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        classification_name: &str,
        replace_properties: bool,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "reclassify_metadata_element_in_store",
            request,
            format!("{:?}", (element_guid, classification_name, replace_properties, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn declassify_metadata_element_in_store(
        &self,
        request: &RequestContext,
        element_guid: &str,
        classification_name: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "declassify_metadata_element_in_store",
            request,
            format!("{:?}", (element_guid, classification_name, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn create_related_elements_in_store(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        relationship: &NewRelatedElements,
    ) -> Result<String, ExchangeError> {
        self.record(
            "create_related_elements_in_store",
            request,
            format!("{:?}", (external_source_is_home, relationship)),
        )?;
        Ok("guid-create_related_elements_in_store".to_string())
    }

    async fn update_related_elements_in_store(
        &self,
        request: &RequestContext,
        relationship_guid: &str,
        replace_properties: bool,
        properties: &Properties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "update_related_elements_in_store",
            request,
            format!("{:?}", (relationship_guid, replace_properties, properties, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn delete_related_elements_in_store(
        &self,
        request: &RequestContext,
        relationship_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.record(
            "delete_related_elements_in_store",
            request,
            format!("{:?}", (relationship_guid, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_related_metadata_elements(
        &self,
        request: &RequestContext,
        element_guid: &str,
        starting_at_end: u8,
        relationship_type_name: Option<&str>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedMetadataElement>, ExchangeError> {
        self.record(
            "get_related_metadata_elements",
            request,
            format!("{:?}", (element_guid, starting_at_end, relationship_type_name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }

    async fn get_metadata_element_relationships(
        &self,
        request: &RequestContext,
        end1_guid: &str,
        end2_guid: &str,
        relationship_type_name: Option<&str>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedMetadataElements>, ExchangeError> {
        self.record(
            "get_metadata_element_relationships",
            request,
            format!("{:?}", (end1_guid, end2_guid, relationship_type_name, start_from, page_size, effective_time)),
        )?;
        Ok(Default::default())
    }
}

