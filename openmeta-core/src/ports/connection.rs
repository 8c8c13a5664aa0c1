// openmeta-core/src/ports/connection.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::context::RequestContext;
use crate::domain::model::TemplateProperties;
use crate::domain::model::connection::{
    AssetConnectionProperties, ConnectionElement, ConnectionProperties, ConnectorTypeElement,
    ConnectorTypeProperties, EmbeddedConnectionProperties, EndpointElement, EndpointProperties,
};
use crate::error::ExchangeError;

/// Remote client for connections, endpoints and connector types.
#[async_trait]
pub trait ConnectionExchangeClient: Send + Sync {
    // --- Connections ---
    async fn create_connection(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &ConnectionProperties,
    ) -> Result<String, ExchangeError>;

    async fn create_connection_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError>;

    async fn update_connection(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        is_merge_update: bool,
        properties: &ConnectionProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_connection(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn setup_connector_type(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        connection_guid: &str,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_connector_type(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn setup_endpoint(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        connection_guid: &str,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_endpoint(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn setup_embedded_connection(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        connection_guid: &str,
        embedded_connection_guid: &str,
        properties: &EmbeddedConnectionProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_embedded_connection(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        embedded_connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn setup_asset_connection(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        asset_guid: &str,
        connection_guid: &str,
        properties: &AssetConnectionProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_asset_connection(
        &self,
        request: &RequestContext,
        asset_guid: &str,
        connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn find_connections(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectionElement>, ExchangeError>;

    async fn get_connections_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectionElement>, ExchangeError>;

    async fn get_connection_by_guid(
        &self,
        request: &RequestContext,
        connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<ConnectionElement, ExchangeError>;

    // --- Endpoints ---
    async fn create_endpoint(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &EndpointProperties,
    ) -> Result<String, ExchangeError>;

    async fn create_endpoint_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError>;

    async fn update_endpoint(
        &self,
        request: &RequestContext,
        endpoint_guid: &str,
        is_merge_update: bool,
        properties: &EndpointProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_endpoint(
        &self,
        request: &RequestContext,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn find_endpoints(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<EndpointElement>, ExchangeError>;

    async fn get_endpoints_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<EndpointElement>, ExchangeError>;

    async fn get_endpoint_by_guid(
        &self,
        request: &RequestContext,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<EndpointElement, ExchangeError>;

    // --- Connector types ---
    async fn create_connector_type(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &ConnectorTypeProperties,
    ) -> Result<String, ExchangeError>;

    async fn create_connector_type_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError>;

    async fn update_connector_type(
        &self,
        request: &RequestContext,
        connector_type_guid: &str,
        is_merge_update: bool,
        properties: &ConnectorTypeProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_connector_type(
        &self,
        request: &RequestContext,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn find_connector_types(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectorTypeElement>, ExchangeError>;

    async fn get_connector_types_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectorTypeElement>, ExchangeError>;

    async fn get_connector_type_by_guid(
        &self,
        request: &RequestContext,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<ConnectorTypeElement, ExchangeError>;
}
