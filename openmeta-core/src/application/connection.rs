// openmeta-core/src/application/connection.rs
//
// Connections, endpoints and connector types.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::exchange::{ExchangeContext, ExchangeService};
use crate::domain::model::TemplateProperties;
use crate::domain::model::connection::{
    AssetConnectionProperties, ConnectionElement, ConnectionProperties, ConnectorTypeElement,
    ConnectorTypeProperties, EmbeddedConnectionProperties, EndpointElement, EndpointProperties,
};
use crate::error::ExchangeError;
use crate::ports::connection::ConnectionExchangeClient;

pub struct ConnectionExchangeService {
    client: Arc<dyn ConnectionExchangeClient>,
    context: ExchangeContext,
}

impl ExchangeService for ConnectionExchangeService {
    fn exchange_context(&self) -> &ExchangeContext {
        &self.context
    }

    fn exchange_context_mut(&mut self) -> &mut ExchangeContext {
        &mut self.context
    }
}

impl ConnectionExchangeService {
    pub fn new(client: Arc<dyn ConnectionExchangeClient>, context: ExchangeContext) -> Self {
        Self { client, context }
    }

    // ── Connections ──────────────────────────────────────────────────

    pub async fn create_connection(
        &self,
        external_source_is_home: bool,
        properties: &ConnectionProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_connection", |request| async move {
                self.client
                    .create_connection(&request, external_source_is_home, properties)
                    .await
            })
            .await
    }

    pub async fn create_connection_from_template(
        &self,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_connection_from_template", |request| async move {
                self.client
                    .create_connection_from_template(
                        &request,
                        external_source_is_home,
                        template_guid,
                        template_properties,
                    )
                    .await
            })
            .await
    }

    pub async fn update_connection(
        &self,
        connection_guid: &str,
        is_merge_update: bool,
        properties: &ConnectionProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_connection", |request| async move {
                self.client
                    .update_connection(
                        &request,
                        connection_guid,
                        is_merge_update,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn remove_connection(
        &self,
        connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("remove_connection", |request| async move {
                self.client
                    .remove_connection(&request, connection_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn setup_connector_type(
        &self,
        external_source_is_home: bool,
        connection_guid: &str,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_connector_type", |request| async move {
                self.client
                    .setup_connector_type(
                        &request,
                        external_source_is_home,
                        connection_guid,
                        connector_type_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_connector_type(
        &self,
        connection_guid: &str,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_connector_type", |request| async move {
                self.client
                    .clear_connector_type(
                        &request,
                        connection_guid,
                        connector_type_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn setup_endpoint(
        &self,
        external_source_is_home: bool,
        connection_guid: &str,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_endpoint", |request| async move {
                self.client
                    .setup_endpoint(
                        &request,
                        external_source_is_home,
                        connection_guid,
                        endpoint_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_endpoint(
        &self,
        connection_guid: &str,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_endpoint", |request| async move {
                self.client
                    .clear_endpoint(&request, connection_guid, endpoint_guid, effective_time)
                    .await
            })
            .await
    }

    /// Links a virtual connection to one of the connections it embeds.
    pub async fn setup_embedded_connection(
        &self,
        external_source_is_home: bool,
        connection_guid: &str,
        embedded_connection_guid: &str,
        properties: &EmbeddedConnectionProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_embedded_connection", |request| async move {
                self.client
                    .setup_embedded_connection(
                        &request,
                        external_source_is_home,
                        connection_guid,
                        embedded_connection_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_embedded_connection(
        &self,
        connection_guid: &str,
        embedded_connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_embedded_connection", |request| async move {
                self.client
                    .clear_embedded_connection(
                        &request,
                        connection_guid,
                        embedded_connection_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn setup_asset_connection(
        &self,
        external_source_is_home: bool,
        asset_guid: &str,
        connection_guid: &str,
        properties: &AssetConnectionProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_asset_connection", |request| async move {
                self.client
                    .setup_asset_connection(
                        &request,
                        external_source_is_home,
                        asset_guid,
                        connection_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_asset_connection(
        &self,
        asset_guid: &str,
        connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_asset_connection", |request| async move {
                self.client
                    .clear_asset_connection(&request, asset_guid, connection_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn find_connections(
        &self,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectionElement>, ExchangeError> {
        self.client
            .find_connections(
                &self.context.request(),
                search_string,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_connections_by_name(
        &self,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectionElement>, ExchangeError> {
        self.client
            .get_connections_by_name(
                &self.context.request(),
                name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_connection_by_guid(
        &self,
        connection_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<ConnectionElement, ExchangeError> {
        self.client
            .get_connection_by_guid(&self.context.request(), connection_guid, effective_time)
            .await
    }

    // ── Endpoints ────────────────────────────────────────────────────

    pub async fn create_endpoint(
        &self,
        external_source_is_home: bool,
        properties: &EndpointProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_endpoint", |request| async move {
                self.client
                    .create_endpoint(&request, external_source_is_home, properties)
                    .await
            })
            .await
    }

    pub async fn create_endpoint_from_template(
        &self,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_endpoint_from_template", |request| async move {
                self.client
                    .create_endpoint_from_template(
                        &request,
                        external_source_is_home,
                        template_guid,
                        template_properties,
                    )
                    .await
            })
            .await
    }

    pub async fn update_endpoint(
        &self,
        endpoint_guid: &str,
        is_merge_update: bool,
        properties: &EndpointProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_endpoint", |request| async move {
                self.client
                    .update_endpoint(
                        &request,
                        endpoint_guid,
                        is_merge_update,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn remove_endpoint(
        &self,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("remove_endpoint", |request| async move {
                self.client
                    .remove_endpoint(&request, endpoint_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn find_endpoints(
        &self,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<EndpointElement>, ExchangeError> {
        self.client
            .find_endpoints(
                &self.context.request(),
                search_string,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_endpoints_by_name(
        &self,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<EndpointElement>, ExchangeError> {
        self.client
            .get_endpoints_by_name(
                &self.context.request(),
                name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_endpoint_by_guid(
        &self,
        endpoint_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<EndpointElement, ExchangeError> {
        self.client
            .get_endpoint_by_guid(&self.context.request(), endpoint_guid, effective_time)
            .await
    }

    // ── Connector types ──────────────────────────────────────────────

    pub async fn create_connector_type(
        &self,
        external_source_is_home: bool,
        properties: &ConnectorTypeProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_connector_type", |request| async move {
                self.client
                    .create_connector_type(&request, external_source_is_home, properties)
                    .await
            })
            .await
    }

    pub async fn create_connector_type_from_template(
        &self,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_connector_type_from_template", |request| async move {
                self.client
                    .create_connector_type_from_template(
                        &request,
                        external_source_is_home,
                        template_guid,
                        template_properties,
                    )
                    .await
            })
            .await
    }

    pub async fn update_connector_type(
        &self,
        connector_type_guid: &str,
        is_merge_update: bool,
        properties: &ConnectorTypeProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_connector_type", |request| async move {
                self.client
                    .update_connector_type(
                        &request,
                        connector_type_guid,
                        is_merge_update,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn remove_connector_type(
        &self,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("remove_connector_type", |request| async move {
                self.client
                    .remove_connector_type(&request, connector_type_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn find_connector_types(
        &self,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectorTypeElement>, ExchangeError> {
        self.client
            .find_connector_types(
                &self.context.request(),
                search_string,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_connector_types_by_name(
        &self,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ConnectorTypeElement>, ExchangeError> {
        self.client
            .get_connector_types_by_name(
                &self.context.request(),
                name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_connector_type_by_guid(
        &self,
        connector_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<ConnectorTypeElement, ExchangeError> {
        self.client
            .get_connector_type_by_guid(&self.context.request(), connector_type_guid, effective_time)
            .await
    }
}
