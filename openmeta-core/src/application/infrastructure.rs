// openmeta-core/src/application/infrastructure.rs
//
// Hosts, software platforms and servers, the capabilities deployed on them and
// the assets those capabilities use.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::exchange::{ExchangeContext, ExchangeService};
use crate::domain::model::infrastructure::{
    CapabilityDeploymentProperties, InfrastructureElement, InfrastructureProperties,
    ServerAssetUseProperties, ServerAssetUseType, SoftwareCapabilityElement,
    SoftwareCapabilityProperties,
};
use crate::domain::model::{RelatedElement, TemplateProperties};
use crate::error::ExchangeError;
use crate::ports::infrastructure::InfrastructureExchangeClient;

pub struct InfrastructureExchangeService {
    client: Arc<dyn InfrastructureExchangeClient>,
    context: ExchangeContext,
}

impl ExchangeService for InfrastructureExchangeService {
    fn exchange_context(&self) -> &ExchangeContext {
        &self.context
    }

    fn exchange_context_mut(&mut self) -> &mut ExchangeContext {
        &mut self.context
    }
}

impl InfrastructureExchangeService {
    pub fn new(client: Arc<dyn InfrastructureExchangeClient>, context: ExchangeContext) -> Self {
        Self { client, context }
    }

    // ── Infrastructure elements ──────────────────────────────────────

    pub async fn create_infrastructure(
        &self,
        external_source_is_home: bool,
        properties: &InfrastructureProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_infrastructure", |request| async move {
                self.client
                    .create_infrastructure(&request, external_source_is_home, properties)
                    .await
            })
            .await
    }

    pub async fn create_infrastructure_from_template(
        &self,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_infrastructure_from_template", |request| async move {
                self.client
                    .create_infrastructure_from_template(
                        &request,
                        external_source_is_home,
                        template_guid,
                        template_properties,
                    )
                    .await
            })
            .await
    }

    pub async fn update_infrastructure(
        &self,
        infrastructure_guid: &str,
        is_merge_update: bool,
        properties: &InfrastructureProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_infrastructure", |request| async move {
                self.client
                    .update_infrastructure(
                        &request,
                        infrastructure_guid,
                        is_merge_update,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    /// Makes the element visible to consumers outside the publishing cohort.
    pub async fn publish_infrastructure(
        &self,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("publish_infrastructure", |request| async move {
                self.client
                    .publish_infrastructure(&request, infrastructure_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn withdraw_infrastructure(
        &self,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("withdraw_infrastructure", |request| async move {
                self.client
                    .withdraw_infrastructure(&request, infrastructure_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn remove_infrastructure(
        &self,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("remove_infrastructure", |request| async move {
                self.client
                    .remove_infrastructure(&request, infrastructure_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn find_infrastructure(
        &self,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<InfrastructureElement>, ExchangeError> {
        self.client
            .find_infrastructure(
                &self.context.request(),
                search_string,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_infrastructure_by_name(
        &self,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<InfrastructureElement>, ExchangeError> {
        self.client
            .get_infrastructure_by_name(
                &self.context.request(),
                name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_infrastructure_by_guid(
        &self,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<InfrastructureElement, ExchangeError> {
        self.client
            .get_infrastructure_by_guid(&self.context.request(), infrastructure_guid, effective_time)
            .await
    }

    // ── Software capabilities ────────────────────────────────────────

    /// When `infrastructure_guid` is given the capability is created already
    /// deployed on that element.
    pub async fn create_software_capability(
        &self,
        external_source_is_home: bool,
        infrastructure_guid: Option<&str>,
        properties: &SoftwareCapabilityProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_software_capability", |request| async move {
                self.client
                    .create_software_capability(
                        &request,
                        external_source_is_home,
                        infrastructure_guid,
                        properties,
                    )
                    .await
            })
            .await
    }

    pub async fn create_software_capability_from_template(
        &self,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward(
                "create_software_capability_from_template",
                |request| async move {
                    self.client
                        .create_software_capability_from_template(
                            &request,
                            external_source_is_home,
                            template_guid,
                            template_properties,
                        )
                        .await
                },
            )
            .await
    }

    pub async fn update_software_capability(
        &self,
        capability_guid: &str,
        is_merge_update: bool,
        properties: &SoftwareCapabilityProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_software_capability", |request| async move {
                self.client
                    .update_software_capability(
                        &request,
                        capability_guid,
                        is_merge_update,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn remove_software_capability(
        &self,
        capability_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("remove_software_capability", |request| async move {
                self.client
                    .remove_software_capability(&request, capability_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn deploy_capability(
        &self,
        external_source_is_home: bool,
        capability_guid: &str,
        infrastructure_guid: &str,
        properties: &CapabilityDeploymentProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("deploy_capability", |request| async move {
                self.client
                    .deploy_capability(
                        &request,
                        external_source_is_home,
                        capability_guid,
                        infrastructure_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn undeploy_capability(
        &self,
        capability_guid: &str,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("undeploy_capability", |request| async move {
                self.client
                    .undeploy_capability(
                        &request,
                        capability_guid,
                        infrastructure_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn find_software_capabilities(
        &self,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<SoftwareCapabilityElement>, ExchangeError> {
        self.client
            .find_software_capabilities(
                &self.context.request(),
                search_string,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_software_capabilities_for_element(
        &self,
        infrastructure_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<SoftwareCapabilityElement>, ExchangeError> {
        self.client
            .get_software_capabilities_for_element(
                &self.context.request(),
                infrastructure_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_software_capability_by_guid(
        &self,
        capability_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<SoftwareCapabilityElement, ExchangeError> {
        self.client
            .get_software_capability_by_guid(&self.context.request(), capability_guid, effective_time)
            .await
    }

    // ── Asset use and deployment ─────────────────────────────────────

    pub async fn setup_server_asset_use(
        &self,
        external_source_is_home: bool,
        capability_guid: &str,
        asset_guid: &str,
        properties: &ServerAssetUseProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("setup_server_asset_use", |request| async move {
                self.client
                    .setup_server_asset_use(
                        &request,
                        external_source_is_home,
                        capability_guid,
                        asset_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn update_server_asset_use(
        &self,
        server_asset_use_guid: &str,
        is_merge_update: bool,
        properties: &ServerAssetUseProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_server_asset_use", |request| async move {
                self.client
                    .update_server_asset_use(
                        &request,
                        server_asset_use_guid,
                        is_merge_update,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_server_asset_use(
        &self,
        server_asset_use_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_server_asset_use", |request| async move {
                self.client
                    .clear_server_asset_use(&request, server_asset_use_guid, effective_time)
                    .await
            })
            .await
    }

    /// `use_type` of `None` returns every kind of use.
    pub async fn get_server_asset_uses_for_capability(
        &self,
        capability_guid: &str,
        use_type: Option<ServerAssetUseType>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError> {
        self.client
            .get_server_asset_uses_for_capability(
                &self.context.request(),
                capability_guid,
                use_type,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn setup_deployed_on(
        &self,
        external_source_is_home: bool,
        element_guid: &str,
        host_guid: &str,
        properties: &CapabilityDeploymentProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_deployed_on", |request| async move {
                self.client
                    .setup_deployed_on(
                        &request,
                        external_source_is_home,
                        element_guid,
                        host_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_deployed_on(
        &self,
        element_guid: &str,
        host_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_deployed_on", |request| async move {
                self.client
                    .clear_deployed_on(&request, element_guid, host_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn get_deployed_elements(
        &self,
        host_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<InfrastructureElement>, ExchangeError> {
        self.client
            .get_deployed_elements(
                &self.context.request(),
                host_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }
}
