// openmeta-core/src/ports/infrastructure.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::context::RequestContext;
use crate::domain::model::infrastructure::{
    CapabilityDeploymentProperties, InfrastructureElement, InfrastructureProperties,
    ServerAssetUseProperties, ServerAssetUseType, SoftwareCapabilityElement,
    SoftwareCapabilityProperties,
};
use crate::domain::model::{RelatedElement, TemplateProperties};
use crate::error::ExchangeError;

/// Remote client for hosts, platforms, servers and their software capabilities.
#[async_trait]
pub trait InfrastructureExchangeClient: Send + Sync {
    // --- Infrastructure elements ---
    async fn create_infrastructure(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &InfrastructureProperties,
    ) -> Result<String, ExchangeError>;

    async fn create_infrastructure_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError>;

    async fn update_infrastructure(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        is_merge_update: bool,
        properties: &InfrastructureProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn publish_infrastructure(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn withdraw_infrastructure(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_infrastructure(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn find_infrastructure(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<InfrastructureElement>, ExchangeError>;

    async fn get_infrastructure_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<InfrastructureElement>, ExchangeError>;

    async fn get_infrastructure_by_guid(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<InfrastructureElement, ExchangeError>;

    // --- Software capabilities ---
    async fn create_software_capability(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        infrastructure_guid: Option<&str>,
        properties: &SoftwareCapabilityProperties,
    ) -> Result<String, ExchangeError>;

    async fn create_software_capability_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError>;

    async fn update_software_capability(
        &self,
        request: &RequestContext,
        capability_guid: &str,
        is_merge_update: bool,
        properties: &SoftwareCapabilityProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_software_capability(
        &self,
        request: &RequestContext,
        capability_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn deploy_capability(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        capability_guid: &str,
        infrastructure_guid: &str,
        properties: &CapabilityDeploymentProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn undeploy_capability(
        &self,
        request: &RequestContext,
        capability_guid: &str,
        infrastructure_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn find_software_capabilities(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<SoftwareCapabilityElement>, ExchangeError>;

    async fn get_software_capabilities_for_element(
        &self,
        request: &RequestContext,
        infrastructure_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<SoftwareCapabilityElement>, ExchangeError>;

    async fn get_software_capability_by_guid(
        &self,
        request: &RequestContext,
        capability_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<SoftwareCapabilityElement, ExchangeError>;

    // --- Asset use and deployment ---
    async fn setup_server_asset_use(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        capability_guid: &str,
        asset_guid: &str,
        properties: &ServerAssetUseProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError>;

    async fn update_server_asset_use(
        &self,
        request: &RequestContext,
        server_asset_use_guid: &str,
        is_merge_update: bool,
        properties: &ServerAssetUseProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_server_asset_use(
        &self,
        request: &RequestContext,
        server_asset_use_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_server_asset_uses_for_capability(
        &self,
        request: &RequestContext,
        capability_guid: &str,
        use_type: Option<ServerAssetUseType>,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<RelatedElement>, ExchangeError>;

    async fn setup_deployed_on(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        element_guid: &str,
        host_guid: &str,
        properties: &CapabilityDeploymentProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_deployed_on(
        &self,
        request: &RequestContext,
        element_guid: &str,
        host_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_deployed_elements(
        &self,
        request: &RequestContext,
        host_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<InfrastructureElement>, ExchangeError>;
}
