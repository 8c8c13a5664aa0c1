// openmeta-core/src/ports/lineage.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::context::RequestContext;
use crate::domain::model::TemplateProperties;
use crate::domain::model::lineage::{
    LineageRelationshipElement, LineageRelationshipProperties, PortElement, PortProperties,
    ProcessContainmentType, ProcessElement, ProcessProperties, ProcessStatus,
};
use crate::error::ExchangeError;

/// Remote client for processes, ports and the lineage relationships between them.
#[async_trait]
pub trait LineageExchangeClient: Send + Sync {
    // --- Processes ---
    async fn create_process(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &ProcessProperties,
        initial_status: ProcessStatus,
    ) -> Result<String, ExchangeError>;

    async fn create_process_from_template(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError>;

    async fn update_process(
        &self,
        request: &RequestContext,
        process_guid: &str,
        is_merge_update: bool,
        properties: &ProcessProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn update_process_status(
        &self,
        request: &RequestContext,
        process_guid: &str,
        status: ProcessStatus,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_process(
        &self,
        request: &RequestContext,
        process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn setup_process_parent(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        parent_process_guid: &str,
        child_process_guid: &str,
        containment_type: ProcessContainmentType,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_process_parent(
        &self,
        request: &RequestContext,
        parent_process_guid: &str,
        child_process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn find_processes(
        &self,
        request: &RequestContext,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProcessElement>, ExchangeError>;

    async fn get_processes_by_name(
        &self,
        request: &RequestContext,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProcessElement>, ExchangeError>;

    async fn get_process_by_guid(
        &self,
        request: &RequestContext,
        process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<ProcessElement, ExchangeError>;

    async fn get_process_parent(
        &self,
        request: &RequestContext,
        process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Option<ProcessElement>, ExchangeError>;

    async fn get_sub_processes(
        &self,
        request: &RequestContext,
        process_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProcessElement>, ExchangeError>;

    // --- Ports ---
    async fn create_port(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        properties: &PortProperties,
    ) -> Result<String, ExchangeError>;

    async fn update_port(
        &self,
        request: &RequestContext,
        port_guid: &str,
        is_merge_update: bool,
        properties: &PortProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn remove_port(
        &self,
        request: &RequestContext,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn setup_process_port(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        process_guid: &str,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_process_port(
        &self,
        request: &RequestContext,
        process_guid: &str,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn setup_port_delegation(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        port_guid: &str,
        delegated_port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_port_delegation(
        &self,
        request: &RequestContext,
        port_guid: &str,
        delegated_port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn setup_port_schema_type(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        port_guid: &str,
        schema_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_port_schema_type(
        &self,
        request: &RequestContext,
        port_guid: &str,
        schema_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_ports_for_process(
        &self,
        request: &RequestContext,
        process_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<PortElement>, ExchangeError>;

    async fn get_port_by_guid(
        &self,
        request: &RequestContext,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<PortElement, ExchangeError>;

    // --- Lineage relationships ---
    async fn setup_data_flow(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        data_supplier_guid: &str,
        data_consumer_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError>;

    async fn update_data_flow(
        &self,
        request: &RequestContext,
        data_flow_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn clear_data_flow(
        &self,
        request: &RequestContext,
        data_flow_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_data_flows(
        &self,
        request: &RequestContext,
        data_supplier_guid: &str,
        data_consumer_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError>;

    async fn setup_control_flow(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        current_step_guid: &str,
        next_step_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError>;

    async fn clear_control_flow(
        &self,
        request: &RequestContext,
        control_flow_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_control_flows(
        &self,
        request: &RequestContext,
        current_step_guid: &str,
        next_step_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError>;

    async fn setup_lineage_mapping(
        &self,
        request: &RequestContext,
        external_source_is_home: bool,
        source_element_guid: &str,
        destination_element_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError>;

    async fn clear_lineage_mapping(
        &self,
        request: &RequestContext,
        lineage_mapping_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError>;

    async fn get_destination_lineage_mappings(
        &self,
        request: &RequestContext,
        source_element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError>;

    async fn get_source_lineage_mappings(
        &self,
        request: &RequestContext,
        destination_element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError>;
}
