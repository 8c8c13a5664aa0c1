// openmeta-core/src/application/lineage.rs
//
// Processes, their ports, and the data flow, control flow and lineage mapping
// relationships that tie them to the assets they touch.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::exchange::{ExchangeContext, ExchangeService};
use crate::domain::model::TemplateProperties;
use crate::domain::model::lineage::{
    LineageRelationshipElement, LineageRelationshipProperties, PortElement, PortProperties,
    ProcessContainmentType, ProcessElement, ProcessProperties, ProcessStatus,
};
use crate::error::ExchangeError;
use crate::ports::lineage::LineageExchangeClient;

pub struct LineageExchangeService {
    client: Arc<dyn LineageExchangeClient>,
    context: ExchangeContext,
}

impl ExchangeService for LineageExchangeService {
    fn exchange_context(&self) -> &ExchangeContext {
        &self.context
    }

    fn exchange_context_mut(&mut self) -> &mut ExchangeContext {
        &mut self.context
    }
}

impl LineageExchangeService {
    pub fn new(client: Arc<dyn LineageExchangeClient>, context: ExchangeContext) -> Self {
        Self { client, context }
    }

    // ── Processes ────────────────────────────────────────────────────

    pub async fn create_process(
        &self,
        external_source_is_home: bool,
        properties: &ProcessProperties,
        initial_status: ProcessStatus,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_process", |request| async move {
                self.client
                    .create_process(&request, external_source_is_home, properties, initial_status)
                    .await
            })
            .await
    }

    pub async fn create_process_from_template(
        &self,
        external_source_is_home: bool,
        template_guid: &str,
        template_properties: &TemplateProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_process_from_template", |request| async move {
                self.client
                    .create_process_from_template(
                        &request,
                        external_source_is_home,
                        template_guid,
                        template_properties,
                    )
                    .await
            })
            .await
    }

    pub async fn update_process(
        &self,
        process_guid: &str,
        is_merge_update: bool,
        properties: &ProcessProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_process", |request| async move {
                self.client
                    .update_process(
                        &request,
                        process_guid,
                        is_merge_update,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn update_process_status(
        &self,
        process_guid: &str,
        status: ProcessStatus,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_process_status", |request| async move {
                self.client
                    .update_process_status(&request, process_guid, status, effective_time)
                    .await
            })
            .await
    }

    pub async fn remove_process(
        &self,
        process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("remove_process", |request| async move {
                self.client
                    .remove_process(&request, process_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn setup_process_parent(
        &self,
        external_source_is_home: bool,
        parent_process_guid: &str,
        child_process_guid: &str,
        containment_type: ProcessContainmentType,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_process_parent", |request| async move {
                self.client
                    .setup_process_parent(
                        &request,
                        external_source_is_home,
                        parent_process_guid,
                        child_process_guid,
                        containment_type,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_process_parent(
        &self,
        parent_process_guid: &str,
        child_process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_process_parent", |request| async move {
                self.client
                    .clear_process_parent(
                        &request,
                        parent_process_guid,
                        child_process_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn find_processes(
        &self,
        search_string: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProcessElement>, ExchangeError> {
        self.client
            .find_processes(
                &self.context.request(),
                search_string,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_processes_by_name(
        &self,
        name: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProcessElement>, ExchangeError> {
        self.client
            .get_processes_by_name(
                &self.context.request(),
                name,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_process_by_guid(
        &self,
        process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<ProcessElement, ExchangeError> {
        self.client
            .get_process_by_guid(&self.context.request(), process_guid, effective_time)
            .await
    }

    /// `None` when the process is not a step of another process.
    pub async fn get_process_parent(
        &self,
        process_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Option<ProcessElement>, ExchangeError> {
        self.client
            .get_process_parent(&self.context.request(), process_guid, effective_time)
            .await
    }

    pub async fn get_sub_processes(
        &self,
        process_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProcessElement>, ExchangeError> {
        self.client
            .get_sub_processes(
                &self.context.request(),
                process_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    // ── Ports ────────────────────────────────────────────────────────

    pub async fn create_port(
        &self,
        external_source_is_home: bool,
        properties: &PortProperties,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("create_port", |request| async move {
                self.client
                    .create_port(&request, external_source_is_home, properties)
                    .await
            })
            .await
    }

    pub async fn update_port(
        &self,
        port_guid: &str,
        is_merge_update: bool,
        properties: &PortProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_port", |request| async move {
                self.client
                    .update_port(&request, port_guid, is_merge_update, properties, effective_time)
                    .await
            })
            .await
    }

    pub async fn remove_port(
        &self,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("remove_port", |request| async move {
                self.client
                    .remove_port(&request, port_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn setup_process_port(
        &self,
        external_source_is_home: bool,
        process_guid: &str,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_process_port", |request| async move {
                self.client
                    .setup_process_port(
                        &request,
                        external_source_is_home,
                        process_guid,
                        port_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_process_port(
        &self,
        process_guid: &str,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_process_port", |request| async move {
                self.client
                    .clear_process_port(&request, process_guid, port_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn setup_port_delegation(
        &self,
        external_source_is_home: bool,
        port_guid: &str,
        delegated_port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_port_delegation", |request| async move {
                self.client
                    .setup_port_delegation(
                        &request,
                        external_source_is_home,
                        port_guid,
                        delegated_port_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_port_delegation(
        &self,
        port_guid: &str,
        delegated_port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_port_delegation", |request| async move {
                self.client
                    .clear_port_delegation(&request, port_guid, delegated_port_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn setup_port_schema_type(
        &self,
        external_source_is_home: bool,
        port_guid: &str,
        schema_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("setup_port_schema_type", |request| async move {
                self.client
                    .setup_port_schema_type(
                        &request,
                        external_source_is_home,
                        port_guid,
                        schema_type_guid,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_port_schema_type(
        &self,
        port_guid: &str,
        schema_type_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_port_schema_type", |request| async move {
                self.client
                    .clear_port_schema_type(&request, port_guid, schema_type_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn get_ports_for_process(
        &self,
        process_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<PortElement>, ExchangeError> {
        self.client
            .get_ports_for_process(
                &self.context.request(),
                process_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_port_by_guid(
        &self,
        port_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<PortElement, ExchangeError> {
        self.client
            .get_port_by_guid(&self.context.request(), port_guid, effective_time)
            .await
    }

    // ── Lineage relationships ────────────────────────────────────────

    /// Returns the guid of the new DataFlow relationship.
    pub async fn setup_data_flow(
        &self,
        external_source_is_home: bool,
        data_supplier_guid: &str,
        data_consumer_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("setup_data_flow", |request| async move {
                self.client
                    .setup_data_flow(
                        &request,
                        external_source_is_home,
                        data_supplier_guid,
                        data_consumer_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn update_data_flow(
        &self,
        data_flow_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("update_data_flow", |request| async move {
                self.client
                    .update_data_flow(&request, data_flow_guid, properties, effective_time)
                    .await
            })
            .await
    }

    pub async fn clear_data_flow(
        &self,
        data_flow_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_data_flow", |request| async move {
                self.client
                    .clear_data_flow(&request, data_flow_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn get_data_flows(
        &self,
        data_supplier_guid: &str,
        data_consumer_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError> {
        self.client
            .get_data_flows(
                &self.context.request(),
                data_supplier_guid,
                data_consumer_guid,
                effective_time,
            )
            .await
    }

    pub async fn setup_control_flow(
        &self,
        external_source_is_home: bool,
        current_step_guid: &str,
        next_step_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("setup_control_flow", |request| async move {
                self.client
                    .setup_control_flow(
                        &request,
                        external_source_is_home,
                        current_step_guid,
                        next_step_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_control_flow(
        &self,
        control_flow_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_control_flow", |request| async move {
                self.client
                    .clear_control_flow(&request, control_flow_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn get_control_flows(
        &self,
        current_step_guid: &str,
        next_step_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError> {
        self.client
            .get_control_flows(
                &self.context.request(),
                current_step_guid,
                next_step_guid,
                effective_time,
            )
            .await
    }

    pub async fn setup_lineage_mapping(
        &self,
        external_source_is_home: bool,
        source_element_guid: &str,
        destination_element_guid: &str,
        properties: &LineageRelationshipProperties,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<String, ExchangeError> {
        self.context
            .forward("setup_lineage_mapping", |request| async move {
                self.client
                    .setup_lineage_mapping(
                        &request,
                        external_source_is_home,
                        source_element_guid,
                        destination_element_guid,
                        properties,
                        effective_time,
                    )
                    .await
            })
            .await
    }

    pub async fn clear_lineage_mapping(
        &self,
        lineage_mapping_guid: &str,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<(), ExchangeError> {
        self.context
            .forward("clear_lineage_mapping", |request| async move {
                self.client
                    .clear_lineage_mapping(&request, lineage_mapping_guid, effective_time)
                    .await
            })
            .await
    }

    pub async fn get_destination_lineage_mappings(
        &self,
        source_element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError> {
        self.client
            .get_destination_lineage_mappings(
                &self.context.request(),
                source_element_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }

    pub async fn get_source_lineage_mappings(
        &self,
        destination_element_guid: &str,
        start_from: usize,
        page_size: usize,
        effective_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<LineageRelationshipElement>, ExchangeError> {
        self.client
            .get_source_lineage_mappings(
                &self.context.request(),
                destination_element_guid,
                start_from,
                page_size,
                effective_time,
            )
            .await
    }
}
