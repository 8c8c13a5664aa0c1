// openmeta-core/src/application/catalog.rs
//
// Static listing of every exchange operation, so tooling can show what a
// connector is allowed to do without wiring any remote client.

use serde::Serialize;
use std::fmt;

use crate::domain::family::ExchangeFamily;
use crate::domain::synchronization::SynchronizationGuard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Guarded by the permitted synchronization.
    Mutating,
    ReadOnly,
}

impl OperationKind {
    /// Retrievals are named `find_*` or `get_*`; everything else changes metadata.
    pub fn from_name(name: &str) -> Self {
        if name.starts_with("find_") || name.starts_with("get_") {
            Self::ReadOnly
        } else {
            Self::Mutating
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mutating => write!(f, "mutating"),
            Self::ReadOnly => write!(f, "read-only"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExchangeOperation {
    pub family: ExchangeFamily,
    pub name: &'static str,
    pub kind: OperationKind,
}

impl ExchangeOperation {
    pub fn is_permitted(&self, guard: &SynchronizationGuard) -> bool {
        self.kind == OperationKind::ReadOnly || guard.allows_updates()
    }
}

pub struct OperationCatalog;

impl OperationCatalog {
    pub fn operations(family: ExchangeFamily) -> Vec<ExchangeOperation> {
        Self::names(family)
            .iter()
            .map(|&name| ExchangeOperation {
                family,
                name,
                kind: OperationKind::from_name(name),
            })
            .collect()
    }

    pub fn all() -> Vec<ExchangeOperation> {
        ExchangeFamily::ALL
            .into_iter()
            .flat_map(Self::operations)
            .collect()
    }

    pub fn find(family: ExchangeFamily, name: &str) -> Option<ExchangeOperation> {
        Self::operations(family).into_iter().find(|op| op.name == name)
    }

    fn names(family: ExchangeFamily) -> &'static [&'static str] {
        match family {
            ExchangeFamily::Connection => CONNECTION,
            ExchangeFamily::Glossary => GLOSSARY,
            ExchangeFamily::Lineage => LINEAGE,
            ExchangeFamily::Stewardship => STEWARDSHIP,
            ExchangeFamily::Infrastructure => INFRASTRUCTURE,
            ExchangeFamily::Governance => GOVERNANCE,
        }
    }
}

const CONNECTION: &[&str] = &[
    "create_connection",
    "create_connection_from_template",
    "update_connection",
    "remove_connection",
    "setup_connector_type",
    "clear_connector_type",
    "setup_endpoint",
    "clear_endpoint",
    "setup_embedded_connection",
    "clear_embedded_connection",
    "setup_asset_connection",
    "clear_asset_connection",
    "find_connections",
    "get_connections_by_name",
    "get_connection_by_guid",
    "create_endpoint",
    "create_endpoint_from_template",
    "update_endpoint",
    "remove_endpoint",
    "find_endpoints",
    "get_endpoints_by_name",
    "get_endpoint_by_guid",
    "create_connector_type",
    "create_connector_type_from_template",
    "update_connector_type",
    "remove_connector_type",
    "find_connector_types",
    "get_connector_types_by_name",
    "get_connector_type_by_guid",
];

const GLOSSARY: &[&str] = &[
    "create_glossary",
    "create_glossary_from_template",
    "update_glossary",
    "remove_glossary",
    "find_glossaries",
    "get_glossaries_by_name",
    "get_glossary_by_guid",
    "create_glossary_category",
    "update_glossary_category",
    "remove_glossary_category",
    "setup_category_parent",
    "clear_category_parent",
    "find_glossary_categories",
    "get_categories_for_glossary",
    "get_glossary_category_by_guid",
    "create_glossary_term",
    "create_glossary_term_from_template",
    "update_glossary_term",
    "update_glossary_term_status",
    "remove_glossary_term",
    "setup_term_category",
    "clear_term_category",
    "setup_term_relationship",
    "update_term_relationship",
    "clear_term_relationship",
    "find_glossary_terms",
    "get_terms_for_glossary",
    "get_terms_for_glossary_category",
    "get_glossary_term_by_guid",
    "get_related_terms",
];

const LINEAGE: &[&str] = &[
    "create_process",
    "create_process_from_template",
    "update_process",
    "update_process_status",
    "remove_process",
    "setup_process_parent",
    "clear_process_parent",
    "find_processes",
    "get_processes_by_name",
    "get_process_by_guid",
    "get_process_parent",
    "get_sub_processes",
    "create_port",
    "update_port",
    "remove_port",
    "setup_process_port",
    "clear_process_port",
    "setup_port_delegation",
    "clear_port_delegation",
    "setup_port_schema_type",
    "clear_port_schema_type",
    "get_ports_for_process",
    "get_port_by_guid",
    "setup_data_flow",
    "update_data_flow",
    "clear_data_flow",
    "get_data_flows",
    "setup_control_flow",
    "clear_control_flow",
    "get_control_flows",
    "setup_lineage_mapping",
    "clear_lineage_mapping",
    "get_destination_lineage_mappings",
    "get_source_lineage_mappings",
];

const STEWARDSHIP: &[&str] = &[
    "set_confidence_classification",
    "clear_confidence_classification",
    "set_criticality_classification",
    "clear_criticality_classification",
    "set_confidentiality_classification",
    "clear_confidentiality_classification",
    "set_retention_classification",
    "clear_retention_classification",
    "get_confidence_classified_elements",
    "get_elements_by_classification",
    "add_security_tags",
    "clear_security_tags",
    "add_ownership",
    "clear_ownership",
    "get_owners_elements",
    "add_element_to_subject_area",
    "remove_element_from_subject_area",
    "get_members_of_subject_area",
    "setup_semantic_assignment",
    "clear_semantic_assignment",
    "get_meanings",
    "get_semantic_assignees",
    "add_governance_definition_to_element",
    "remove_governance_definition_from_element",
    "get_governed_elements",
    "get_governed_by_definitions",
    "link_elements_as_peer_duplicates",
    "unlink_elements_as_peer_duplicates",
    "get_peer_duplicates",
];

const INFRASTRUCTURE: &[&str] = &[
    "create_infrastructure",
    "create_infrastructure_from_template",
    "update_infrastructure",
    "publish_infrastructure",
    "withdraw_infrastructure",
    "remove_infrastructure",
    "find_infrastructure",
    "get_infrastructure_by_name",
    "get_infrastructure_by_guid",
    "create_software_capability",
    "create_software_capability_from_template",
    "update_software_capability",
    "remove_software_capability",
    "deploy_capability",
    "undeploy_capability",
    "find_software_capabilities",
    "get_software_capabilities_for_element",
    "get_software_capability_by_guid",
    "setup_server_asset_use",
    "update_server_asset_use",
    "clear_server_asset_use",
    "get_server_asset_uses_for_capability",
    "setup_deployed_on",
    "clear_deployed_on",
    "get_deployed_elements",
];

const GOVERNANCE: &[&str] = &[
    "create_metadata_element_in_store",
    "update_metadata_element_in_store",
    "update_metadata_element_status_in_store",
    "update_metadata_element_effectivity_in_store",
    "delete_metadata_element_in_store",
    "get_metadata_element_by_guid",
    "get_metadata_element_by_unique_name",
    "find_metadata_elements_with_string",
    "find_metadata_elements_by_type",
    "classify_metadata_element_in_store",
    "reclassify_metadata_element_in_store",
    "declassify_metadata_element_in_store",
    "create_related_elements_in_store",
    "update_related_elements_in_store",
    "delete_related_elements_in_store",
    "get_related_metadata_elements",
    "get_metadata_element_relationships",
];
