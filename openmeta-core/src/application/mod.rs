// openmeta-core/src/application/mod.rs

pub mod catalog;
pub mod connector;
pub mod context;
pub mod exchange;

// One exchange service per entity family
pub mod connection;
pub mod glossary;
pub mod governance;
pub mod infrastructure;
pub mod lineage;
pub mod stewardship;

#[cfg(test)]
pub(crate) mod testing;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets connector code write
// `use openmeta_core::application::{ContextManager, GlossaryExchangeService};`
// without knowing the internal file layout.

pub use catalog::{ExchangeOperation, OperationCatalog, OperationKind};
pub use connection::ConnectionExchangeService;
pub use connector::{ConnectorRunner, IntegrationConnector};
pub use context::{ContextManager, ContextSlot, ExchangeClients, IntegrationContext};
pub use exchange::{ExchangeContext, ExchangeService};
pub use glossary::GlossaryExchangeService;
pub use governance::OpenMetadataGovernanceService;
pub use infrastructure::InfrastructureExchangeService;
pub use lineage::LineageExchangeService;
pub use stewardship::StewardshipExchangeService;
