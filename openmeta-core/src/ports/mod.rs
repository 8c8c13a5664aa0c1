// openmeta-core/src/ports/mod.rs
//
// Contracts for the remote metadata clients. Each family's exchange service
// forwards to exactly one of these; how the client reaches the metadata server
// is its own business.

pub mod connection;
pub mod error;
pub mod glossary;
pub mod governance;
pub mod infrastructure;
pub mod lineage;
pub mod stewardship;

pub use connection::ConnectionExchangeClient;
pub use error::RemoteError;
pub use glossary::GlossaryExchangeClient;
pub use governance::OpenMetadataStoreClient;
pub use infrastructure::InfrastructureExchangeClient;
pub use lineage::LineageExchangeClient;
pub use stewardship::StewardshipExchangeClient;
