pub mod configuration;

pub use configuration::ConnectorConfig;
