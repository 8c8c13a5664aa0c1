pub mod connector;

pub use crate::domain::connector::ConnectorConfig;
pub use connector::{load_connector_config, load_connector_config_file, parse_connector_config};
