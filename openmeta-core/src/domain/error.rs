// openmeta-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::family::ExchangeFamily;
use crate::domain::synchronization::PermittedSynchronization;

/// Broad classification of a locally raised error, independent of its wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller is not allowed to perform the call.
    Authorization,
    /// The connector or its context is not wired correctly.
    Configuration,
    /// A supplied value could not be understood.
    Parameter,
}

#[derive(Error, Debug, Diagnostic, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "The {connector_name} integration connector has permitted synchronization of {policy} \
         which does not allow it to call method {method_name}"
    )]
    #[diagnostic(
        code(openmeta::domain::policy_violation),
        help("Change the connector's permitted synchronization or stop calling '{method_name}'.")
    )]
    PolicyViolation {
        policy: PermittedSynchronization,
        connector_name: String,
        method_name: String,
    },

    #[error("The context for the {connector_name} integration connector has not been set")]
    #[diagnostic(
        code(openmeta::domain::context_not_initialized),
        help("The context manager must hand the connector its context before it is used.")
    )]
    ContextNotInitialized { connector_name: String },

    #[error("No exchange service is configured for the {family} family")]
    #[diagnostic(
        code(openmeta::domain::service_not_configured),
        help("Supply a client for this family when wiring the integration context.")
    )]
    ServiceNotConfigured { family: ExchangeFamily },

    #[error("Unknown permitted synchronization: {0}")]
    #[diagnostic(
        code(openmeta::domain::unknown_synchronization),
        help("Use one of: both_directions, to_third_party, from_third_party.")
    )]
    UnknownSynchronization(String),

    #[error("Unknown exchange family: {0}")]
    #[diagnostic(code(openmeta::domain::unknown_family))]
    UnknownFamily(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PolicyViolation { .. } => ErrorKind::Authorization,
            Self::ContextNotInitialized { .. } | Self::ServiceNotConfigured { .. } => {
                ErrorKind::Configuration
            }
            Self::UnknownSynchronization(_) | Self::UnknownFamily(_) => ErrorKind::Parameter,
        }
    }

    /// HTTP status a REST layer would report for this error.
    pub fn http_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Authorization => 403,
            ErrorKind::Configuration | ErrorKind::Parameter => 400,
        }
    }
}
