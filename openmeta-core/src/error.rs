// openmeta-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::error::RemoteError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    // --- DOMAIN ERRORS (synchronization policy, missing context) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- REMOTE CLIENT ERRORS (returned untouched by the exchange services) ---
    #[error(transparent)]
    Remote(#[from] RemoteError),

    // --- INFRASTRUCTURE ERRORS (IO, config parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- GENERIC ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl ExchangeError {
    /// True when the error was raised locally because the synchronization policy
    /// forbids the attempted call.
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, Self::Domain(DomainError::PolicyViolation { .. }))
    }
}

impl From<std::io::Error> for ExchangeError {
    fn from(err: std::io::Error) -> Self {
        ExchangeError::Infrastructure(InfrastructureError::Io(err))
    }
}
