// openmeta-core/src/domain/synchronization/guard.rs

use tracing::{debug, warn};

use crate::domain::error::DomainError;
use crate::domain::synchronization::PermittedSynchronization;

/// Decides, call by call, whether a mutating exchange call may reach the remote client.
///
/// The decision is never cached: `check` compares the held policy with the blocked
/// direction every time it is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynchronizationGuard {
    permitted: PermittedSynchronization,
    blocked: PermittedSynchronization,
}

impl SynchronizationGuard {
    /// Direction that stops a connector from writing into open metadata.
    pub const DEFAULT_BLOCKED: PermittedSynchronization = PermittedSynchronization::ToThirdParty;

    pub fn new(permitted: PermittedSynchronization) -> Self {
        Self::with_blocked(permitted, Self::DEFAULT_BLOCKED)
    }

    pub fn with_blocked(
        permitted: PermittedSynchronization,
        blocked: PermittedSynchronization,
    ) -> Self {
        Self { permitted, blocked }
    }

    pub fn permitted(&self) -> PermittedSynchronization {
        self.permitted
    }

    pub fn blocked(&self) -> PermittedSynchronization {
        self.blocked
    }

    pub fn allows_updates(&self) -> bool {
        self.permitted != self.blocked
    }

    pub fn check(&self, connector_name: &str, method_name: &str) -> Result<(), DomainError> {
        if self.allows_updates() {
            debug!(
                connector = connector_name,
                method = method_name,
                policy = %self.permitted,
                "Forwarding exchange call"
            );
            return Ok(());
        }

        warn!(
            connector = connector_name,
            method = method_name,
            policy = %self.permitted,
            "⛔ Exchange call blocked by permitted synchronization"
        );
        Err(DomainError::PolicyViolation {
            policy: self.permitted,
            connector_name: connector_name.to_string(),
            method_name: method_name.to_string(),
        })
    }
}

impl Default for SynchronizationGuard {
    fn default() -> Self {
        Self::new(PermittedSynchronization::default())
    }
}
