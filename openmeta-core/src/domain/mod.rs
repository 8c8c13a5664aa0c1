pub mod connector;
pub mod context;
pub mod error;
pub mod family;
pub mod model;
pub mod synchronization;

// Handy re-exports to keep imports short elsewhere
pub use context::{ExternalSource, RequestContext};
pub use error::{DomainError, ErrorKind};
pub use family::ExchangeFamily;
pub use synchronization::{PermittedSynchronization, SynchronizationGuard};
