// openmeta-core/src/domain/synchronization/mod.rs

pub mod guard;
pub mod permitted;

pub use guard::SynchronizationGuard;
pub use permitted::PermittedSynchronization;
