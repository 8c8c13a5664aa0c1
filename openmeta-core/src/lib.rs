// openmeta-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// One remote client contract per entity family (connection, glossary, lineage...).
pub mod ports;

// 2. Domain
// Synchronization policy, guard, request identity, opaque metadata value objects.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// Connector configuration files and environment overrides.
pub mod infrastructure;

// 4. Application (Use Cases)
// Exchange services, context wiring, connector lifecycle, operation catalog.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use openmeta_core::ExchangeError;
pub use error::ExchangeError;
