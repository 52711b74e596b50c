//! Port definitions: traits the host-facing adapters drive.
//!
//! Ports live here (in `app`) so that both the generation layer and the
//! adapter layer can depend on them without circular dependencies.

pub mod strategy;

pub use strategy::DashboardStrategy;
