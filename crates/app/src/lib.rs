//! # roomboard-app
//!
//! Application layer: dashboard generation and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`DashboardStrategy` port** that the host-facing adapters
//!   drive by tag
//! - Provide the pure **builders** for every part of the dashboard:
//!   entity filtering, room cards, room views, media players, summaries,
//!   and home-view assembly
//! - Compose the builders into the rooms-and-sections **strategy**
//! - Keep the **strategy registry** the host queries by name
//!
//! ## Dependency rule
//! Depends on `roomboard-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod builders;
pub mod ports;
pub mod registry;
pub mod strategies;
