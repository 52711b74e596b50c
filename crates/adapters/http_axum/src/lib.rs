//! # roomboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a small **JSON API** through which a host lists the registered
//!   dashboard strategies and runs one against its registry snapshot
//! - Map HTTP requests into strategy calls (driving adapter)
//! - Map generation results and input errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `roomboard-app` (for the strategy registry) and
//! `roomboard-domain` (for error and output types). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
