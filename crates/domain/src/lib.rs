//! # roomboard-domain
//!
//! Pure domain model for the roomboard dashboard generator.
//!
//! ## Responsibilities
//! - Registry snapshot types: **Areas**, **Devices**, **Entities** and their
//!   current **states**, exactly as the host hands them over
//! - **Strategy config**: exclusions, favorites, header and badges
//! - **Lovelace types**: views, grid sections and the closed card union the
//!   generator emits
//! - Boundary parsing of loosely-typed host JSON with labelled shape errors
//! - Locale-aware ordering of display names
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Generation logic lives in `roomboard-app`.

pub mod collate;
pub mod config;
pub mod error;

pub mod area;
pub mod device;
pub mod entity;
pub mod entity_domain;
pub mod hass;
pub mod lovelace;
