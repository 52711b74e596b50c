//! Concrete dashboard strategies.

pub mod rooms_sections;

pub use rooms_sections::{RoomsSectionsStrategy, generate_views};
