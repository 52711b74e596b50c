//! Pure builders for each part of the generated dashboard.
//!
//! Every builder borrows its input and returns fresh values; none fail.

pub mod area_cards;
pub mod area_views;
pub mod entity_filters;
pub mod media_players_view;
pub mod summary_cards;
pub mod view_assembly;
