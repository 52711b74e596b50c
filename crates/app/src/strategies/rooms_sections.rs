//! Rooms-and-sections dashboard: a home view with favorites, summaries and
//! room cards, one subview per room, and a media players view.

use roomboard_domain::area::Area;
use roomboard_domain::config::DashboardStrategyConfig;
use roomboard_domain::entity::Entity;
use roomboard_domain::entity_domain::default_entity_domains;
use roomboard_domain::hass::HassSnapshot;
use roomboard_domain::lovelace::LovelaceConfig;

use crate::builders::area_cards::{
    build_area_cards_section, build_area_names, get_area_ids_from_cards,
};
use crate::builders::area_views::build_area_views;
use crate::builders::entity_filters::{
    filter_entities_by_domain_and_exclusions, sort_areas_alphabetically,
    sort_entities_alphabetically,
};
use crate::builders::media_players_view::{
    MediaGrouping, build_media_players_view, group_media_players_by_area,
};
use crate::builders::summary_cards::build_summary_cards;
use crate::builders::view_assembly::{
    build_area_cards_grid_section, build_favorites_section, build_home_view,
    build_summary_section,
};
use crate::ports::DashboardStrategy;

/// Tag the host registers this strategy under.
pub const ROOMS_SECTIONS_TAG: &str = "ll-strategy-dashboard-rooms-sections";

const ROOMS_SECTIONS_ALIASES: &[&str] = &["rooms-sections", "custom:rooms-sections"];

/// Build the whole dashboard for one snapshot.
///
/// Views come out as `[home, ...rooms, media players]`. Output depends only
/// on the inputs, so repeated calls yield equal trees.
#[must_use]
pub fn generate_views(config: &DashboardStrategyConfig, hass: &HassSnapshot) -> LovelaceConfig {
    let excluded = config.excluded_entities();
    let base_path = hass.panel_url.as_deref().unwrap_or_default();
    let favorite_ids: Vec<&str> = config
        .favorite_entities()
        .iter()
        .map(String::as_str)
        .filter(|entity_id| hass.has_state(entity_id))
        .collect();

    let all_areas: Vec<&Area> = hass.areas.values().collect();
    let areas = sort_areas_alphabetically(&all_areas);
    let all_entities: Vec<&Entity> = hass.entities.values().collect();
    let all_entity_ids = hass.known_entity_ids();
    let devices = &hass.devices;
    let domains = default_entity_domains();

    let filtered = filter_entities_by_domain_and_exclusions(
        all_entities.iter().copied(),
        &domains,
        excluded,
    );
    let entities = sort_entities_alphabetically(&filtered);

    let area_cards = build_area_cards_section(&areas, &entities, devices, base_path);
    let area_ids = get_area_ids_from_cards(&area_cards);
    let area_names = build_area_names(&areas);

    let area_views = build_area_views(&area_ids, &area_names, &entities, &domains, devices);

    let media_entities: Vec<&Entity> = all_entities
        .iter()
        .copied()
        .filter(|entity| entity.in_domain("media_player"))
        .filter(|entity| !excluded.contains(&entity.entity_id))
        .collect();
    let MediaGrouping {
        media_by_area,
        unassigned_media,
    } = group_media_players_by_area(&media_entities, devices);
    let media_view =
        build_media_players_view(&media_by_area, &unassigned_media, &area_ids, &area_names);

    let summary_cards = build_summary_cards(&all_entity_ids);

    let home_view = build_home_view(
        [
            build_favorites_section(&favorite_ids),
            build_summary_section(summary_cards),
            Some(build_area_cards_grid_section(area_cards)),
        ],
        config,
    );

    let mut views = Vec::with_capacity(area_views.len() + 2);
    views.push(home_view);
    views.extend(area_views);
    views.push(media_view);
    LovelaceConfig { views }
}

/// The rooms-and-sections strategy as a registrable component.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomsSectionsStrategy;

impl DashboardStrategy for RoomsSectionsStrategy {
    fn name(&self) -> &'static str {
        ROOMS_SECTIONS_TAG
    }

    fn aliases(&self) -> &'static [&'static str] {
        ROOMS_SECTIONS_ALIASES
    }

    #[tracing::instrument(skip_all, fields(strategy = ROOMS_SECTIONS_TAG))]
    fn generate(&self, config: &DashboardStrategyConfig, hass: &HassSnapshot) -> LovelaceConfig {
        tracing::info!(strategy_type = %config.strategy_type, "generating views");
        let lovelace = generate_views(config, hass);
        tracing::debug!(
            views = lovelace.views.len(),
            paths = ?lovelace.views.iter().map(|view| view.path.as_str()).collect::<Vec<_>>(),
            "generated views"
        );
        lovelace
    }
}
