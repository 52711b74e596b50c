//! Room cards for the home view.

use std::collections::HashMap;

use roomboard_domain::area::Area;
use roomboard_domain::device::DeviceRegistry;
use roomboard_domain::entity::Entity;
use roomboard_domain::lovelace::{
    AreaCard, AreaControl, CardFeature, DisplayType, FeaturesPosition, GridOptions, HeadingCard,
    StrategyCard,
};

use super::entity_filters::{filter_valid_areas, sort_areas_alphabetically};

/// Area id to display label.
pub type AreaNames<'a> = HashMap<&'a str, &'a str>;

/// Controls offered on every room card.
pub const AREA_CONTROLS: [AreaControl; 7] = [
    AreaControl::Light,
    AreaControl::Switch,
    AreaControl::Fan,
    AreaControl::CoverShade,
    AreaControl::CoverBlind,
    AreaControl::CoverGarage,
    AreaControl::CoverDoor,
];

/// Room card that navigates to `[/<base_path>]/<area_id>`.
#[must_use]
pub fn build_area_card(area: &Area, base_path: &str) -> AreaCard {
    let prefix = if base_path.is_empty() {
        String::new()
    } else {
        format!("/{base_path}")
    };
    AreaCard {
        title: area.name.clone(),
        area: area.area_id.clone(),
        navigation_path: format!("{prefix}/{}", area.area_id),
        features_position: Some(FeaturesPosition::Bottom),
        display_type: Some(DisplayType::Picture),
        grid_options: Some(GridOptions {
            columns: Some(12),
            rows: Some(3),
        }),
        features: Some(vec![CardFeature::AreaControls {
            controls: AREA_CONTROLS.to_vec(),
        }]),
        exclude_entities: None,
    }
}

/// `Areas` heading followed by one card per displayable room, by name.
#[must_use]
pub fn build_area_cards_section(
    areas: &[&Area],
    entities: &[&Entity],
    devices: &DeviceRegistry,
    base_path: &str,
) -> Vec<StrategyCard> {
    let sorted = sort_areas_alphabetically(areas);
    let valid = filter_valid_areas(&sorted, entities, devices);

    std::iter::once(StrategyCard::from(HeadingCard::title("Areas")))
        .chain(
            valid
                .into_iter()
                .map(|area| StrategyCard::from(build_area_card(area, base_path))),
        )
        .collect()
}

/// Area ids of the room cards, in card order.
#[must_use]
pub fn get_area_ids_from_cards(cards: &[StrategyCard]) -> Vec<String> {
    cards
        .iter()
        .filter_map(StrategyCard::area_id)
        .filter(|area_id| !area_id.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Display label for every area (name, or id when unnamed).
#[must_use]
pub fn build_area_names<'a>(areas: &[&'a Area]) -> AreaNames<'a> {
    areas
        .iter()
        .map(|area| (area.area_id.as_str(), area.label()))
        .collect()
}

/// Label for `area_id`, falling back to the id itself.
#[must_use]
pub fn area_label<'a>(area_names: &AreaNames<'a>, area_id: &'a str) -> &'a str {
    area_names.get(area_id).copied().unwrap_or(area_id)
}
