//! Per-room views: one entities card per configured domain present in the room.

use roomboard_domain::device::DeviceRegistry;
use roomboard_domain::entity::Entity;
use roomboard_domain::entity_domain::EntityDomainInfo;
use roomboard_domain::lovelace::{
    EntitiesCard, EntityRow, GridSection, SectionsView, StrategyCard, ViewType,
};

use super::area_cards::{AreaNames, area_label};
use super::entity_filters::get_area_domain_entities;

/// Entities card for one domain of a room, or `None` when the room has
/// no entity of that domain.
#[must_use]
pub fn build_entities_domain_card(
    domain: &EntityDomainInfo,
    area_entities: &[&Entity],
) -> Option<EntitiesCard> {
    if area_entities.is_empty() {
        return None;
    }
    Some(EntitiesCard {
        title: Some(domain.name.clone()),
        entities: area_entities
            .iter()
            .map(|entity| EntityRow::from(entity.entity_id.clone()))
            .collect(),
        show_header_toggle: Some(true),
        state_color: Some(true),
        ..EntitiesCard::default()
    })
}

/// Domain cards for a room, in configured domain order, skipping empty domains.
#[must_use]
pub fn build_area_domain_cards(
    entities: &[&Entity],
    area_id: &str,
    domains: &[EntityDomainInfo],
    devices: &DeviceRegistry,
) -> Vec<StrategyCard> {
    domains
        .iter()
        .filter_map(|domain| {
            let area_entities = get_area_domain_entities(entities, area_id, &domain.id, devices);
            build_entities_domain_card(domain, &area_entities)
        })
        .map(StrategyCard::from)
        .collect()
}

/// Subview for one room. Always holds exactly one section, possibly empty.
#[must_use]
pub fn build_area_view(
    title: &str,
    area_id: &str,
    entities: &[&Entity],
    domains: &[EntityDomainInfo],
    devices: &DeviceRegistry,
) -> SectionsView {
    let cards = build_area_domain_cards(entities, area_id, domains, devices);
    SectionsView {
        view_type: ViewType::Sections,
        title: title.to_string(),
        path: area_id.to_string(),
        subview: Some(true),
        max_columns: 2,
        sections: vec![GridSection::new(cards, 2).with_columns(2)],
        ..SectionsView::default()
    }
}

/// One view per area id, in the given order.
#[must_use]
pub fn build_area_views(
    area_ids: &[String],
    area_names: &AreaNames<'_>,
    entities: &[&Entity],
    domains: &[EntityDomainInfo],
    devices: &DeviceRegistry,
) -> Vec<SectionsView> {
    area_ids
        .iter()
        .map(|area_id| {
            build_area_view(
                area_label(area_names, area_id),
                area_id,
                entities,
                domains,
                devices,
            )
        })
        .collect()
}
