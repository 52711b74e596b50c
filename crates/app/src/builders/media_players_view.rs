//! Media players view: players grouped under their room, then the unassigned ones.

use indexmap::IndexMap;
use roomboard_domain::device::DeviceRegistry;
use roomboard_domain::entity::Entity;
use roomboard_domain::lovelace::{
    GridSection, HeadingCard, MediaControlCard, SectionsView, StrategyCard, ViewType,
};

use super::area_cards::{AreaNames, area_label};
use super::entity_filters::get_entity_area_id;

/// Media player ids bucketed by resolved area.
///
/// Areas appear in first-seen order; players keep input order within a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaGrouping {
    pub media_by_area: IndexMap<String, Vec<String>>,
    pub unassigned_media: Vec<String>,
}

#[must_use]
pub fn group_media_players_by_area(
    media_entities: &[&Entity],
    devices: &DeviceRegistry,
) -> MediaGrouping {
    let mut grouping = MediaGrouping::default();
    for entity in media_entities {
        let entity_id = entity.entity_id.clone();
        match get_entity_area_id(entity, devices) {
            Some(area_id) => grouping
                .media_by_area
                .entry(area_id.to_string())
                .or_default()
                .push(entity_id),
            None => grouping.unassigned_media.push(entity_id),
        }
    }
    grouping
}

/// `Areas` heading, then per area with players: a subtitle and one control each.
#[must_use]
pub fn build_area_media_cards(
    area_ids: &[String],
    area_names: &AreaNames<'_>,
    media_by_area: &IndexMap<String, Vec<String>>,
) -> Vec<StrategyCard> {
    let mut cards = vec![StrategyCard::from(HeadingCard::title("Areas"))];
    for area_id in area_ids {
        let Some(players) = media_by_area.get(area_id).filter(|p| !p.is_empty()) else {
            continue;
        };
        cards.push(HeadingCard::subtitle(area_label(area_names, area_id)).into());
        cards.extend(
            players
                .iter()
                .map(|entity_id| StrategyCard::from(MediaControlCard::new(entity_id.as_str()))),
        );
    }
    cards
}

/// `Other media players` subtitle and one control per id; nothing when empty.
#[must_use]
pub fn build_unassigned_media_cards(entity_ids: &[String]) -> Vec<StrategyCard> {
    if entity_ids.is_empty() {
        return Vec::new();
    }
    std::iter::once(StrategyCard::from(HeadingCard::subtitle(
        "Other media players",
    )))
    .chain(
        entity_ids
            .iter()
            .map(|entity_id| StrategyCard::from(MediaControlCard::new(entity_id.as_str()))),
    )
    .collect()
}

#[must_use]
pub fn build_media_players_view(
    media_by_area: &IndexMap<String, Vec<String>>,
    unassigned_media: &[String],
    area_ids: &[String],
    area_names: &AreaNames<'_>,
) -> SectionsView {
    let mut cards = build_area_media_cards(area_ids, area_names, media_by_area);
    cards.extend(build_unassigned_media_cards(unassigned_media));
    SectionsView {
        view_type: ViewType::Sections,
        title: "Media players".to_string(),
        path: "media-players".to_string(),
        subview: Some(true),
        icon: Some("mdi:multimedia".to_string()),
        max_columns: 2,
        sections: vec![GridSection::new(cards, 4)],
        ..SectionsView::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomboard_domain::area::Area;
    use roomboard_domain::device::Device;
    use serde_json::json;

    use crate::builders::area_cards::build_area_names;

    fn strings(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| (*id).to_string()).collect()
    }

    #[test]
    fn should_group_players_by_resolved_area() {
        let entities = [
            Entity::new("media_player.kitchen_radio").in_area("kitchen"),
            Entity::new("media_player.tv").on_device("tv_box"),
            Entity::new("media_player.portable"),
            Entity::new("media_player.kitchen_speaker").in_area("kitchen"),
            Entity::new("media_player.ghost").on_device("unknown"),
        ];
        let refs: Vec<&Entity> = entities.iter().collect();
        let mut devices = DeviceRegistry::new();
        devices.insert("tv_box".to_string(), Device::new("tv_box").in_area("living_room"));

        let grouping = group_media_players_by_area(&refs, &devices);

        let areas: Vec<&str> = grouping.media_by_area.keys().map(String::as_str).collect();
        assert_eq!(areas, ["kitchen", "living_room"]);
        assert_eq!(
            grouping.media_by_area["kitchen"],
            ["media_player.kitchen_radio", "media_player.kitchen_speaker"]
        );
        assert_eq!(grouping.media_by_area["living_room"], ["media_player.tv"]);
        assert_eq!(
            grouping.unassigned_media,
            ["media_player.portable", "media_player.ghost"]
        );
    }

    #[test]
    fn should_return_empty_grouping_for_no_players() {
        let grouping = group_media_players_by_area(&[], &DeviceRegistry::new());
        assert_eq!(grouping, MediaGrouping::default());
    }

    #[test]
    fn should_emit_subheading_and_controls_per_area_with_players() {
        let areas = [Area::new("kitchen", "Kitchen"), Area::new("den", "Den")];
        let area_refs: Vec<&Area> = areas.iter().collect();
        let names = build_area_names(&area_refs);
        let mut media_by_area = IndexMap::new();
        media_by_area.insert("kitchen".to_string(), strings(&["media_player.radio"]));

        let cards = build_area_media_cards(
            &strings(&["den", "kitchen"]),
            &names,
            &media_by_area,
        );

        assert_eq!(
            serde_json::to_value(&cards).unwrap(),
            json!([
                { "type": "heading", "heading": "Areas", "heading_style": "title" },
                { "type": "heading", "heading": "Kitchen", "heading_style": "subtitle" },
                { "type": "media-control", "entity": "media_player.radio" }
            ])
        );
    }

    #[test]
    fn should_follow_area_order_when_grouping_order_differs() {
        let areas = [Area::new("kitchen", "Kitchen"), Area::new("den", "Den")];
        let area_refs: Vec<&Area> = areas.iter().collect();
        let names = build_area_names(&area_refs);
        let mut media_by_area = IndexMap::new();
        media_by_area.insert("kitchen".to_string(), strings(&["media_player.radio"]));
        media_by_area.insert(
            "den".to_string(),
            strings(&["media_player.tv", "media_player.soundbar"]),
        );

        let cards = build_area_media_cards(&strings(&["den", "kitchen"]), &names, &media_by_area);

        assert_eq!(
            serde_json::to_value(&cards).unwrap(),
            json!([
                { "type": "heading", "heading": "Areas", "heading_style": "title" },
                { "type": "heading", "heading": "Den", "heading_style": "subtitle" },
                { "type": "media-control", "entity": "media_player.tv" },
                { "type": "media-control", "entity": "media_player.soundbar" },
                { "type": "heading", "heading": "Kitchen", "heading_style": "subtitle" },
                { "type": "media-control", "entity": "media_player.radio" }
            ])
        );
    }

    #[test]
    fn should_skip_areas_not_in_area_order() {
        let mut media_by_area = IndexMap::new();
        media_by_area.insert("garage".to_string(), strings(&["media_player.garage"]));

        let cards = build_area_media_cards(&strings(&["kitchen"]), &AreaNames::new(), &media_by_area);

        assert_eq!(cards, vec![StrategyCard::from(HeadingCard::title("Areas"))]);
    }

    #[test]
    fn should_use_area_id_when_area_has_no_name() {
        let mut media_by_area = IndexMap::new();
        media_by_area.insert("loft".to_string(), strings(&["media_player.loft"]));

        let cards = build_area_media_cards(&strings(&["loft"]), &AreaNames::new(), &media_by_area);

        assert_eq!(cards[1], StrategyCard::from(HeadingCard::subtitle("loft")));
    }

    #[test]
    fn should_emit_nothing_for_no_unassigned_players() {
        assert!(build_unassigned_media_cards(&[]).is_empty());
    }

    #[test]
    fn should_emit_other_heading_before_unassigned_players() {
        let cards = build_unassigned_media_cards(&strings(&["media_player.a", "media_player.b"]));
        assert_eq!(
            cards,
            vec![
                StrategyCard::from(HeadingCard::subtitle("Other media players")),
                StrategyCard::from(MediaControlCard::new("media_player.a")),
                StrategyCard::from(MediaControlCard::new("media_player.b")),
            ]
        );
    }

    #[test]
    fn should_build_media_view_with_area_cards_before_unassigned() {
        let areas = [Area::new("kitchen", "Kitchen")];
        let area_refs: Vec<&Area> = areas.iter().collect();
        let names = build_area_names(&area_refs);
        let mut media_by_area = IndexMap::new();
        media_by_area.insert("kitchen".to_string(), strings(&["media_player.radio"]));

        let view = build_media_players_view(
            &media_by_area,
            &strings(&["media_player.portable"]),
            &strings(&["kitchen"]),
            &names,
        );

        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "type": "sections",
                "title": "Media players",
                "path": "media-players",
                "subview": true,
                "icon": "mdi:multimedia",
                "max_columns": 2,
                "sections": [{
                    "type": "grid",
                    "column_span": 4,
                    "cards": [
                        { "type": "heading", "heading": "Areas", "heading_style": "title" },
                        { "type": "heading", "heading": "Kitchen", "heading_style": "subtitle" },
                        { "type": "media-control", "entity": "media_player.radio" },
                        { "type": "heading", "heading": "Other media players", "heading_style": "subtitle" },
                        { "type": "media-control", "entity": "media_player.portable" }
                    ]
                }]
            })
        );
    }

    #[test]
    fn should_build_media_view_with_lone_heading_when_no_players() {
        let view = build_media_players_view(&IndexMap::new(), &[], &[], &AreaNames::new());
        assert_eq!(view.sections.len(), 1);
        assert_eq!(
            view.sections[0].cards,
            vec![StrategyCard::from(HeadingCard::title("Areas"))]
        );
    }
}
