//! Cards: the leaves of the dashboard tree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::action::ActionConfig;

/// Every card the generator emits. The set is closed; host-defined card
/// types only appear at the deserialization boundary via [`LovelaceCard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StrategyCard {
    Heading(HeadingCard),
    Area(AreaCard),
    Entities(EntitiesCard),
    MediaControl(MediaControlCard),
    HomeSummary(HomeSummaryCard),
}

impl StrategyCard {
    /// The area a card points at, for cards that have one.
    #[must_use]
    pub fn area_id(&self) -> Option<&str> {
        match self {
            Self::Area(card) => Some(card.area.as_str()),
            _ => None,
        }
    }
}

impl From<HeadingCard> for StrategyCard {
    fn from(card: HeadingCard) -> Self {
        Self::Heading(card)
    }
}

impl From<AreaCard> for StrategyCard {
    fn from(card: AreaCard) -> Self {
        Self::Area(card)
    }
}

impl From<EntitiesCard> for StrategyCard {
    fn from(card: EntitiesCard) -> Self {
        Self::Entities(card)
    }
}

impl From<MediaControlCard> for StrategyCard {
    fn from(card: MediaControlCard) -> Self {
        Self::MediaControl(card)
    }
}

impl From<HomeSummaryCard> for StrategyCard {
    fn from(card: HomeSummaryCard) -> Self {
        Self::HomeSummary(card)
    }
}

/// Any card found in a dashboard: one of ours, or an opaque host card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LovelaceCard {
    Strategy(Box<StrategyCard>),
    Custom(Value),
}

impl LovelaceCard {
    #[must_use]
    pub fn as_strategy(&self) -> Option<&StrategyCard> {
        match self {
            Self::Strategy(card) => Some(&**card),
            Self::Custom(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    Title,
    Subtitle,
}

/// Section title or subtitle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCard {
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_style: Option<HeadingStyle>,
}

impl HeadingCard {
    #[must_use]
    pub fn title(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            heading_style: Some(HeadingStyle::Title),
        }
    }

    #[must_use]
    pub fn subtitle(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            heading_style: Some(HeadingStyle::Subtitle),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeaturesPosition {
    Bottom,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    Picture,
    Compact,
    Icon,
    Camera,
}

/// Quick controls rendered on an area card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AreaControl {
    Light,
    Switch,
    Fan,
    CoverShade,
    CoverBlind,
    CoverGarage,
    CoverDoor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CardFeature {
    AreaControls { controls: Vec<AreaControl> },
}

/// A room tile that navigates to the room's view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCard {
    pub title: String,
    pub area: String,
    pub navigation_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features_position: Option<FeaturesPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<DisplayType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_options: Option<GridOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<CardFeature>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_entities: Option<Vec<String>>,
}

/// A row of an entities card: a bare id, or an id with display overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRow {
    Id(String),
    Config(EntityRowConfig),
}

impl EntityRow {
    #[must_use]
    pub fn entity_id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Config(config) => &config.entity,
        }
    }
}

impl From<&str> for EntityRow {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for EntityRow {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRowConfig {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_icon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_state: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_color: Option<bool>,
}

/// A list of entity rows under an optional title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitiesCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub entities: Vec<EntityRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_header_toggle: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_color: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_empty: Option<bool>,
}

impl EntitiesCard {
    /// Entity ids of all rows, in row order.
    #[must_use]
    pub fn entity_ids(&self) -> Vec<&str> {
        self.entities.iter().map(EntityRow::entity_id).collect()
    }
}

/// Player controls for a single media player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaControlCard {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl MediaControlCard {
    #[must_use]
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            name: None,
            theme: None,
        }
    }
}

/// Dashboard-wide summary kinds; hosts may define more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    Light,
    Climate,
    Security,
    MediaPlayers,
    #[serde(untagged)]
    Other(String),
}

/// Domain-wide status tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSummaryCard {
    pub summary: SummaryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_action: Option<ActionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_options: Option<GridOptions>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_tag_cards_with_kebab_case_type() {
        let card = StrategyCard::from(MediaControlCard::new("media_player.tv"));
        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            json!({ "type": "media-control", "entity": "media_player.tv" })
        );
    }

    #[test]
    fn should_serialize_heading_style() {
        let card = StrategyCard::from(HeadingCard::subtitle("Kitchen"));
        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            json!({ "type": "heading", "heading": "Kitchen", "heading_style": "subtitle" })
        );
    }

    #[test]
    fn should_serialize_area_controls_feature() {
        let feature = CardFeature::AreaControls {
            controls: vec![AreaControl::Light, AreaControl::CoverGarage],
        };
        assert_eq!(
            serde_json::to_value(&feature).unwrap(),
            json!({ "type": "area-controls", "controls": ["light", "cover-garage"] })
        );
    }

    #[test]
    fn should_read_entity_ids_from_mixed_rows() {
        let card: EntitiesCard = serde_json::from_value(json!({
            "entities": ["light.a", { "entity": "switch.b", "name": "Heater" }]
        }))
        .unwrap();
        assert_eq!(card.entity_ids(), ["light.a", "switch.b"]);
    }

    #[test]
    fn should_keep_unknown_summary_kind_verbatim() {
        let card: HomeSummaryCard =
            serde_json::from_value(json!({ "summary": "energy" })).unwrap();
        assert_eq!(card.summary, SummaryKind::Other("energy".to_string()));
        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            json!({ "summary": "energy" })
        );
    }

    #[test]
    fn should_serialize_known_summary_kind_in_snake_case() {
        assert_eq!(
            serde_json::to_value(SummaryKind::MediaPlayers).unwrap(),
            json!("media_players")
        );
    }

    #[test]
    fn should_fall_back_to_custom_card_for_unknown_type() {
        let cards: Vec<LovelaceCard> = serde_json::from_value(json!([
            { "type": "heading", "heading": "Areas", "heading_style": "title" },
            { "type": "tile", "entity": "light.a", "vertical": true }
        ]))
        .unwrap();

        assert_eq!(
            cards[0].as_strategy(),
            Some(&StrategyCard::Heading(HeadingCard::title("Areas")))
        );
        assert!(cards[1].as_strategy().is_none());
        assert_eq!(
            serde_json::to_value(&cards[1]).unwrap(),
            json!({ "type": "tile", "entity": "light.a", "vertical": true })
        );
    }

    #[test]
    fn should_expose_area_id_only_for_area_cards() {
        let area = StrategyCard::Area(AreaCard {
            title: "Kitchen".to_string(),
            area: "kitchen".to_string(),
            navigation_path: "/kitchen".to_string(),
            features_position: None,
            display_type: None,
            grid_options: None,
            features: None,
            exclude_entities: None,
        });
        assert_eq!(area.area_id(), Some("kitchen"));
        assert_eq!(StrategyCard::from(HeadingCard::title("Areas")).area_id(), None);
    }
}
