//! Area: a logical grouping (room, floor, zone) for devices and entities.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Area registry keyed by area id, in host order.
pub type AreaRegistry = IndexMap<String, Area>;

/// Reserved id the host uses for "not assigned to any room".
pub const DEFAULT_AREA_ID: &str = "default";

/// A named physical zone, as found in the host's area registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub area_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Area {
    #[must_use]
    pub fn new(area_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            area_id: area_id.into(),
            name: name.into(),
            icon: None,
        }
    }

    /// Whether this is the reserved "unassigned" area.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.area_id == DEFAULT_AREA_ID
    }

    /// Whether the name is usable as a room title (non-blank).
    #[must_use]
    pub fn has_display_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Label used for view titles and subheadings: the name, or the id when
    /// the name is empty.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.area_id
        } else {
            &self.name
        }
    }
}

/// Hosts send `"name": null` for unnamed areas.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
