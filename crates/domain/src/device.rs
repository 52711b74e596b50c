//! Device: a physical or virtual thing that exposes one or more entities.
//!
//! Devices are only ever consulted as a lookup table when an entity has no
//! area of its own.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Device registry keyed by device id, in host order.
pub type DeviceRegistry = IndexMap<String, Device>;

/// A device as found in the host's device registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_by: Option<String>,
}

impl Device {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn in_area(mut self, area_id: impl Into<String>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    /// The assigned area, treating an empty id as unassigned.
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        self.area_id.as_deref().filter(|id| !id.is_empty())
    }
}
