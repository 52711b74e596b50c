//! Entity domains shown as groups on per-room views.

use serde::{Deserialize, Serialize};

/// A domain eligible for per-room grouping, with its display label and icon.
///
/// Lists of these are ordered: list order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDomainInfo {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl EntityDomainInfo {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Domains grouped on room views, in display order.
#[must_use]
pub fn default_entity_domains() -> Vec<EntityDomainInfo> {
    [
        ("light", "Lights", "mdi:lightbulb"),
        ("switch", "Switches", "mdi:toggle-switch"),
        ("fan", "Fans", "mdi:fan"),
        ("cover", "Covers", "mdi:window-shutter"),
        ("camera", "Security", "mdi:camera"),
    ]
    .into_iter()
    .map(|(id, name, icon)| EntityDomainInfo::new(id, name, icon))
    .collect()
}
