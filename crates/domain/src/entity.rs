//! Entity: an individually controllable or observable unit.
//!
//! Entity ids have the form `<domain>.<object_id>`. Domain membership is
//! decided by that prefix alone; there is no separate domain field.

pub mod state;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Entity registry keyed by entity id, in host order.
pub type EntityRegistry = IndexMap<String, Entity>;

/// Whether `entity_id` belongs to `domain` (has the `"<domain>."` prefix).
#[must_use]
pub fn in_domain(entity_id: &str, domain: &str) -> bool {
    entity_id
        .strip_prefix(domain)
        .is_some_and(|rest| rest.starts_with('.'))
}

/// An entity as found in the host's entity registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub entity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_by: Option<String>,
}

impl Entity {
    #[must_use]
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn in_area(mut self, area_id: impl Into<String>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    #[must_use]
    pub fn on_device(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    #[must_use]
    pub fn in_domain(&self, domain: &str) -> bool {
        in_domain(&self.entity_id, domain)
    }

    /// Own area assignment, treating an empty id as unassigned.
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        self.area_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Own device reference, treating an empty id as absent.
    #[must_use]
    pub fn device(&self) -> Option<&str> {
        self.device_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Name used for ordering: the friendly name, or the id when unnamed.
    #[must_use]
    pub fn sort_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.entity_id,
        }
    }
}
