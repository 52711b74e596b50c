//! Registry snapshot: everything the host knows, frozen for one generation run.
//!
//! The host hands the snapshot over as loosely-typed JSON. [`HassSnapshot::from_value`]
//! is the single place where its shape is checked; past that point the
//! pipeline works on typed, read-only data.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::area::{Area, AreaRegistry};
use crate::device::{Device, DeviceRegistry};
use crate::entity::state::{EntityState, StateRegistry};
use crate::entity::{Entity, EntityRegistry};
use crate::error::InputError;

/// Immutable snapshot of the host registries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HassSnapshot {
    pub entities: EntityRegistry,
    pub devices: DeviceRegistry,
    pub areas: AreaRegistry,
    pub states: StateRegistry,
    /// Path the dashboard is mounted under, without leading slash.
    pub panel_url: Option<String>,
}

impl HassSnapshot {
    /// Parse a host snapshot.
    ///
    /// `null` (or a missing registry) is an empty snapshot (or registry).
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotAnObject`] when the snapshot or one of its
    /// registries is not a JSON object, [`InputError::NotAString`] when
    /// `panelUrl` is not a string, and [`InputError::MalformedRecord`] when a
    /// registry entry does not have the expected record shape.
    pub fn from_value(value: &Value) -> Result<Self, InputError> {
        let root = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(root) => root,
            _ => return Err(InputError::NotAnObject { field: "hass" }),
        };

        let panel_url = match root.get("panelUrl") {
            None | Some(Value::Null) => None,
            Some(Value::String(path)) => Some(path.clone()),
            Some(_) => return Err(InputError::NotAString { field: "panelUrl" }),
        };

        Ok(Self {
            entities: registry(root, "entities")?,
            devices: registry(root, "devices")?,
            areas: registry(root, "areas")?,
            states: registry(root, "states")?,
            panel_url,
        })
    }

    #[must_use]
    pub fn with_area(mut self, area: Area) -> Self {
        self.areas.insert(area.area_id.clone(), area);
        self
    }

    #[must_use]
    pub fn with_device(mut self, device: Device) -> Self {
        self.devices.insert(device.id.clone(), device);
        self
    }

    /// Register an entity along with an `on` state for it.
    #[must_use]
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.states
            .insert(entity.entity_id.clone(), EntityState::new("on"));
        self.entities.insert(entity.entity_id.clone(), entity);
        self
    }

    /// Register a state with no matching registry entry.
    #[must_use]
    pub fn with_state(mut self, entity_id: impl Into<String>, state: EntityState) -> Self {
        self.states.insert(entity_id.into(), state);
        self
    }

    #[must_use]
    pub fn with_panel_url(mut self, panel_url: impl Into<String>) -> Self {
        self.panel_url = Some(panel_url.into());
        self
    }

    /// Whether the host currently has a state for `entity_id`.
    #[must_use]
    pub fn has_state(&self, entity_id: &str) -> bool {
        self.states.contains_key(entity_id)
    }

    /// Every entity id the host has a state for, in host order.
    #[must_use]
    pub fn known_entity_ids(&self) -> Vec<&str> {
        self.states.keys().map(String::as_str).collect()
    }
}

fn registry<T: DeserializeOwned>(
    root: &Map<String, Value>,
    field: &'static str,
) -> Result<IndexMap<String, T>, InputError> {
    let entries = match root.get(field) {
        None | Some(Value::Null) => return Ok(IndexMap::new()),
        Some(Value::Object(entries)) => entries,
        Some(_) => return Err(InputError::NotAnObject { field }),
    };

    entries
        .iter()
        .map(|(key, entry)| {
            T::deserialize(entry)
                .map(|record| (key.clone(), record))
                .map_err(|source| InputError::MalformedRecord {
                    field,
                    key: key.clone(),
                    source,
                })
        })
        .collect()
}
