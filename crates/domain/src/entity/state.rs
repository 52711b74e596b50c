//! Entity state: the host's current state record for an entity.
//!
//! Only the *keys* of the state map matter for dashboard generation; the
//! record is kept typed so malformed snapshots are caught at the boundary.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Current states keyed by entity id, in host order.
pub type StateRegistry = IndexMap<String, EntityState>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl EntityState {
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            ..Self::default()
        }
    }
}
