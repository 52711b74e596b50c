//! Strategy configuration: the options a user writes in their dashboard.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::InputError;

/// Configuration handed to a dashboard strategy.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStrategyConfig {
    /// Strategy type the dashboard was configured with (e.g. `custom:rooms-sections`).
    #[serde(rename = "type", default)]
    pub strategy_type: String,
    /// Entity ids to leave out of room and media views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_entities: Option<Vec<String>>,
    /// Entity ids pinned to the top of the home view, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_entities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<Value>>,
}

impl DashboardStrategyConfig {
    /// Parse a strategy config; `null` is the empty config.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotAnObject`] when the value is neither `null`
    /// nor an object, and [`InputError::MalformedConfig`] when a known field
    /// has the wrong type.
    pub fn from_value(value: &Value) -> Result<Self, InputError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => Self::deserialize(value)
                .map_err(|source| InputError::MalformedConfig { source }),
            _ => Err(InputError::NotAnObject { field: "config" }),
        }
    }

    #[must_use]
    pub fn excluded_entities(&self) -> &[String] {
        self.excluded_entities.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn favorite_entities(&self) -> &[String] {
        self.favorite_entities.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_excluded<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_entities = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_favorites<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.favorite_entities = Some(ids.into_iter().map(Into::into).collect());
        self
    }
}
