//! Tap / hold actions attached to cards.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What happens when a card is interacted with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    pub action: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ServiceTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ActionConfig {
    /// Navigate to a dashboard path.
    #[must_use]
    pub fn navigate(path: impl Into<String>) -> Self {
        Self {
            action: ActionKind::Navigate,
            navigation_path: Some(path.into()),
            service: None,
            service_data: None,
            target: None,
            url: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Navigate,
    CallService,
    Toggle,
    MoreInfo,
    Url,
}

/// Service-call target; each selector takes a single id or a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<OneOrMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<OneOrMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<OneOrMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_id: Option<OneOrMany>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_navigate_action_without_unset_fields() {
        let action = ActionConfig::navigate("/light?historyBack=1");
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "action": "navigate", "navigation_path": "/light?historyBack=1" })
        );
    }

    #[test]
    fn should_deserialize_call_service_with_mixed_targets() {
        let action: ActionConfig = serde_json::from_value(json!({
            "action": "call-service",
            "service": "light.turn_on",
            "service_data": { "brightness": 128 },
            "target": { "entity_id": "light.a", "area_id": ["kitchen", "hall"] }
        }))
        .unwrap();

        assert_eq!(action.action, ActionKind::CallService);
        let target = action.target.unwrap();
        assert_eq!(target.entity_id, Some(OneOrMany::One("light.a".to_string())));
        assert_eq!(
            target.area_id,
            Some(OneOrMany::Many(vec![
                "kitchen".to_string(),
                "hall".to_string()
            ]))
        );
        assert!(target.device_id.is_none());
    }

    #[test]
    fn should_use_kebab_case_action_tags() {
        assert_eq!(
            serde_json::to_value(ActionKind::MoreInfo).unwrap(),
            json!("more-info")
        );
    }
}
