//! Views: full dashboard pages, and the top-level document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::section::GridSection;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Sections,
}

/// A sections-layout view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionsView {
    #[serde(rename = "type")]
    pub view_type: ViewType,
    pub title: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subview: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub max_columns: u32,
    #[serde(default)]
    pub sections: Vec<GridSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// The generated dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LovelaceConfig {
    pub views: Vec<SectionsView>,
}

impl LovelaceConfig {
    #[must_use]
    pub fn view(&self, path: &str) -> Option<&SectionsView> {
        self.views.iter().find(|view| view.path == path)
    }
}
