//! Grid sections: the middle level of the dashboard tree.

use serde::{Deserialize, Serialize};

use super::card::StrategyCard;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    #[default]
    Grid,
}

/// An ordered grid of cards spanning `column_span` view columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub column_span: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub cards: Vec<StrategyCard>,
}

impl GridSection {
    #[must_use]
    pub fn new(cards: Vec<StrategyCard>, column_span: u32) -> Self {
        Self {
            section_type: SectionType::Grid,
            column_span,
            columns: None,
            title: None,
            cards,
        }
    }

    #[must_use]
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }
}
