//! Lovelace dashboard configuration: the output document.
//!
//! The tree is three levels deep: a [`LovelaceConfig`] holds views, a view
//! holds grid sections, a section holds cards. Field names and tag values
//! follow the host's wire format exactly; unset optional fields are omitted.

pub mod action;
pub mod card;
pub mod section;
pub mod view;

pub use action::{ActionConfig, ActionKind, OneOrMany, ServiceTarget};
pub use card::{
    AreaCard, AreaControl, CardFeature, DisplayType, EntitiesCard, EntityRow, EntityRowConfig,
    FeaturesPosition, GridOptions, HeadingCard, HeadingStyle, HomeSummaryCard, LovelaceCard,
    MediaControlCard, StrategyCard, SummaryKind,
};
pub use section::{GridSection, SectionType};
pub use view::{LovelaceConfig, SectionsView, ViewType};
