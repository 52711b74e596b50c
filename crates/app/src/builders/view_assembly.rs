//! Sections and the home view.

use roomboard_domain::config::DashboardStrategyConfig;
use roomboard_domain::lovelace::{
    EntitiesCard, EntityRow, GridSection, HeadingCard, SectionsView, StrategyCard, ViewType,
};

/// Column span of every home-view section.
pub const DEFAULT_COLUMN_SPAN: u32 = 4;

#[must_use]
pub fn build_grid_section(cards: Vec<StrategyCard>, column_span: u32) -> GridSection {
    GridSection::new(cards, column_span)
}

/// `Favorites` heading plus one entities card, or `None` without favorites.
#[must_use]
pub fn build_favorites_section<S: AsRef<str>>(favorite_ids: &[S]) -> Option<GridSection> {
    if favorite_ids.is_empty() {
        return None;
    }
    let favorites = EntitiesCard {
        title: Some("Favorites".to_string()),
        entities: favorite_ids
            .iter()
            .map(|id| EntityRow::from(id.as_ref()))
            .collect(),
        show_header_toggle: Some(false),
        ..EntitiesCard::default()
    };
    Some(build_grid_section(
        vec![HeadingCard::title("Favorites").into(), favorites.into()],
        DEFAULT_COLUMN_SPAN,
    ))
}

/// The summary cards as a section, or `None` when only the heading is there.
#[must_use]
pub fn build_summary_section(summary_cards: Vec<StrategyCard>) -> Option<GridSection> {
    (summary_cards.len() > 1).then(|| build_grid_section(summary_cards, DEFAULT_COLUMN_SPAN))
}

#[must_use]
pub fn build_area_cards_grid_section(area_cards: Vec<StrategyCard>) -> GridSection {
    build_grid_section(area_cards, DEFAULT_COLUMN_SPAN)
}

/// Home view from the present sections, carrying the configured header and badges.
#[must_use]
pub fn build_home_view<I>(sections: I, config: &DashboardStrategyConfig) -> SectionsView
where
    I: IntoIterator<Item = Option<GridSection>>,
{
    SectionsView {
        view_type: ViewType::Sections,
        title: "Home".to_string(),
        path: "home".to_string(),
        max_columns: 4,
        sections: sections.into_iter().flatten().collect(),
        header: Some(config.header.clone().unwrap_or_default()),
        badges: Some(config.badges.clone().unwrap_or_default()),
        ..SectionsView::default()
    }
}
