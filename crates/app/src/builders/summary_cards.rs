//! Dashboard-wide summary tiles, driven by which domains exist at all.

use roomboard_domain::lovelace::{
    ActionConfig, GridOptions, HeadingCard, HomeSummaryCard, StrategyCard, SummaryKind,
};

use super::entity_filters::has_domain;

#[must_use]
pub fn build_summary_card(summary: SummaryKind, navigation_path: &str) -> HomeSummaryCard {
    HomeSummaryCard {
        summary,
        tap_action: Some(ActionConfig::navigate(navigation_path)),
        grid_options: Some(GridOptions {
            columns: Some(12),
            rows: None,
        }),
    }
}

/// `Summaries` heading followed by at most one card per summary kind.
///
/// Presence is checked against every known entity id, exclusions included.
#[must_use]
pub fn build_summary_cards<S: AsRef<str>>(all_entity_ids: &[S]) -> Vec<StrategyCard> {
    let present = |domain: &str| has_domain(all_entity_ids, domain);

    let mut cards = vec![StrategyCard::from(HeadingCard::title("Summaries"))];
    if present("light") {
        cards.push(build_summary_card(SummaryKind::Light, "/light?historyBack=1").into());
    }
    if present("climate") {
        cards.push(build_summary_card(SummaryKind::Climate, "/climate?historyBack=1").into());
    }
    if present("alarm_control_panel") || present("binary_sensor") {
        cards.push(build_summary_card(SummaryKind::Security, "/security?historyBack=1").into());
    }
    if present("media_player") {
        cards.push(build_summary_card(SummaryKind::MediaPlayers, "/media-players").into());
    }
    cards
}
