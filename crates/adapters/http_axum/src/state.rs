//! Shared application state for axum handlers.

use std::sync::Arc;

use roomboard_app::registry::StrategyRegistry;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the registry itself does not need to
/// be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState {
    /// Strategies the host can run, by tag.
    pub registry: Arc<StrategyRegistry>,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl AppState {
    /// Create a new application state around a filled registry.
    #[must_use]
    pub fn new(registry: StrategyRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
