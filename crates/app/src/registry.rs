//! Strategy registry: the lookup table the host queries by tag.

use indexmap::IndexMap;
use roomboard_domain::error::{RoomboardError, UnknownStrategyError};
use roomboard_domain::lovelace::LovelaceConfig;
use serde_json::Value;

use crate::ports::DashboardStrategy;
use crate::strategies::RoomsSectionsStrategy;

/// Registered strategies, in registration order.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: IndexMap<&'static str, Box<dyn DashboardStrategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every strategy this crate ships.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(RoomsSectionsStrategy);
        registry
    }

    /// Register `strategy` under its tag.
    ///
    /// Returns `false`, leaving the existing entry in place, when the tag is
    /// already taken.
    pub fn register<S>(&mut self, strategy: S) -> bool
    where
        S: DashboardStrategy + 'static,
    {
        let name = strategy.name();
        if self.strategies.contains_key(name) {
            tracing::warn!(strategy = name, "strategy already registered");
            return false;
        }
        tracing::debug!(strategy = name, "registering strategy");
        self.strategies.insert(name, Box::new(strategy));
        true
    }

    /// Look up a strategy by tag or alias.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn DashboardStrategy> {
        self.strategies
            .get(name)
            .or_else(|| {
                self.strategies
                    .values()
                    .find(|strategy| strategy.aliases().contains(&name))
            })
            .map(|strategy| &**strategy)
    }

    /// Registered tags, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.keys().copied().collect()
    }

    /// Run the strategy registered as `name` on raw host JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RoomboardError::UnknownStrategy`] when nothing answers to
    /// `name`, or [`RoomboardError::Input`] when the input is malformed.
    pub fn generate(
        &self,
        name: &str,
        config: &Value,
        hass: &Value,
    ) -> Result<LovelaceConfig, RoomboardError> {
        let strategy = self.get(name).ok_or_else(|| UnknownStrategyError {
            name: name.to_string(),
        })?;
        strategy.generate_json(config, hass)
    }
}
