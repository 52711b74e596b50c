//! Dashboard strategy port: a named generator the host invokes by tag.

use roomboard_domain::config::DashboardStrategyConfig;
use roomboard_domain::error::RoomboardError;
use roomboard_domain::hass::HassSnapshot;
use roomboard_domain::lovelace::LovelaceConfig;
use serde_json::Value;

/// A dashboard generator the host can look up by tag.
pub trait DashboardStrategy: Send + Sync {
    /// Tag the strategy is registered under.
    fn name(&self) -> &'static str;

    /// Other names the host may address the strategy by.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Generate the view tree from already-validated input.
    fn generate(&self, config: &DashboardStrategyConfig, hass: &HassSnapshot) -> LovelaceConfig;

    /// Validate raw host JSON, then generate.
    ///
    /// # Errors
    ///
    /// Returns [`RoomboardError::Input`] when `config` or `hass` does not have
    /// the expected shape. Missing data is not an error.
    fn generate_json(&self, config: &Value, hass: &Value) -> Result<LovelaceConfig, RoomboardError> {
        let config = DashboardStrategyConfig::from_value(config)?;
        let hass = HassSnapshot::from_value(hass)?;
        Ok(self.generate(&config, &hass))
    }
}
