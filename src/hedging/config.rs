use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Simulation configuration
///
/// Defaults reproduce the reference run: one year of daily prices starting
/// at 2000, 1% daily volatility, rebalancing every 30 days, for deltas
/// 0.5, 1.0 and 1.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulated calendar days (the path holds `days + 1` prices)
    pub days: i64,

    /// Collateral price on day 0
    pub initial_price: f64,

    /// Standard deviation of the daily relative shock
    pub volatility: f64,

    /// Days between hedge rebalances
    pub adjustment_interval: i64,

    /// Declared maximum loss.
    ///
    /// Accepted and carried through configuration but never read by the
    /// simulation: no risk limit is enforced.
    pub max_loss_limit: f64,

    /// Target hedge magnitudes to sweep, in run order
    pub delta_values: Vec<f64>,

    /// Seed for the random source (`None` = OS entropy)
    pub seed: Option<u64>,

    /// First date on the chart axis
    pub start_date: NaiveDate,

    /// Reuse one price path for every delta instead of drawing a new one
    pub share_price_path: bool,

    /// SVG chart output
    pub chart_path: String,

    /// Optional JSON export of all series
    pub json_path: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 365,
            initial_price: 2000.0,
            volatility: 0.01,
            adjustment_interval: 30,
            max_loss_limit: 10_000.0,
            delta_values: vec![0.5, 1.0, 1.5],
            seed: None,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            share_price_path: false,
            chart_path: "hedge_simulation.svg".to_string(),
            json_path: None,
        }
    }
}

impl SimulationConfig {
    /// Create a simple configuration
    pub fn simple(adjustment_interval: i64, delta_values: Vec<f64>) -> Self {
        Self {
            adjustment_interval,
            delta_values,
            ..Default::default()
        }
    }

    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let json: String = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.adjustment_interval <= 0 {
            return Err(crate::Error::Config(format!(
                "Adjustment interval must be positive, got {}",
                self.adjustment_interval
            )));
        }

        if self.days < 0 {
            return Err(crate::Error::Config(format!(
                "Days must be non-negative, got {}",
                self.days
            )));
        }

        if !self.initial_price.is_finite() || self.initial_price <= 0.0 {
            return Err(crate::Error::Config(format!(
                "Initial price must be positive, got {}",
                self.initial_price
            )));
        }

        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(crate::Error::Config(format!(
                "Volatility must be non-negative, got {}",
                self.volatility
            )));
        }

        if self.delta_values.is_empty() {
            return Err(crate::Error::Config(
                "At least one delta value is required".to_string(),
            ));
        }

        if let Some(delta) = self.delta_values.iter().find(|d| !d.is_finite()) {
            return Err(crate::Error::Config(format!(
                "Delta values must be finite, got {}",
                delta
            )));
        }

        if self.chart_path.trim().is_empty() {
            return Err(crate::Error::Config(
                "Chart path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Simulated days as an index count
    pub fn simulated_days(&self) -> crate::Result<usize> {
        usize::try_from(self.days).map_err(|_| {
            crate::Error::Config(format!("Days must be non-negative, got {}", self.days))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.delta_values, vec![0.5, 1.0, 1.5]);
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn test_non_positive_interval_rejected() {
        for interval in [0, -1, -30] {
            let config = SimulationConfig::simple(interval, vec![1.0]);
            assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
        }
    }

    #[test]
    fn test_negative_days_rejected() {
        let config = SimulationConfig {
            days: -1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
        assert!(config.simulated_days().is_err());
    }

    #[test]
    fn test_zero_days_allowed() {
        let config = SimulationConfig {
            days: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.simulated_days().unwrap(), 0);
    }

    #[test]
    fn test_bad_market_parameters_rejected() {
        let bad_price = SimulationConfig {
            initial_price: 0.0,
            ..Default::default()
        };
        assert!(bad_price.validate().is_err());

        let bad_vol = SimulationConfig {
            volatility: -0.01,
            ..Default::default()
        };
        assert!(bad_vol.validate().is_err());

        let no_deltas = SimulationConfig::simple(30, vec![]);
        assert!(no_deltas.validate().is_err());

        let nan_delta = SimulationConfig::simple(30, vec![1.0, f64::NAN]);
        assert!(nan_delta.validate().is_err());
    }

    #[test]
    fn test_max_loss_limit_is_not_validated() {
        let config = SimulationConfig {
            max_loss_limit: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_partial_override() {
        let config = SimulationConfig::from_json_str(
            r#"{ "days": 10, "delta_values": [2.0], "seed": 5, "start_date": "2024-03-01" }"#,
        )
        .unwrap();

        assert_eq!(config.days, 10);
        assert_eq!(config.delta_values, vec![2.0]);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        // untouched fields keep defaults
        assert_eq!(config.adjustment_interval, 30);
        assert_eq!(config.initial_price, 2000.0);
    }

    #[test]
    fn test_json_invalid_interval_rejected() {
        let result = SimulationConfig::from_json_str(r#"{ "adjustment_interval": 0 }"#);
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_json_malformed() {
        let result = SimulationConfig::from_json_str("{ days: ");
        assert!(matches!(result, Err(crate::Error::Serialization(_))));
    }
}
