use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Collateral prices, one per simulated day
///
/// Index 0 holds the initial price. Later values carry no floor, so a path
/// may contain zero, negative or non-finite prices after large shocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricePath {
    prices: Vec<f64>,
}

impl PricePath {
    /// Wrap an existing price sequence
    pub fn new(prices: Vec<f64>) -> Self {
        Self { prices }
    }

    /// Number of prices (days + 1 for a generated path)
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.prices.iter()
    }

    pub fn initial_price(&self) -> Option<f64> {
        self.prices.first().copied()
    }

    pub fn last_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    /// Lowest finite price on the path
    pub fn min_price(&self) -> Option<f64> {
        self.prices
            .iter()
            .copied()
            .filter(|p| p.is_finite())
            .reduce(f64::min)
    }

    /// Highest finite price on the path
    pub fn max_price(&self) -> Option<f64> {
        self.prices
            .iter()
            .copied()
            .filter(|p| p.is_finite())
            .reduce(f64::max)
    }

    /// First day whose price is non-positive or non-finite
    pub fn first_degenerate_day(&self) -> Option<usize> {
        self.prices
            .iter()
            .position(|&p| p <= 0.0 || !p.is_finite())
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.first_degenerate_day().is_some()
    }

    /// Simple day-over-day returns: `p[i] / p[i-1] - 1`
    ///
    /// Days following a zero price produce non-finite returns and are
    /// skipped.
    pub fn daily_returns(&self) -> Vec<f64> {
        self.prices
            .windows(2)
            .map(|w| w[1] / w[0] - 1.0)
            .filter(|r| r.is_finite())
            .collect()
    }
}

impl Index<usize> for PricePath {
    type Output = f64;

    #[inline]
    fn index(&self, day: usize) -> &f64 {
        &self.prices[day]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_path_accessors() {
        let path = PricePath::new(vec![100.0, 110.0, 99.0]);

        assert_eq!(path.len(), 3);
        assert_eq!(path.initial_price(), Some(100.0));
        assert_eq!(path.last_price(), Some(99.0));
        assert_eq!(path.min_price(), Some(99.0));
        assert_eq!(path.max_price(), Some(110.0));
        assert_eq!(path[1], 110.0);
        assert!(!path.is_degenerate());
    }

    #[test]
    fn test_daily_returns() {
        let path = PricePath::new(vec![100.0, 110.0, 99.0]);
        let returns: Vec<f64> = path.daily_returns();

        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.10).abs() < 1e-12);
        assert!((returns[1] + 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_detection() {
        let path = PricePath::new(vec![100.0, 5.0, -2.0, 1.0]);
        assert_eq!(path.first_degenerate_day(), Some(2));

        let path = PricePath::new(vec![100.0, 0.0, 0.0]);
        assert_eq!(path.first_degenerate_day(), Some(1));
        // returns after a zero price are dropped
        assert_eq!(path.daily_returns(), vec![-1.0]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let path = PricePath::new(vec![1.0, 2.5]);
        let json: String = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "[1.0,2.5]");
    }
}
