use crate::market_data::PricePath;
use log::{debug, warn};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Random-walk generator for collateral prices
///
/// Each day multiplies the previous price by `1 + shock`, with
/// `shock ~ Normal(0, volatility)` drawn fresh per step.
///
/// # Price Path Shape
///
/// ```text
/// day 0: initial_price
/// day i: price[i-1] * (1 + N(0, volatility))
/// ```
///
/// No clamping is applied. A shock below -1 flips the sign of the price and
/// every later step compounds from there.
#[derive(Debug, Clone)]
pub struct PriceSeriesGenerator {
    initial_price: f64,
    volatility: f64,
    shock: Normal<f64>,
}

impl PriceSeriesGenerator {
    /// Create a new generator
    ///
    /// Fails when `initial_price` is not positive or `volatility` is
    /// negative, or either is not finite.
    pub fn new(initial_price: f64, volatility: f64) -> crate::Result<Self> {
        if !initial_price.is_finite() || initial_price <= 0.0 {
            return Err(crate::Error::Config(format!(
                "Initial price must be positive, got {}",
                initial_price
            )));
        }

        if !volatility.is_finite() || volatility < 0.0 {
            return Err(crate::Error::Config(format!(
                "Volatility must be non-negative, got {}",
                volatility
            )));
        }

        let shock = Normal::new(0.0, volatility).map_err(|e| {
            crate::Error::Config(format!("Invalid volatility {}: {}", volatility, e))
        })?;

        Ok(Self {
            initial_price,
            volatility,
            shock,
        })
    }

    /// Generate a path of `days + 1` prices from the given random source
    ///
    /// `days == 0` yields the single-element path holding the initial price.
    pub fn generate<R: Rng + ?Sized>(&self, days: usize, rng: &mut R) -> PricePath {
        let mut prices: Vec<f64> = Vec::with_capacity(days + 1);
        prices.push(self.initial_price);

        let mut price: f64 = self.initial_price;
        for _ in 0..days {
            let price_change: f64 = self.shock.sample(rng);
            price *= 1.0 + price_change;
            prices.push(price);
        }

        let path = PricePath::new(prices);

        // Reported only; the values stay as drawn
        if let Some(day) = path.first_degenerate_day() {
            warn!(
                "Price path degenerated on day {}: price={}",
                day, path[day]
            );
        }

        debug!(
            "Generated {} prices (initial={:.2}, final={:.2}, volatility={})",
            path.len(),
            self.initial_price,
            path.last_price().unwrap_or(self.initial_price),
            self.volatility
        );

        path
    }
}

/// Generate one price path in a single call
pub fn generate_price_path<R: Rng + ?Sized>(
    days: usize,
    initial_price: f64,
    volatility: f64,
    rng: &mut R,
) -> crate::Result<PricePath> {
    Ok(PriceSeriesGenerator::new(initial_price, volatility)?.generate(days, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_path_length_and_start() {
        let mut rng = StdRng::seed_from_u64(1);
        let path: PricePath = generate_price_path(365, 2000.0, 0.01, &mut rng).unwrap();

        assert_eq!(path.len(), 366);
        assert_eq!(path[0], 2000.0);
    }

    #[test]
    fn test_zero_days_single_price() {
        let mut rng = StdRng::seed_from_u64(1);
        let path: PricePath = generate_price_path(0, 42.0, 0.3, &mut rng).unwrap();

        assert_eq!(path.as_slice(), &[42.0]);
    }

    #[test]
    fn test_zero_volatility_is_flat() {
        let mut rng = StdRng::seed_from_u64(9);
        let path: PricePath = generate_price_path(2, 100.0, 0.0, &mut rng).unwrap();

        assert_eq!(path.as_slice(), &[100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_same_seed_same_path() {
        let generator = PriceSeriesGenerator::new(2000.0, 0.01).unwrap();

        let a: PricePath = generator.generate(50, &mut StdRng::seed_from_u64(42));
        let b: PricePath = generator.generate(50, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_consecutive_draws_differ() {
        let generator = PriceSeriesGenerator::new(2000.0, 0.01).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let a: PricePath = generator.generate(50, &mut rng);
        let b: PricePath = generator.generate(50, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let result = PriceSeriesGenerator::new(100.0, -0.1);
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_generate_price_path_rejects_bad_inputs() {
        let mut rng = StdRng::seed_from_u64(1);

        for (initial_price, volatility) in [
            (100.0, -0.5),
            (100.0, f64::NAN),
            (100.0, f64::INFINITY),
            (-100.0, 0.01),
            (0.0, 0.01),
            (f64::NAN, 0.01),
        ] {
            let result = generate_price_path(10, initial_price, volatility, &mut rng);
            assert!(
                matches!(result, Err(crate::Error::Config(_))),
                "expected rejection for price={} volatility={}",
                initial_price,
                volatility
            );
        }
    }

    #[test]
    fn test_huge_volatility_not_clamped() {
        // With sigma = 5 a shock below -1 is all but certain within 100 days
        let mut rng = StdRng::seed_from_u64(3);
        let path: PricePath = generate_price_path(100, 100.0, 5.0, &mut rng).unwrap();

        assert_eq!(path.len(), 101);
        assert!(path.is_degenerate());
    }
}
