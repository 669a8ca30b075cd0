use crate::hedging::{HedgeSeries, HedgeSimulator, SimulationConfig};
use crate::market_data::{PricePath, PriceSeriesGenerator};
use crate::utils::SimulationSummary;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Outcome of one delta run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Target hedge magnitude for this run
    pub delta: f64,

    /// Days between rebalances used for this run
    pub adjustment_interval: usize,

    pub prices: PricePath,

    pub hedge_positions: Vec<f64>,

    pub portfolio_values: Vec<f64>,
}

impl SimulationResult {
    fn new(delta: f64, adjustment_interval: usize, prices: PricePath, series: HedgeSeries) -> Self {
        Self {
            delta,
            adjustment_interval,
            prices,
            hedge_positions: series.hedge_positions,
            portfolio_values: series.portfolio_values,
        }
    }

    /// Summary statistics for display
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary::from_result(self)
    }
}

/// Results of a sweep, keyed by delta in configuration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepResults {
    results: Vec<SimulationResult>,
}

impl SweepResults {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Result for an exact delta value
    pub fn get(&self, delta: f64) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.delta == delta)
    }

    /// Deltas in run order
    pub fn deltas(&self) -> Vec<f64> {
        self.results.iter().map(|r| r.delta).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimulationResult> {
        self.results.iter()
    }

    pub fn as_slice(&self) -> &[SimulationResult] {
        &self.results
    }

    fn push(&mut self, result: SimulationResult) {
        self.results.push(result);
    }
}

impl<'a> IntoIterator for &'a SweepResults {
    type Item = &'a SimulationResult;
    type IntoIter = std::slice::Iter<'a, SimulationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Sweep engine
///
/// Runs one hedge simulation per configured delta. Each run draws its own
/// price path from the engine's random source unless
/// `share_price_path` is set, in which case one path is drawn up front and
/// reused for every delta.
pub struct SweepEngine {
    config: SimulationConfig,

    generator: PriceSeriesGenerator,

    /// Random source shared by all runs
    rng: StdRng,
}

impl SweepEngine {
    /// Create a new sweep engine, seeded from `config.seed` or OS entropy
    pub fn new(config: SimulationConfig) -> crate::Result<Self> {
        let rng: StdRng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self::build(config, rng)
    }

    /// Create a sweep engine drawing from the given random source
    ///
    /// `config.seed` is ignored: `rng` is used as given.
    pub fn with_rng(config: SimulationConfig, rng: StdRng) -> crate::Result<Self> {
        if let Some(seed) = config.seed {
            debug!("Caller-supplied random source overrides configured seed {}", seed);
        }

        Self::build(config, rng)
    }

    fn build(config: SimulationConfig, rng: StdRng) -> crate::Result<Self> {
        config.validate()?;

        let generator = PriceSeriesGenerator::new(config.initial_price, config.volatility)?;

        Ok(Self {
            config,
            generator,
            rng,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every configured delta
    ///
    /// All validation happens before the first path is drawn, so a failing
    /// configuration yields no partial results.
    pub fn run(&mut self) -> crate::Result<SweepResults> {
        let days: usize = self.config.simulated_days()?;
        let simulators: Vec<HedgeSimulator> = self
            .config
            .delta_values
            .iter()
            .map(|&delta| HedgeSimulator::new(self.config.adjustment_interval, delta))
            .collect::<crate::Result<_>>()?;

        let shared_path: Option<PricePath> = if self.config.share_price_path {
            Some(self.generator.generate(days, &mut self.rng))
        } else {
            None
        };

        let mut results = SweepResults::default();
        for simulator in simulators {
            let prices: PricePath = match &shared_path {
                Some(path) => path.clone(),
                None => self.generator.generate(days, &mut self.rng),
            };

            let series: HedgeSeries = simulator.simulate(&prices);
            let result = SimulationResult::new(
                simulator.delta(),
                simulator.adjustment_interval(),
                prices,
                series,
            );

            info!(
                "Delta {}: {} days, final price {:.2}, final portfolio value {:.2}",
                result.delta,
                days,
                result.prices.last_price().unwrap_or(self.config.initial_price),
                result.portfolio_values.last().copied().unwrap_or(0.0)
            );

            results.push(result);
        }

        Ok(results)
    }
}
