//! Per-run summary statistics

use crate::hedging::SimulationResult;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Summary of a single delta run, for display and export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub delta: f64,
    pub days: usize,
    pub rebalances: usize,
    pub initial_price: f64,
    pub final_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub final_hedge_position: f64,
    pub final_portfolio_value: f64,
    pub min_portfolio_value: f64,
    pub max_portfolio_value: f64,

    /// Mean simple daily return (`None` with fewer than two returns)
    pub mean_daily_return: Option<f64>,

    /// Sample standard deviation of simple daily returns
    pub daily_return_std_dev: Option<f64>,

    /// First day with a non-positive or non-finite price
    pub degenerate_day: Option<usize>,
}

impl SimulationSummary {
    pub fn from_result(result: &SimulationResult) -> Self {
        let prices = &result.prices;
        let days: usize = prices.len().saturating_sub(1);
        let initial_price: f64 = prices.initial_price().unwrap_or(f64::NAN);

        let returns: Vec<f64> = prices.daily_returns();
        let (mean_daily_return, daily_return_std_dev) = if returns.len() >= 2 {
            (Some(returns.iter().mean()), Some(returns.iter().std_dev()))
        } else {
            (None, None)
        };

        let finite_values = || result.portfolio_values.iter().copied().filter(|v| v.is_finite());

        Self {
            delta: result.delta,
            days,
            rebalances: days / result.adjustment_interval.max(1),
            initial_price,
            final_price: prices.last_price().unwrap_or(initial_price),
            min_price: prices.min_price().unwrap_or(initial_price),
            max_price: prices.max_price().unwrap_or(initial_price),
            final_hedge_position: result.hedge_positions.last().copied().unwrap_or(0.0),
            final_portfolio_value: result.portfolio_values.last().copied().unwrap_or(0.0),
            min_portfolio_value: finite_values().reduce(f64::min).unwrap_or(0.0),
            max_portfolio_value: finite_values().reduce(f64::max).unwrap_or(0.0),
            mean_daily_return,
            daily_return_std_dev,
            degenerate_day: prices.first_degenerate_day(),
        }
    }
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Delta = {}", self.delta)?;
        writeln!(f, "  Days Simulated:     {}", self.days)?;
        writeln!(f, "  Rebalances:         {}", self.rebalances)?;
        writeln!(f, "\nPrice:")?;
        writeln!(f, "  Initial:  {:.2}", self.initial_price)?;
        writeln!(f, "  Final:    {:.2}", self.final_price)?;
        writeln!(f, "  Minimum:  {:.2}", self.min_price)?;
        writeln!(f, "  Maximum:  {:.2}", self.max_price)?;
        if let (Some(mean), Some(std_dev)) = (self.mean_daily_return, self.daily_return_std_dev) {
            writeln!(
                f,
                "  Daily Return: mean {:.4}%, std dev {:.4}%",
                mean * 100.0,
                std_dev * 100.0
            )?;
        }
        writeln!(f, "\nHedge:")?;
        writeln!(f, "  Final Position:        {:.4}", self.final_hedge_position)?;
        writeln!(f, "  Final Portfolio Value: {:.2}", self.final_portfolio_value)?;
        writeln!(
            f,
            "  Portfolio Value Range: {:.2} .. {:.2}",
            self.min_portfolio_value, self.max_portfolio_value
        )?;
        if let Some(day) = self.degenerate_day {
            writeln!(f, "\n  WARNING: non-positive price from day {}", day)?;
        }
        Ok(())
    }
}
