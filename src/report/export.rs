use crate::hedging::{SimulationConfig, SweepResults};
use crate::market_data::PricePath;
use crate::utils::{SimulationSummary, date_axis};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct RunReport<'a> {
    delta: f64,
    dates: Vec<NaiveDate>,
    prices: &'a PricePath,
    hedge_positions: &'a [f64],
    portfolio_values: &'a [f64],
    summary: SimulationSummary,
}

#[derive(Serialize)]
struct SweepReport<'a> {
    config: &'a SimulationConfig,
    runs: Vec<RunReport<'a>>,
}

/// Serialize the configuration and every run as pretty JSON
///
/// Non-finite values (degenerate price paths) are written as `null`.
pub fn sweep_report_json(
    config: &SimulationConfig,
    results: &SweepResults,
) -> crate::Result<String> {
    let runs: Vec<RunReport<'_>> = results
        .iter()
        .map(|result| RunReport {
            delta: result.delta,
            dates: date_axis(config.start_date, result.prices.len().saturating_sub(1)),
            prices: &result.prices,
            hedge_positions: &result.hedge_positions,
            portfolio_values: &result.portfolio_values,
            summary: result.summary(),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&SweepReport { config, runs })?)
}

/// Write the JSON report to `path`
pub fn write_json_report(
    config: &SimulationConfig,
    results: &SweepResults,
    path: impl AsRef<Path>,
) -> crate::Result<()> {
    let json: String = sweep_report_json(config, results)?;
    std::fs::write(path.as_ref(), json)?;

    info!("JSON report written to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SweepEngine;

    #[test]
    fn test_report_structure() {
        let config = SimulationConfig {
            days: 3,
            volatility: 0.0,
            initial_price: 100.0,
            adjustment_interval: 1,
            delta_values: vec![1.0],
            seed: Some(1),
            ..Default::default()
        };
        let results = SweepEngine::new(config.clone()).unwrap().run().unwrap();

        let json: String = sweep_report_json(&config, &results).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let run = &value["runs"][0];
        assert_eq!(run["delta"], 1.0);
        assert_eq!(run["dates"][0], "2023-01-01");
        assert_eq!(run["dates"][3], "2023-01-04");
        assert_eq!(run["prices"], serde_json::json!([100.0, 100.0, 100.0, 100.0]));
        assert_eq!(
            run["hedge_positions"],
            serde_json::json!([0.0, -1.0, -1.0, -1.0])
        );
        assert_eq!(run["summary"]["rebalances"], 3);
        assert_eq!(value["config"]["max_loss_limit"], 10_000.0);
    }

    #[test]
    fn test_write_report_file() {
        let config = SimulationConfig {
            days: 5,
            seed: Some(8),
            ..Default::default()
        };
        let results = SweepEngine::new(config.clone()).unwrap().run().unwrap();

        let path = std::env::temp_dir().join(format!(
            "delta_hedge_sim_export_{}.json",
            std::process::id()
        ));
        write_json_report(&config, &results, &path).unwrap();

        let written: String = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["runs"].as_array().unwrap().len(), 3);
    }
}
