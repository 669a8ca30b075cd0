//! Delta hedge simulation binary
//!
//! Usage: `delta-hedge-sim [config.json]`

use delta_hedge_sim::*;
use log::info;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Delta Hedge Simulation v0.1.0                ║");
    println!("╚════════════════════════════════════════════════╝\n");

    let config: SimulationConfig = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            SimulationConfig::from_json_file(&path)?
        }
        None => SimulationConfig::default(),
    };

    println!("Configuration:");
    println!("  Days:                {}", config.days);
    println!("  Initial Price:       {:.2}", config.initial_price);
    println!("  Volatility:          {:.4}", config.volatility);
    println!("  Adjustment Interval: {} days", config.adjustment_interval);
    println!("  Max Loss Limit:      {:.0} (not enforced)", config.max_loss_limit);
    println!("  Delta Values:        {:?}", config.delta_values);
    println!(
        "  Price Paths:         {}",
        if config.share_price_path {
            "shared"
        } else {
            "independent per delta"
        }
    );
    println!("\nSimulating...\n");

    let mut engine: SweepEngine = SweepEngine::new(config)?;
    let results: SweepResults = engine.run()?;
    let config: &SimulationConfig = engine.config();

    println!("{}", "═".repeat(50));
    println!("RESULTS");
    println!("{}", "═".repeat(50));

    for result in &results {
        println!("{}", result.summary());
    }

    ReportRenderer::default().render_to_file(&results, config.start_date, &config.chart_path)?;
    println!("Chart:  {}", config.chart_path);

    if let Some(json_path) = &config.json_path {
        write_json_report(config, &results, json_path)?;
        println!("JSON:   {}", json_path);
    }

    println!("\nSimulation complete");

    Ok(())
}
