//! Independent vs shared price paths across the delta sweep

use delta_hedge_sim::*;

fn main() -> Result<()> {
    println!("=== Delta Sweep - Independent vs Shared Paths ===\n");

    for share_price_path in [false, true] {
        let config = SimulationConfig {
            seed: Some(42),
            share_price_path,
            ..Default::default()
        };
        let results: SweepResults = SweepEngine::new(config)?.run()?;

        println!(
            "{} paths:",
            if share_price_path { "Shared" } else { "Independent" }
        );
        for result in &results {
            let summary: SimulationSummary = result.summary();
            println!(
                "  Delta {:<4} final price {:>9.2}  final value {:>10.2}",
                summary.delta, summary.final_price, summary.final_portfolio_value
            );
        }
        println!();
    }

    Ok(())
}
