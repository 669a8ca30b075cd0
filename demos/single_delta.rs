//! Walk through one delta run day by day

use delta_hedge_sim::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    println!("=== Delta Hedge - Single Run ===\n");

    let mut rng: StdRng = StdRng::seed_from_u64(2023);
    let prices: PricePath = generate_price_path(20, 2000.0, 0.01, &mut rng)?;

    // Rebalance weekly with a 1.0 delta
    let simulator: HedgeSimulator = HedgeSimulator::new(7, 1.0)?;
    let series: HedgeSeries = simulator.simulate(&prices);

    let start = chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
    let dates = date_axis(start, prices.len() - 1);

    println!("{:<12} {:>10} {:>10} {:>12}  ", "Date", "Price", "Position", "Value");
    println!("{}", "-".repeat(50));

    for (day, date) in dates.iter().enumerate() {
        let marker: &str = if day > 0 && simulator.is_rebalance_day(day) {
            "<- rebalance"
        } else {
            ""
        };
        println!(
            "{:<12} {:>10.2} {:>10.2} {:>12.2}  {}",
            date.format("%Y-%m-%d"),
            prices[day],
            series.hedge_positions[day],
            series.portfolio_values[day],
            marker
        );
    }

    Ok(())
}
