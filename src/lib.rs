//! # Delta Hedge Sim
//!
//! Periodic delta-hedging simulation over synthetic collateral prices.
//!
//! ## Features
//!
//! - Random-walk price paths with multiplicative Normal shocks
//! - Fixed-delta hedge rebalanced on a fixed day cadence
//! - Parameter sweep over several delta values
//! - SVG chart report and optional JSON export
//!
//! ## Quick Start
//!
//! ```
//! use delta_hedge_sim::*;
//!
//! let config = SimulationConfig {
//!     seed: Some(7),
//!     ..SimulationConfig::default()
//! };
//! let mut engine = SweepEngine::new(config)?;
//! let results = engine.run()?;
//! assert_eq!(results.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod hedging;
pub mod market_data;
pub mod report;
pub mod utils;

// Re-exports
pub use hedging::{
    HedgeSeries, HedgeSimulator, SimulationConfig, SimulationResult, SweepEngine, SweepResults,
    simulate,
};
pub use market_data::{PricePath, PriceSeriesGenerator, generate_price_path};
pub use report::{ReportRenderer, write_json_report};
pub use utils::{SimulationSummary, date_axis};

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration: the run is aborted before anything is rendered
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),
}
