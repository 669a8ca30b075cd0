//! Utility functions and helpers

mod dates;
mod metrics;

pub use dates::date_axis;
pub use metrics::SimulationSummary;
