//! Hedge simulation and delta sweep engine

mod config;
mod delta;
mod engine;

pub use config::SimulationConfig;
pub use delta::{HedgeSeries, HedgeSimulator, simulate};
pub use engine::{SimulationResult, SweepEngine, SweepResults};
