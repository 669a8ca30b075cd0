//! Synthetic collateral price data

mod generator;
mod price_path;

pub use generator::{PriceSeriesGenerator, generate_price_path};
pub use price_path::PricePath;
