//! Trend indicators: SMA, EMA

pub mod ema;
pub mod ma;

pub use ema::*;
pub use ma::*;
