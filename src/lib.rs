//! Technical-analysis engine for daily price/volume bars.
//!
//! Three pure operations are exposed per symbol:
//! - [`indicators::engine`]: bar series -> augmented series with every indicator field
//! - [`signals::engine`]: augmented series -> categorical signal set
//! - [`indicators::structure`]: bar series -> support/resistance levels
//!
//! [`core::analyzer::TechnicalAnalyzer`] composes them behind one configuration.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod signals;

pub use config::EngineConfig;
pub use indicators::IndicatorError;
pub use models::{AugmentedBar, Bar};
