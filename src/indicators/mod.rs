pub mod engine;
pub mod error;
pub mod parser;
pub mod registry;
pub mod validation;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use engine::{augment, compute_indicators, compute_selected};
pub use error::IndicatorError;
pub use registry::{IndicatorCategory, IndicatorKind};

/// A named indicator output, one value per bar
pub type Column = (String, Vec<f64>);
