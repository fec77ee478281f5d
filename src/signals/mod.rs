//! Signal detection over augmented series.

pub mod aggregation;
pub mod engine;
pub mod trend;

pub use aggregation::*;
pub use engine::*;
pub use trend::*;
