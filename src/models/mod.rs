//! Shared data models spanning the engine layers.

pub mod bar;
pub mod indicators;
pub mod levels;
pub mod signal;

pub use bar::{AugmentedBar, Bar};
pub use indicators::{BollPosition, IndicatorSnapshot};
pub use levels::{LevelMethod, LevelResult, Recommendation};
pub use signal::{
    BollSignal, MaSignal, MacdSignal, OscillatorSignal, OverallSignal, SignalSet, TrendState,
};
