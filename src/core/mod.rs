//! Core application primitives (façades composing the engines)

pub mod analyzer;

pub use analyzer::*;
