//! Shared numeric helpers used across indicator families

pub mod math;
