//! Utility helpers: math extensions, logging, and profiling.

pub mod logging;
pub mod math;
pub mod profiling;

pub use math::*;
pub use profiling::RigProfiler;
