//! Error types for the rig controller.
//!
//! Only configuration can fail. Per-frame and pointer handling resolve
//! numeric degeneracy locally and never surface an error.

use std::fmt;

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum RigError {
    /// A tunable was NaN or infinite.
    NonFinite(&'static str),
    /// A tunable fell outside its allowed range.
    OutOfRange {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NonFinite(name) => write!(f, "config value `{name}` is not finite"),
            Self::OutOfRange {
                name,
                value,
                expected,
            } => write!(f, "config value `{name}` = {value} must be {expected}"),
        }
    }
}

impl std::error::Error for RigError {}

/// Convenient Result type alias for fallible rig operations.
pub type Result<T> = std::result::Result<T, RigError>;
