//! Error types for configuration handling.
//!
//! The engine itself never errors at runtime: every numeric input is clamped
//! rather than rejected. Validation happens once, host-side, against a
//! [`SliderConfig`](crate::config::SliderConfig) before an engine is built.

use thiserror::Error;

// Re-export the position range from the constants module so validating
// hosts see the same bounds the engine clamps against
pub use crate::constants::{POSITION_MAX, POSITION_MIN};

/// Errors that can occur while validating or loading a slider configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Bounds padding must be zero or positive
    #[error("negative bounds padding: {0}px")]
    NegativePadding(f32),

    /// Initial position must lie within the normalized range
    #[error("initial position {pos} outside [0, 100]")]
    PositionOutOfRange { pos: f32 },

    /// JSON parse error from serde_json
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
