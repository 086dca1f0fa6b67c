//! Crate-wide constants.
//!
//! Centralizes magic numbers and default values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Position Range
// ============================================================================

/// Lower bound of a normalized position, in percent
pub const POSITION_MIN: f32 = 0.0;

/// Upper bound of a normalized position, in percent
pub const POSITION_MAX: f32 = 100.0;

// ============================================================================
// Defaults
// ============================================================================

/// Default normalized position: both items revealed equally
pub const DEFAULT_POSITION: f32 = 50.0;

/// Default bounds padding in pixels (outputs may reach the container edges)
pub const DEFAULT_BOUNDS_PADDING: f32 = 0.0;

// ============================================================================
// Profiling
// ============================================================================

/// Number of positioning-pass samples kept for rolling statistics
pub const PASS_SAMPLE_COUNT: usize = 60;

/// Pass duration above which a warning is logged, in milliseconds.
/// A pass slower than this cannot keep up with a 120 Hz pointer stream.
pub const SLOW_PASS_MS: f64 = 8.0;
