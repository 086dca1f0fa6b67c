//! Per-instance engine configuration.
//!
//! All fields are host-supplied and static for the lifetime of an engine.
//! The engine consumes a [`SliderConfig`] by value and never re-validates it
//! at runtime; hosts that accept untrusted values call [`SliderConfig::validate`]
//! first. Malformed values that slip through degrade gracefully (the clamp
//! logic in the positioning pipeline keeps every pixel output inside the
//! container) rather than panicking.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BOUNDS_PADDING, DEFAULT_POSITION, POSITION_MAX, POSITION_MIN};
use crate::error::{ConfigError, ConfigResult};
use crate::types::{InteractiveTarget, Orientation};

/// Static configuration for one engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Drag axis
    pub orientation: Orientation,
    /// Pixel margin the clip/offset outputs keep from the container edges.
    /// Affects projected outputs only, never the underlying percentage.
    pub bounds_padding: f32,
    /// Which element's down-events start a drag
    pub interactive_target: InteractiveTarget,
    /// When enabled, bare pointer movement over the container positions the
    /// handle without requiring a down-event first
    pub hover: bool,
    /// Normalized position applied on the first sync, in percent
    pub initial_position: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            bounds_padding: DEFAULT_BOUNDS_PADDING,
            interactive_target: InteractiveTarget::Container,
            hover: false,
            initial_position: DEFAULT_POSITION,
        }
    }
}

impl SliderConfig {
    /// Check host-supplied values before building an engine.
    ///
    /// Returns the first violation found: negative padding, then an initial
    /// position outside the normalized range.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.bounds_padding < 0.0 {
            return Err(ConfigError::NegativePadding(self.bounds_padding));
        }
        if !(POSITION_MIN..=POSITION_MAX).contains(&self.initial_position) {
            return Err(ConfigError::PositionOutOfRange {
                pos: self.initial_position,
            });
        }
        Ok(())
    }

    /// Parse a configuration from a JSON string.
    ///
    /// Missing fields fall back to their defaults. The result is validated.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to a JSON string.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
