//! Output projection - a normalized position to the two pixel outputs.
//!
//! Projects the authoritative percentage back into pixels, applying the
//! bounds padding. The padding constrains only the rendered outputs; the
//! percentage itself is always computed against the full, unpadded extent.

use tracing::trace;

/// The two derived visual outputs of one positioning pass.
///
/// Both values are produced from the same normalized position within the
/// same pass, so the revealed-region boundary and the handle can never
/// disagree. The fields are separate because consumers apply them to two
/// different targets, not because they can differ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Clip boundary for the revealed item, in pixels from the axis start
    pub clip_px: f32,
    /// Handle translation along the active axis, in pixels
    pub offset_px: f32,
}

/// Project a percentage onto the container, honoring the bounds padding.
///
/// An oversized padding (`> extent / 2`) is narrowed to `extent / 2` so the
/// outputs can never escape `[0, extent]`; malformed configuration degrades
/// to the container midpoint instead of inverting the clamp range.
pub(crate) fn project(percentage: f32, extent: f32, bounds_padding: f32) -> Projection {
    let raw_px = (percentage / 100.0) * extent;
    let pad = bounds_padding.clamp(0.0, extent / 2.0);
    let clamped_px = raw_px.clamp(pad, extent - pad);
    trace!("project {:.2}% -> {:.2}px (pad {:.1})", percentage, clamped_px, pad);
    Projection {
        clip_px: clamped_px,
        offset_px: clamped_px,
    }
}
