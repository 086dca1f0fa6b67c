//! Geometry resolution - raw coordinates to a scale-corrected axis pixel.
//!
//! Converts one raw coordinate pair into a clamped, zoom-corrected pixel
//! position along the active axis. Pure functions over a [`ContainerRect`]
//! snapshot; nothing here touches engine state.

use crate::types::{ContainerRect, Orientation};

/// Coordinate space of a raw input pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CoordSpace {
    /// Absolute page/document coordinates (pointer events); must be
    /// translated by the container origin and the page scroll offset
    Page,
    /// Already container-relative (resize resync, external position)
    Container,
}

/// A resolved axis position, corrected for external visual scaling.
///
/// Both fields are divided by the zoom scale, so `pixel / extent` is the
/// true revealed fraction regardless of any transform on the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ResolvedPosition {
    /// Clamped pixel position along the active axis
    pub pixel: f32,
    /// Container extent along the active axis
    pub extent: f32,
}

/// Resolve raw input coordinates against a fresh container snapshot.
///
/// Returns `None` for degenerate geometry (zero width or height): a
/// zero-size container cannot have a meaningful position and the entire
/// positioning pass is skipped.
pub(crate) fn resolve(
    rect: &ContainerRect,
    x: f32,
    y: f32,
    space: CoordSpace,
    page_scroll: (f32, f32),
    orientation: Orientation,
) -> Option<ResolvedPosition> {
    if rect.is_degenerate() {
        return None;
    }

    let raw = orientation.pick(x, y);
    let local = match space {
        CoordSpace::Page => {
            let scroll = orientation.pick(page_scroll.0, page_scroll.1);
            raw - rect.origin(orientation) - scroll
        }
        CoordSpace::Container => raw,
    };

    let extent = rect.extent(orientation);
    let clamped = local.clamp(0.0, extent);

    let zoom = rect.zoom_scale(orientation);
    Some(ResolvedPosition {
        pixel: clamped / zoom,
        extent: extent / zoom,
    })
}
