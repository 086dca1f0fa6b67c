//! Core types for the position synchronization engine.
//!
//! This module defines the fundamental geometry and mode types used
//! throughout the crate: the drag axis, the container geometry snapshot,
//! and the event-target discriminators.

use serde::{Deserialize, Serialize};

// ============================================================================
// Orientation
// ============================================================================

/// The axis along which position is measured and the handle travels.
///
/// Fixed for the lifetime of an engine instance; switching orientation is
/// equivalent to building a new engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Position measured along the x axis (width is the extent)
    #[default]
    Horizontal,
    /// Position measured along the y axis (height is the extent)
    Vertical,
}

impl Orientation {
    /// Returns true for the horizontal axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Pick the active-axis component of an (x, y) pair
    pub fn pick(self, x: f32, y: f32) -> f32 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }
}

// ============================================================================
// Container Geometry
// ============================================================================

/// Snapshot of the container's bounding box plus its layout-reported size.
///
/// `width`/`height` are the true rendered size; `offset_width`/`offset_height`
/// are the unscaled sizes the layout system reports. The two disagree when an
/// external transform or browser zoom scales the container, and their ratio
/// is the [zoom scale](Self::zoom_scale) the resolver corrects for.
///
/// A snapshot is taken fresh on every positioning pass and never cached:
/// external layout (resize, zoom) can invalidate it between events.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    /// Distance from the page origin to the container's top edge
    pub top: f32,
    /// Distance from the page origin to the container's left edge
    pub left: f32,
    /// True rendered width
    pub width: f32,
    /// True rendered height
    pub height: f32,
    /// Layout-reported (unscaled) width
    pub offset_width: f32,
    /// Layout-reported (unscaled) height
    pub offset_height: f32,
}

impl ContainerRect {
    /// Construct a rect with no external scaling (layout size == true size)
    pub fn unscaled(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
            offset_width: width,
            offset_height: height,
        }
    }

    /// Size along the active axis
    pub fn extent(&self, orientation: Orientation) -> f32 {
        orientation.pick(self.width, self.height)
    }

    /// Layout-reported size along the active axis
    pub fn layout_extent(&self, orientation: Orientation) -> f32 {
        orientation.pick(self.offset_width, self.offset_height)
    }

    /// Page-space position of the container's leading edge on the active axis
    pub fn origin(&self, orientation: Orientation) -> f32 {
        orientation.pick(self.left, self.top)
    }

    /// Ratio of true size to layout size along the active axis.
    ///
    /// A zero layout extent is substituted with 1 so the ratio stays defined;
    /// see the division-by-zero guard in the geometry resolver.
    pub fn zoom_scale(&self, orientation: Orientation) -> f32 {
        let layout = self.layout_extent(orientation);
        let layout = if layout == 0.0 { 1.0 } else { layout };
        self.extent(orientation) / layout
    }

    /// True when the container cannot host a meaningful position.
    ///
    /// A zero-size container typically means layout has not happened yet or
    /// the element is hidden; positioning passes skip it entirely.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// ============================================================================
// Event Targets
// ============================================================================

/// Which element a down-event landed on.
///
/// Hosts report this with every pointer-down; whether a `Container` hit may
/// start a drag depends on the configured [`InteractiveTarget`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The whole compare container
    Container,
    /// The draggable handle sub-region
    Handle,
}

/// Which element's down-events are allowed to start a drag.
///
/// Fixed per engine instance. Move/up events during an active drag are
/// always observed globally regardless of this setting, so a drag continues
/// when the pointer leaves the interactive element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractiveTarget {
    /// Down-events anywhere on the container start a drag
    #[default]
    Container,
    /// Only down-events on the handle start a drag
    HandleOnly,
}

impl InteractiveTarget {
    /// Returns true when a down-event on `target` may start a drag
    pub fn accepts(self, target: PointerTarget) -> bool {
        match self {
            Self::Container => true,
            Self::HandleOnly => target == PointerTarget::Handle,
        }
    }
}
