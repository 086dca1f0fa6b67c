//! Non-pointer position sources - resize, external targets, nudging.
//!
//! These entry points bypass pointer input entirely: they translate a
//! percentage into container-relative pixel coordinates and re-enter the
//! same positioning pass the pointer handlers use, so clamping, projection,
//! and notification behave identically regardless of where an update came
//! from.

use tracing::debug;

use crate::constants::{POSITION_MAX, POSITION_MIN};
use crate::engine::geometry::CoordSpace;
use crate::engine::SliderEngine;
use crate::profile_scope;
use crate::surface::SliderSurface;

impl<S: SliderSurface> SliderEngine<S> {
    /// Handle a container resize carrying the new content-box size.
    ///
    /// Recomputes the pixel coordinates that correspond to the current
    /// percentage under the new size, so the revealed proportion stays
    /// visually stable across layout changes. The sync flag is reset first:
    /// a position pinned at an extremity must still reapply its outputs to
    /// the new geometry rather than being suppressed as redundant.
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        profile_scope!("handle_resize");

        let x = (width / 100.0) * self.position;
        let y = (height / 100.0) * self.position;
        debug!("resize to {:.0}x{:.0}, keeping {:.1}%", width, height, self.position);

        self.synced = false;
        self.position_pass(x, y, CoordSpace::Container);
    }

    /// Apply a host-supplied target percentage.
    ///
    /// Ignored when the target equals the previously supplied one; hosts
    /// re-rendering with an unchanged position prop must not trigger
    /// redundant passes. The comparison is against the last *requested*
    /// value, not the live position - a drag in between does not make an
    /// unchanged request new.
    pub fn set_position(&mut self, percentage: f32) {
        if self.last_requested == Some(percentage) {
            return;
        }
        self.last_requested = Some(percentage);
        self.apply_percentage(percentage);
    }

    /// Move the current position by a signed percentage delta.
    ///
    /// The stepping surface for keyboard-driven hosts; the target is
    /// clamped to the normalized range before the pass.
    pub fn nudge(&mut self, delta: f32) {
        let target = (self.position + delta).clamp(POSITION_MIN, POSITION_MAX);
        self.apply_percentage(target);
    }

    /// Re-apply the current position against the current geometry.
    ///
    /// Call once after mount (when the container first has real geometry)
    /// to apply the configured initial position, and any time external
    /// layout may have shifted without a resize notification. Always runs a
    /// real pass; the sync flag is reset first.
    pub fn resync(&mut self) {
        self.synced = false;
        let current = self.position;
        self.apply_percentage(current);
    }

    /// Translate a percentage into container-relative coordinates and run
    /// one positioning pass.
    fn apply_percentage(&mut self, percentage: f32) {
        profile_scope!("apply_percentage");

        let rect = self.surface.rect();
        let x = (rect.width / 100.0) * percentage;
        let y = (rect.height / 100.0) * percentage;
        self.position_pass(x, y, CoordSpace::Container);
    }
}
