//! Pointer/touch move handling - drag continuation and hover positioning.
//!
//! ## Performance Notes
//!
//! Move events arrive at 60+ per second during a drag and every one runs a
//! full positioning pass. Key properties:
//! - Early exit for non-drag states
//! - Redundant extremity updates are suppressed inside the pass
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::engine::geometry::CoordSpace;
use crate::engine::SliderEngine;
use crate::profile_scope;
use crate::surface::SliderSurface;

impl<S: SliderSurface> SliderEngine<S> {
    /// Handle a window-level pointer or touch move-event.
    ///
    /// Only acts while a drag is in progress; the window binding delivers
    /// these regardless of what element the pointer is over, so a drag
    /// continues past the container bounds.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) {
        profile_scope!("handle_pointer_move");

        if !self.state.is_dragging() {
            return;
        }
        self.position_pass(x, y, CoordSpace::Page);
    }

    /// Handle a mouse move directly over the container while idle.
    ///
    /// Only acts in hover mode. During an active drag the window-level
    /// [`handle_pointer_move`](Self::handle_pointer_move) stream is
    /// authoritative and hover moves are ignored.
    pub fn handle_hover_move(&mut self, x: f32, y: f32) {
        profile_scope!("handle_hover_move");

        if !self.config.hover || self.state.is_dragging() {
            return;
        }
        self.hovering = true;
        self.position_pass(x, y, CoordSpace::Page);
    }
}
