//! Pointer/touch up handling - drag end and hover leave.

use tracing::debug;

use crate::engine::SliderEngine;
use crate::surface::SliderSurface;

impl<S: SliderSurface> SliderEngine<S> {
    /// Handle a window-level pointer or touch up-event.
    ///
    /// Ends the drag and releases the window-level binding. Safe to call
    /// without a preceding down-event; a spurious up while idle is ignored.
    pub fn handle_pointer_up(&mut self) {
        if self.state.end_drag() {
            self.bindings.release();
            debug!("drag ended at {:.1}%", self.position);
        }
    }

    /// Handle the pointer leaving the container.
    ///
    /// Clears hover tracking only. An active pointer-held drag is never
    /// interrupted: the window-level binding keeps the drag alive while the
    /// pointer is outside the container.
    pub fn handle_pointer_leave(&mut self) {
        if self.state.is_dragging() {
            return;
        }
        if self.hovering {
            self.hovering = false;
            debug!("hover ended");
        }
    }
}
