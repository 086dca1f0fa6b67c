//! Pointer/touch down handling - drag initiation.

use tracing::debug;

use crate::engine::geometry::CoordSpace;
use crate::engine::SliderEngine;
use crate::profile_scope;
use crate::surface::SliderSurface;
use crate::types::PointerTarget;

impl<S: SliderSurface> SliderEngine<S> {
    /// Handle a pointer or touch down-event.
    ///
    /// `x`/`y` are absolute page coordinates; `target` is the element the
    /// event landed on. When the configured interactive target rejects the
    /// hit, nothing happens and `false` is returned. Otherwise one
    /// positioning pass runs at the down coordinates, the engine enters
    /// `Dragging`, the window-level move/up binding is acquired, and `true`
    /// is returned - the host's cue to prevent default event behavior and
    /// start routing global move/up events back in.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, target: PointerTarget) -> bool {
        profile_scope!("handle_pointer_down");

        if !self.config.interactive_target.accepts(target) {
            return false;
        }

        self.position_pass(x, y, CoordSpace::Page);

        if self.state.begin_drag() {
            self.bindings.acquire();
            debug!("drag started at ({:.1}, {:.1})", x, y);
        }
        true
    }
}
