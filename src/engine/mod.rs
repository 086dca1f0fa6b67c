//! The position synchronization engine.
//!
//! Converts heterogeneous input (pointer drags, hover moves, resize events,
//! externally-set positions) into a single authoritative normalized position
//! and the two pixel outputs derived from it.
//!
//! ## Architecture
//!
//! Every input funnels into one `position_pass`: read a fresh geometry
//! snapshot, resolve a scale-corrected axis pixel, normalize it to a
//! percentage (or suppress the pass), project the percentage through the
//! bounds padding, write both outputs to the surface, notify the host. The
//! pass runs synchronously inside the triggering event handler, so outputs
//! are never interleaved across events.
//!
//! ## Modules
//!
//! - `state` - Drag state machine (idle/dragging)
//! - `geometry` - Raw coordinates to a clamped, zoom-corrected axis pixel
//! - `normalize` - Pixel to percentage, extremity suppression
//! - `project` - Percentage to clip/offset pixels through the padding
//! - `bindings` - Window-level move/up binding lifecycle
//! - `pointer_down` - Drag initiation, restricted-target gate
//! - `pointer_move` - Drag continuation and hover positioning
//! - `pointer_up` - Drag end and hover leave
//! - `sync` - Resize resynchronization, external position, nudging

mod bindings;
mod geometry;
mod normalize;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod project;
mod state;
mod sync;

pub use bindings::{BindingLifecycle, NoBinding, WindowBinding};
pub use project::Projection;
pub use state::DragState;

use tracing::trace;

use crate::config::SliderConfig;
use crate::engine::geometry::CoordSpace;
use crate::profile_scope;
use crate::surface::SliderSurface;

/// Host notification invoked with the new percentage after every
/// non-suppressed positioning pass.
pub type PositionCallback = Box<dyn FnMut(f32)>;

/// Position synchronization engine for one compare container.
///
/// Owns the authoritative normalized position and all interaction state.
/// Hosts feed it events through the `handle_*` methods and receive outputs
/// through the [`SliderSurface`] writes plus the position-change callback.
///
/// "Pointer" covers both mouse and touch streams; hosts map `touchstart`/
/// `touchmove`/`touchend` onto the same down/move/up entry points.
///
/// After construction the engine has performed no positioning pass; call
/// [`resync`](Self::resync) once the container has real geometry to apply
/// the configured initial position.
pub struct SliderEngine<S: SliderSurface> {
    /// Geometry source and output sink
    surface: S,
    /// Host-supplied static configuration
    config: SliderConfig,
    /// Interaction state machine
    state: DragState,
    /// Window-level move/up binding, held only while dragging
    bindings: BindingLifecycle,
    /// The authoritative normalized position, in `[0, 100]`
    position: f32,
    /// True once at least one real positioning pass ran since
    /// construction or the last resize reset
    synced: bool,
    /// Last externally requested position, for change detection
    last_requested: Option<f32>,
    /// True while hover-mode moves are positioning the handle
    hovering: bool,
    /// Host notification for non-suppressed passes
    on_position_change: Option<PositionCallback>,
}

impl<S: SliderSurface> SliderEngine<S> {
    /// Build an engine over a surface with the given configuration.
    ///
    /// The configuration is taken as validated; see
    /// [`SliderConfig::validate`].
    pub fn new(surface: S, config: SliderConfig) -> Self {
        Self {
            surface,
            state: DragState::default(),
            bindings: BindingLifecycle::new(Box::new(NoBinding)),
            position: config.initial_position,
            synced: false,
            last_requested: None,
            hovering: false,
            on_position_change: None,
            config,
        }
    }

    /// Replace the no-op window binding with a host implementation.
    pub fn with_window_binding(mut self, binding: Box<dyn WindowBinding>) -> Self {
        self.bindings = BindingLifecycle::new(binding);
        self
    }

    /// Set the callback invoked after every non-suppressed positioning pass.
    pub fn on_position_change(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.on_position_change = Some(Box::new(callback));
        self
    }

    /// Current normalized position, in `[0, 100]`.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Returns true while a pointer-held drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Returns true while hover-mode moves are positioning the handle.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Run one positioning pass over raw input coordinates.
    ///
    /// Returns true when the pass applied (position updated, outputs
    /// written, host notified) and false when it was skipped: degenerate
    /// geometry, or a redundant update pinned at an extremity.
    fn position_pass(&mut self, x: f32, y: f32, space: CoordSpace) -> bool {
        profile_scope!("position_pass");

        let rect = self.surface.rect();
        let Some(resolved) = geometry::resolve(
            &rect,
            x,
            y,
            space,
            self.surface.page_scroll(),
            self.config.orientation,
        ) else {
            trace!("positioning pass skipped: degenerate geometry");
            return false;
        };

        let update = normalize::normalize(resolved);
        if normalize::should_suppress(self.synced, self.position, &update) {
            trace!("positioning pass suppressed at {:.0}%", update.percentage);
            return false;
        }

        self.synced = true;
        self.position = update.percentage;

        let projection = project::project(self.position, resolved.extent, self.config.bounds_padding);
        self.surface.set_clip(projection.clip_px);
        self.surface.set_offset(projection.offset_px);

        if let Some(callback) = self.on_position_change.as_mut() {
            callback(update.percentage);
        }
        true
    }
}
