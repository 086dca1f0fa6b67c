//! Drag state machine - explicit interaction state for the coordinator.
//!
//! A single enum replaces the scattered boolean flags a naive port would
//! carry (`is_dragging`, `window_bound`, ...), making impossible states
//! unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging     (pointer/touch down on an accepted target)
//! Dragging -> Idle     (pointer/touch up at the window level)
//! ```
//!
//! Hover-mode positioning runs entirely within `Idle`; a hover move never
//! enters `Dragging` and a hover leave never exits it.

/// Interaction state of one engine instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// No pointer is held; only hover-mode moves may position
    #[default]
    Idle,

    /// A pointer is held down and window-level move/up binding is active
    Dragging,
}

impl DragState {
    /// Returns true while a pointer-held drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Enter `Dragging`. Returns false if a drag was already in progress,
    /// so callers acquire the window binding at most once per drag.
    pub fn begin_drag(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = Self::Dragging;
        true
    }

    /// Return to `Idle`. Returns false if no drag was in progress, so
    /// callers release the window binding at most once per drag.
    pub fn end_drag(&mut self) -> bool {
        if self.is_idle() {
            return false;
        }
        *self = Self::Idle;
        true
    }
}
