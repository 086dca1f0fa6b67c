//! Window-level binding lifecycle for drag continuation.
//!
//! While a drag is active, move/up events must be observed globally so the
//! drag keeps working after the pointer leaves the container. The host owns
//! the actual listener plumbing behind the [`WindowBinding`] port; this
//! module owns the lifecycle: bind exactly once on entering a drag, unbind
//! exactly once on leaving it, and never leave a binding dangling when the
//! engine is torn down mid-drag.

use tracing::debug;

/// Host port for attaching and detaching global move/up observation.
///
/// Implementations do the platform work (window event listeners, pointer
/// capture, a winit device-event subscription); [`BindingLifecycle`]
/// guarantees the calls arrive strictly paired.
pub trait WindowBinding {
    /// Start observing move/up events at the window level.
    fn bind(&mut self);

    /// Stop observing move/up events at the window level.
    fn unbind(&mut self);
}

/// No-op binding for hosts that already route events globally.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBinding;

impl WindowBinding for NoBinding {
    fn bind(&mut self) {}
    fn unbind(&mut self) {}
}

/// Scoped acquisition wrapper around a [`WindowBinding`].
///
/// `acquire` and `release` are idempotent; repeated calls in the same state
/// are ignored rather than forwarded, so the underlying port sees exactly
/// one `bind` and one `unbind` per drag. Dropping a lifecycle that is still
/// bound releases it.
pub struct BindingLifecycle {
    binding: Box<dyn WindowBinding>,
    bound: bool,
}

impl BindingLifecycle {
    pub fn new(binding: Box<dyn WindowBinding>) -> Self {
        Self {
            binding,
            bound: false,
        }
    }

    /// Attach the window-level binding if not already attached.
    pub fn acquire(&mut self) {
        if self.bound {
            return;
        }
        self.binding.bind();
        self.bound = true;
        debug!("window binding acquired");
    }

    /// Detach the window-level binding if attached.
    pub fn release(&mut self) {
        if !self.bound {
            return;
        }
        self.binding.unbind();
        self.bound = false;
        debug!("window binding released");
    }

    /// Returns true while the window-level binding is attached.
    pub fn is_bound(&self) -> bool {
        self.bound
    }
}

impl Drop for BindingLifecycle {
    fn drop(&mut self) {
        self.release();
    }
}
