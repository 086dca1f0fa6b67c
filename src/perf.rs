//! Performance instrumentation for positioning passes.
//!
//! Pointer moves arrive at 60+ events per second during a drag, and every
//! one of them runs a full positioning pass (read geometry, compute, write
//! outputs, notify). This module times those passes without costing anything
//! when the `profiling` feature is off.
//!
//! ## Usage
//!
//! ```ignore
//! use slidewipe::profile_scope;
//!
//! fn handle_pointer_move(&mut self, x: f32, y: f32) {
//!     profile_scope!("handle_pointer_move");
//!     // ... positioning pass ...
//! }
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

use crate::constants::{PASS_SAMPLE_COUNT, SLOW_PASS_MS};

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

// ============================================================================
// Profiling Macro (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::start($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}

pub use profile_scope;

// ============================================================================
// Runtime Profiling Control
// ============================================================================

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if profiling is currently enabled.
#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// RAII timer that traces the elapsed time of a scope on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

impl ScopedTimer {
    /// Start timing the named scope.
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        #[cfg(feature = "profiling")]
        trace!("{}: {:.3}ms", self.name, ms);
        if ms > SLOW_PASS_MS {
            warn!("slow scope {}: {:.2}ms (threshold {:.2}ms)", self.name, ms, SLOW_PASS_MS);
        }
    }
}

// ============================================================================
// Pass Statistics
// ============================================================================

/// Rolling statistics over recent positioning passes.
///
/// Hosts that want an on-screen readout own one of these and feed it from a
/// wrapper around the engine's event methods; the engine itself stays free
/// of bookkeeping it does not need.
#[derive(Debug, Default)]
pub struct PassMonitor {
    /// Recent pass times in milliseconds
    samples: VecDeque<f64>,
    /// Count of passes that exceeded the slow-pass threshold
    slow_passes: u64,
    /// Total passes recorded
    total_passes: u64,
    /// Running sum over the rolling window
    sum_ms: f64,
}

impl PassMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one pass duration in milliseconds.
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= PASS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.total_passes += 1;
        if ms > SLOW_PASS_MS {
            self.slow_passes += 1;
            warn!("slow positioning pass: {:.2}ms (threshold {:.2}ms)", ms, SLOW_PASS_MS);
        }
    }

    /// Average pass time over the rolling window.
    pub fn average_ms(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// Worst pass time in the rolling window.
    pub fn max_ms(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max)
    }

    /// Total passes recorded since construction.
    pub fn total_passes(&self) -> u64 {
        self.total_passes
    }

    /// Passes that exceeded the slow-pass threshold.
    pub fn slow_passes(&self) -> u64 {
        self.slow_passes
    }
}
