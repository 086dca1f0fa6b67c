//! slidewipe - position synchronization for compare sliders.
//!
//! Two overlapping visual items, one draggable handle, one authoritative
//! normalized position. This crate owns the hard part of that widget: the
//! engine that turns pointer drags, hover moves, resize events, and
//! externally-set positions into a consistent percentage plus the two pixel
//! outputs (clip boundary, handle offset) that must always agree with it.
//! Rendering, styling, and listener plumbing stay with the host behind two
//! small ports.
//!
//! This crate is organized into several modules:
//! - `types` - Orientation, container geometry snapshot, event targets
//! - `config` - Per-instance configuration with serde round-tripping
//! - `error` - Configuration validation errors
//! - `surface` - The geometry/output port hosts implement
//! - `engine` - The state machine and positioning pipeline
//! - `constants` - Position range and default values
//! - `perf` - Optional positioning-pass profiling
//!
//! ## Example
//!
//! ```ignore
//! use slidewipe::{PointerTarget, SliderConfig, SliderEngine};
//!
//! let config = SliderConfig::default();
//! config.validate()?;
//! let mut engine = SliderEngine::new(surface, config)
//!     .on_position_change(|pct| println!("revealed {pct:.1}%"));
//!
//! engine.resync(); // apply the initial position once layout exists
//! if engine.handle_pointer_down(x, y, PointerTarget::Container) {
//!     // prevent default, route window-level move/up events back in
//! }
//! ```

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod perf;
pub mod surface;
pub mod types;

pub use config::SliderConfig;
pub use engine::{
    BindingLifecycle, DragState, NoBinding, PositionCallback, Projection, SliderEngine,
    WindowBinding,
};
pub use error::{ConfigError, ConfigResult};
pub use surface::SliderSurface;
pub use types::{ContainerRect, InteractiveTarget, Orientation, PointerTarget};
