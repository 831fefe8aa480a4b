//! Pointer input and inertial panning gestures for Glide.
//!
//! [`InertialScroll`] is built once from a [`ScrollConfig`] and attached to a
//! [`FrameClock`](glide_core::FrameClock) and a callback. The resulting
//! [`ScrollHandler`] consumes pointer-move events: dragging with the primary
//! button reports the step delta immediately, and releasing hands the last
//! delta to a per-frame decay loop.

mod config;
pub mod gesture_constants;
pub mod gestures;
pub mod input;

pub use config::{ConfigError, ScrollConfig};
pub use gestures::{DecayLoop, InertialScroll, ScrollHandler, ScrollUpdate};
pub use input::{PointerButton, PointerButtons, PointerEvent};
