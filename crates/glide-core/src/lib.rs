//! Frame scheduling primitives for Glide.
//!
//! The host (a browser, a test, a headless driver) owns the repaint cadence.
//! Everything else asks a [`FrameClock`] for "run this before the next frame"
//! and holds on to the returned [`FrameCallbackRegistration`] for as long as
//! the request should stay alive.

mod frame_callbacks;
mod frame_clock;
mod manual_scheduler;
mod platform;

pub use frame_callbacks::FrameCallbackQueue;
pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use manual_scheduler::ManualFrameScheduler;
pub use platform::FrameScheduler;

/// Identifier handed out for each frame callback request.
pub type FrameCallbackId = u64;

/// Nanoseconds per millisecond, for hosts that report frame time in millis.
pub const NANOS_PER_MILLI: u64 = 1_000_000;
