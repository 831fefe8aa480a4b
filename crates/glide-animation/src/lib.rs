//! Decay physics for Glide
//!
//! Glide's inertia is frame-based rather than time-based: every repaint the
//! carried delta is multiplied by a fixed coefficient. The helpers here give
//! the closed forms of that recurrence so callers can reason about a fling
//! without stepping it.

mod decay_spec;

pub use decay_spec::{DecayAnimationSpec, ExponentialDecaySpec, MAX_SETTLE_FRAMES};
