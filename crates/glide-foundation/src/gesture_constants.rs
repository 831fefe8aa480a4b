//! Shared gesture constants.
//!
//! Distances are CSS pixels, rates are per repaint.

/// Inertia used when a [`ScrollConfig`](crate::ScrollConfig) is built with defaults.
///
/// Each decay frame keeps this fraction of the previous frame's delta.
pub const DEFAULT_INERTIA: f64 = 0.8;

/// Per-frame delta below which a released pan is considered settled.
pub const REST_THRESHOLD: f64 = glide_animation::ExponentialDecaySpec::DEFAULT_REST_THRESHOLD;
