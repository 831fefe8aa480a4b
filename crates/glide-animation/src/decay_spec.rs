//! Decay animation specification for release-after-drag panning.

use glide_ui_graphics::Offset;

/// Upper bound on frames simulated by [`ExponentialDecaySpec::frames_to_rest`].
pub const MAX_SETTLE_FRAMES: u32 = 10_000;

/// Trait for decay animation specifications.
///
/// A decay animation has no fixed target: it starts from the delta of the
/// last drag step and shrinks it once per frame.
pub trait DecayAnimationSpec {
    /// Magnitude at or below which both axes count as settled, if the decay settles at all.
    fn abs_rest_threshold(&self) -> Option<f64>;

    /// Delta reported on the frame after `delta`.
    fn next_delta(&self, delta: Offset) -> Offset;

    /// Whether a loop that just reported `delta` should stop rescheduling.
    fn is_at_rest(&self, delta: Offset) -> bool {
        match self.abs_rest_threshold() {
            Some(threshold) => delta.is_within(threshold),
            None => false,
        }
    }
}

/// Per-frame multiplicative decay: `delta(i) = seed * k^i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecaySpec {
    coefficient: f64,
    rest_threshold: Option<f64>,
}

impl ExponentialDecaySpec {
    /// Rest threshold in CSS pixels per frame.
    pub const DEFAULT_REST_THRESHOLD: f64 = 0.01;

    /// Create a spec that settles once both axes drop to
    /// [`DEFAULT_REST_THRESHOLD`](Self::DEFAULT_REST_THRESHOLD).
    pub fn new(coefficient: f64) -> Self {
        Self {
            coefficient,
            rest_threshold: Some(Self::DEFAULT_REST_THRESHOLD),
        }
    }

    /// Create a spec that never settles on its own.
    pub fn unbounded(coefficient: f64) -> Self {
        Self {
            coefficient,
            rest_threshold: None,
        }
    }

    pub fn with_rest_threshold(mut self, rest_threshold: Option<f64>) -> Self {
        self.rest_threshold = rest_threshold;
        self
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Delta reported on decay frame `frame` (1-indexed) for a loop seeded with `seed`.
    pub fn delta_at_frame(&self, seed: Offset, frame: u32) -> Offset {
        seed * self.coefficient.powi(frame as i32)
    }

    /// Total displacement added over the first `frames` decay frames:
    /// `seed * (k + k^2 + ... + k^frames)`.
    pub fn distance_after_frames(&self, seed: Offset, frames: u32) -> Offset {
        let k = self.coefficient;
        let sum = if (1.0 - k).abs() < f64::EPSILON {
            frames as f64
        } else {
            k * (1.0 - k.powi(frames as i32)) / (1.0 - k)
        };
        seed * sum
    }

    /// Limit of [`distance_after_frames`](Self::distance_after_frames), when it converges.
    pub fn total_distance(&self, seed: Offset) -> Option<Offset> {
        let k = self.coefficient;
        if k.abs() < 1.0 {
            Some(seed * (k / (1.0 - k)))
        } else {
            None
        }
    }

    /// Number of frames a loop seeded with `seed` reports before it settles.
    ///
    /// Steps the same recurrence the loop runs, so rounding matches exactly.
    /// Returns `None` when the decay never settles within [`MAX_SETTLE_FRAMES`].
    pub fn frames_to_rest(&self, seed: Offset) -> Option<u32> {
        self.rest_threshold?;
        let mut delta = seed;
        for frame in 1..=MAX_SETTLE_FRAMES {
            delta = self.next_delta(delta);
            if self.is_at_rest(delta) {
                return Some(frame);
            }
        }
        None
    }
}

impl DecayAnimationSpec for ExponentialDecaySpec {
    fn abs_rest_threshold(&self) -> Option<f64> {
        self.rest_threshold
    }

    fn next_delta(&self, delta: Offset) -> Offset {
        delta * self.coefficient
    }
}
