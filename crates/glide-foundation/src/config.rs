use crate::gesture_constants::{DEFAULT_INERTIA, REST_THRESHOLD};
use glide_animation::ExponentialDecaySpec;
use std::fmt;

/// Configuration for an [`InertialScroll`](crate::InertialScroll).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Fraction of the delta kept on each decay frame. Conventionally in `(0, 1)`.
    pub inertia: f64,
    /// Per-frame magnitude at or under which the decay loop stops rescheduling.
    /// `None` keeps the loop running until the next drag or disposal.
    pub rest_threshold: Option<f64>,
}

impl ScrollConfig {
    pub fn new(inertia: f64) -> Self {
        Self {
            inertia,
            ..Self::default()
        }
    }

    /// A configuration whose decay loop never settles on its own.
    pub fn unbounded(inertia: f64) -> Self {
        Self {
            inertia,
            rest_threshold: None,
        }
    }

    pub fn with_rest_threshold(mut self, rest_threshold: Option<f64>) -> Self {
        self.rest_threshold = rest_threshold;
        self
    }

    pub fn decay_spec(&self) -> ExponentialDecaySpec {
        ExponentialDecaySpec::unbounded(self.inertia).with_rest_threshold(self.rest_threshold)
    }

    /// Rejects values that would corrupt the running offset.
    ///
    /// An inertia outside `[0, 1)` is accepted: values at or above one never
    /// decay and values below zero flip direction every frame, both of which
    /// are legitimate if unusual effects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.inertia.is_finite() {
            return Err(ConfigError::NonFiniteInertia(self.inertia));
        }
        if let Some(threshold) = self.rest_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::InvalidRestThreshold(threshold));
            }
        }
        Ok(())
    }

    pub(crate) fn warn_if_unusual(&self) {
        if let Err(err) = self.validate() {
            log::warn!("scroll configuration is invalid: {err}");
        } else if !(0.0..1.0).contains(&self.inertia) {
            log::warn!(
                "inertia {} is outside [0, 1); released pans will not come to rest",
                self.inertia
            );
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            inertia: DEFAULT_INERTIA,
            rest_threshold: Some(REST_THRESHOLD),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonFiniteInertia(f64),
    InvalidRestThreshold(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFiniteInertia(value) => {
                write!(f, "inertia must be a finite number, got {value}")
            }
            ConfigError::InvalidRestThreshold(value) => {
                write!(f, "rest threshold must be finite and non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
