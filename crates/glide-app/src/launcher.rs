//! Settings and launcher for mounting an inertial scroll on a page.

use crate::style::{ChildTransform, ScrollStyle};
use glide_core::FrameClock;
use glide_foundation::gesture_constants::REST_THRESHOLD;
use glide_foundation::{ConfigError, InertialScroll, ScrollConfig, ScrollHandler, ScrollUpdate};
use std::fmt;

/// Configuration for a mounted scroll.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    /// Id of the element whose mouse moves drive the pan.
    pub target_id: String,
    /// Id of the element whose `left` offset is panned.
    pub container_id: String,
    /// Fraction of the delta kept per decay frame.
    pub inertia: f64,
    /// Per-frame magnitude at which the decay loop stops; `None` never stops.
    pub rest_threshold: Option<f64>,
    /// Transforms applied to every child of the container, joined in order.
    pub child_transforms: Vec<ChildTransform>,
}

impl AppSettings {
    /// The handler configuration these settings describe.
    pub fn scroll_config(&self) -> ScrollConfig {
        ScrollConfig::new(self.inertia).with_rest_threshold(self.rest_threshold)
    }

    /// Validates the handler configuration and the element ids.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.target_id.is_empty() {
            return Err(SettingsError::EmptyTargetId);
        }
        if self.container_id.is_empty() {
            return Err(SettingsError::EmptyContainerId);
        }
        self.scroll_config().validate()?;
        Ok(())
    }

    /// Attaches a handler whose notifications reach `apply` as ready-to-write styles.
    pub fn attach(
        &self,
        clock: FrameClock,
        mut apply: impl FnMut(&ScrollStyle) + 'static,
    ) -> ScrollHandler {
        let transforms = self.child_transforms.clone();
        InertialScroll::new(self.scroll_config()).attach(clock, move |update: &ScrollUpdate| {
            apply(&ScrollStyle::from_update(&transforms, update));
        })
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            target_id: "scrollable".into(),
            container_id: "items".into(),
            inertia: 0.95,
            rest_threshold: Some(REST_THRESHOLD),
            child_transforms: Vec::new(),
        }
    }
}

/// Reasons [`AppSettings::validate`] rejects a configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsError {
    /// `target_id` is empty.
    EmptyTargetId,
    /// `container_id` is empty.
    EmptyContainerId,
    /// The scroll configuration itself is invalid.
    Scroll(ConfigError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::EmptyTargetId => write!(f, "target id must not be empty"),
            SettingsError::EmptyContainerId => write!(f, "container id must not be empty"),
            SettingsError::Scroll(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Scroll(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for SettingsError {
    fn from(err: ConfigError) -> Self {
        SettingsError::Scroll(err)
    }
}

/// Builder for [`AppSettings`] that mounts the scroll on the current page.
///
/// # Example
///
/// ```no_run
/// use glide_app::{AppLauncher, ChildTransform};
///
/// let settings = AppLauncher::new()
///     .with_target("scrollable")
///     .with_container("items")
///     .with_inertia(0.9)
///     .with_child_transform(ChildTransform::RotateY)
///     .settings()
///     .clone();
/// assert_eq!(settings.inertia, 0.9);
/// ```
pub struct AppLauncher {
    settings: AppSettings,
}

impl AppLauncher {
    /// Create a launcher with default settings.
    pub fn new() -> Self {
        Self {
            settings: AppSettings::default(),
        }
    }

    /// Set the element that receives mouse moves.
    pub fn with_target(mut self, target_id: impl Into<String>) -> Self {
        self.settings.target_id = target_id.into();
        self
    }

    /// Set the element that gets panned.
    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.settings.container_id = container_id.into();
        self
    }

    /// Set the per-frame inertia.
    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.settings.inertia = inertia;
        self
    }

    /// Set the rest threshold; `None` keeps released pans drifting forever.
    pub fn with_rest_threshold(mut self, rest_threshold: Option<f64>) -> Self {
        self.settings.rest_threshold = rest_threshold;
        self
    }

    /// Append a child transform.
    pub fn with_child_transform(mut self, transform: ChildTransform) -> Self {
        self.settings.child_transforms.push(transform);
        self
    }

    /// The settings collected so far.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Mount on the current page.
    #[cfg(feature = "web")]
    pub fn mount(self) -> Result<crate::web::MountedScroll, wasm_bindgen::JsValue> {
        crate::web::mount(self.settings)
    }
}

impl Default for AppLauncher {
    fn default() -> Self {
        Self::new()
    }
}
