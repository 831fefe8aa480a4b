#![deny(missing_docs)]

//! Drag-to-pan with inertia for DOM containers.
//!
//! [`AppLauncher`] collects the settings; with the `web` feature it mounts an
//! inertial scroll handler on a page: mouse moves over the target element pan
//! the container's `left` offset and restyle its children.

mod launcher;
mod style;

pub use launcher::{AppLauncher, AppSettings, SettingsError};
pub use style::{child_transform, container_left, ChildTransform, ScrollStyle};

#[cfg(feature = "web")]
pub mod web;
