//! Inline style values derived from a scroll notification.

use glide_foundation::ScrollUpdate;
use glide_ui_graphics::Offset;

/// Transform applied to each child of the panned container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildTransform {
    /// `rotateX({abs.y}deg)`
    RotateX,
    /// `rotateY({abs.x}deg)`
    RotateY,
}

impl ChildTransform {
    /// Renders this transform function for the given absolute offset.
    pub fn render(&self, abs: Offset) -> String {
        match self {
            ChildTransform::RotateX => format!("rotateX({}deg)", abs.y),
            ChildTransform::RotateY => format!("rotateY({}deg)", abs.x),
        }
    }
}

/// Value for the container's `left` property.
pub fn container_left(abs: Offset) -> String {
    format!("{}px", abs.x)
}

/// Value for each child's `transform` property; empty when no transforms are configured.
pub fn child_transform(transforms: &[ChildTransform], abs: Offset) -> String {
    transforms
        .iter()
        .map(|transform| transform.render(abs))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every style value written for one notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollStyle {
    /// Container `left`.
    pub left: String,
    /// Child `transform`.
    pub child_transform: String,
}

impl ScrollStyle {
    /// Computes the styles for `update`. Only the absolute offset is used.
    pub fn from_update(transforms: &[ChildTransform], update: &ScrollUpdate) -> Self {
        Self {
            left: container_left(update.abs),
            child_transform: child_transform(transforms, update.abs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_uses_only_horizontal_offset() {
        assert_eq!(container_left(Offset::new(195.0, 40.0)), "195px");
        assert_eq!(container_left(Offset::new(-12.5, 0.0)), "-12.5px");
    }

    #[test]
    fn no_transforms_render_empty_string() {
        assert_eq!(child_transform(&[], Offset::new(10.0, 20.0)), "");
    }

    #[test]
    fn transforms_join_with_single_space() {
        let transforms = [ChildTransform::RotateX, ChildTransform::RotateY];
        assert_eq!(
            child_transform(&transforms, Offset::new(30.0, -15.0)),
            "rotateX(-15deg) rotateY(30deg)"
        );
    }

    #[test]
    fn style_ignores_delta() {
        let update = ScrollUpdate {
            delta: Offset::new(5.0, 5.0),
            abs: Offset::new(90.25, 0.0),
        };
        let style = ScrollStyle::from_update(&[ChildTransform::RotateY], &update);
        assert_eq!(style.left, "90.25px");
        assert_eq!(style.child_transform, "rotateY(90.25deg)");
    }
}
