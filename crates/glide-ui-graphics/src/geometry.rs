//! Geometric primitives: Point, Offset

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

/// A position in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// A displacement between two points.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    /// Returns true when neither component exceeds `threshold` in magnitude.
    pub fn is_within(&self, threshold: f64) -> bool {
        self.x.abs() <= threshold && self.y.abs() <= threshold
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        Offset {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;

    fn mul(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl MulAssign<f64> for Offset {
    fn mul_assign(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_difference_is_current_minus_previous() {
        let previous = Point::new(10.0, 40.0);
        let current = Point::new(25.0, 30.0);
        assert_eq!(current - previous, Offset::new(15.0, -10.0));
        assert_eq!(previous + (current - previous), current);
    }

    #[test]
    fn offset_scaling_applies_to_both_axes() {
        let mut offset = Offset::new(100.0, -20.0);
        offset *= 0.5;
        assert_eq!(offset, Offset::new(50.0, -10.0));
        assert_eq!(offset * 2.0, Offset::new(100.0, -20.0));
        assert_eq!(-offset, Offset::new(-50.0, 10.0));
    }

    #[test]
    fn is_within_bounds_both_components() {
        assert!(Offset::new(0.004, -0.009).is_within(0.01));
        assert!(Offset::new(0.004, -0.01).is_within(0.01));
        assert!(!Offset::new(0.004, -0.011).is_within(0.01));
        assert!(!Offset::new(1.0, 0.0).is_within(0.01));
        assert!(Offset::ZERO.is_within(0.0));
        assert!(!Offset::new(0.0, 1e-12).is_within(0.0));
    }
}
