//! Pure geometry for Glide
//!
//! Positions and displacements are kept in CSS pixels as `f64`, which is the
//! numeric type browsers hand out for pointer coordinates.

mod geometry;

pub use geometry::*;
