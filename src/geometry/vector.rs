//! Point/vector helpers shared by the rest of the geometry.
//!
//! Points are stored as `nalgebra::Point3`; the free functions here treat a
//! point as the position vector from the origin.

use crate::float_types::Real;
use nalgebra::{Point2, Point3};

/// Dot product of two position vectors.
#[inline]
pub fn dot(a: &Point3<Real>, b: &Point3<Real>) -> Real {
    a.coords.dot(&b.coords)
}

/// Cross product of two position vectors, returned as a point.
#[inline]
pub fn cross(a: &Point3<Real>, b: &Point3<Real>) -> Point3<Real> {
    Point3::from(a.coords.cross(&b.coords))
}

/// Euclidean distance between two 2D points.
#[inline]
pub fn distance_2d(a: &Point2<Real>, b: &Point2<Real>) -> Real {
    nalgebra::distance(a, b)
}

/// Euclidean distance between two 3D points.
#[inline]
pub fn distance_3d(a: &Point3<Real>, b: &Point3<Real>) -> Real {
    nalgebra::distance(a, b)
}

/// Axis-aligned rectangle in 2D given by two corners.
///
/// `p_0` is expected to hold the minimum coordinates and `p_1` the maximum;
/// nothing is swapped on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle2D {
    pub p_0: Point2<Real>,
    pub p_1: Point2<Real>,
}

impl Rectangle2D {
    pub const fn new(p_0: Point2<Real>, p_1: Point2<Real>) -> Self {
        Rectangle2D { p_0, p_1 }
    }

    /// Inclusive containment test, see [`point_in_rectangle_2d`].
    pub fn contains(&self, p: &Point2<Real>) -> bool {
        point_in_rectangle_2d(self, p)
    }
}

/// Inclusive boundary test: `p_0.x <= p.x <= p_1.x` and the same for y.
pub fn point_in_rectangle_2d(r: &Rectangle2D, p: &Point2<Real>) -> bool {
    r.p_0.x <= p.x && p.x <= r.p_1.x && r.p_0.y <= p.y && p.y <= r.p_1.y
}
