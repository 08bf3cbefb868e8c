//! Parametric lines in 3D.

use crate::errors::GeometryError;
use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A line in 3D cartesian space in parametric form:
///
/// ```text
/// x = x0 + a·t
/// y = y0 + b·t
/// z = z0 + c·t
/// ```
///
/// `origin` is `(x0, y0, z0)` and `direction` is `(a, b, c)`. The direction is
/// never the zero vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3D {
    pub origin: Point3<Real>,
    pub direction: Vector3<Real>,
}

impl Line3D {
    /// Create a line from a point and a direction vector.
    pub fn new(origin: Point3<Real>, direction: Vector3<Real>) -> Result<Self, GeometryError> {
        if direction.norm_squared() == 0.0 || !direction.iter().all(|v| v.is_finite()) {
            return Err(GeometryError::DegenerateLine(origin));
        }
        Ok(Line3D { origin, direction })
    }

    /// Create the line through `p0` and `p1`, oriented from `p0` to `p1`.
    pub fn from_points(p0: Point3<Real>, p1: Point3<Real>) -> Result<Self, GeometryError> {
        Self::new(p0, p1 - p0)
    }

    /// Evaluate the line at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point3<Real> {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_hits_both_points() {
        let p0 = Point3::new(1.0, 2.0, 3.0);
        let p1 = Point3::new(4.0, 0.0, -1.0);
        let line = Line3D::from_points(p0, p1).unwrap();
        assert_eq!(line.point_at(0.0), p0);
        assert_eq!(line.point_at(1.0), p1);
        assert_eq!(line.point_at(0.5), Point3::new(2.5, 1.0, 1.0));
    }

    #[test]
    fn equal_points_are_rejected() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(
            Line3D::from_points(p, p),
            Err(GeometryError::DegenerateLine(p))
        );
    }
}
