//! Planes in implicit form `ax + by + cz + d = 0`.

use crate::errors::GeometryError;
use crate::float_types::{EPSILON, Real, is_negligible};
use nalgebra::{Point3, Vector3};

/// A plane in 3D cartesian space.
///
/// `normal` holds the `(a, b, c)` coefficients and `d` the constant term of
/// `ax + by + cz + d = 0`. The normal is not normalized: planes built from
/// points keep the magnitude of the cross product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3<Real>,
    pub d: Real,
}

impl Default for Plane {
    /// A plane with every coefficient set to machine epsilon (never the zero plane).
    fn default() -> Self {
        Plane {
            normal: Vector3::repeat(EPSILON),
            d: EPSILON,
        }
    }
}

impl Plane {
    pub fn new(a: Real, b: Real, c: Real, d: Real) -> Self {
        Plane {
            normal: Vector3::new(a, b, c),
            d,
        }
    }

    /// The ground plane `z = 0` with its normal pointing up.
    pub fn ground() -> Self {
        Plane::new(0.0, 0.0, 1.0, 0.0)
    }

    /// Create a plane through three points.
    ///
    /// The normal follows the right-hand rule: `(b - a) × (c - a)`, and
    /// `d = -(normal · a)`. Collinear or coincident points give
    /// [`GeometryError::DegeneratePlane`].
    pub fn from_points(
        a: Point3<Real>,
        b: Point3<Real>,
        c: Point3<Real>,
    ) -> Result<Self, GeometryError> {
        let ab = b - a;
        let ac = c - a;
        let normal = ab.cross(&ac);

        if is_negligible(normal.norm(), ab.norm() * ac.norm()) {
            return Err(GeometryError::DegeneratePlane { a, b, c });
        }

        let d = -normal.dot(&a.coords);
        Ok(Plane { normal, d })
    }

    #[inline]
    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// `[a, b, c, d]`
    pub fn coefficients(&self) -> [Real; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.d]
    }

    /// `ax + by + cz + d` at `p`; zero on the plane, sign tells the side.
    #[inline]
    pub fn signed_value(&self, p: &Point3<Real>) -> Real {
        self.normal.dot(&p.coords) + self.d
    }

    /// Solve for `z` given `x` and `y`.
    pub fn get_z(&self, x: Real, y: Real) -> Result<Real, GeometryError> {
        let c = self.solve_coefficient(self.normal.z, "plane is parallel to the z axis")?;
        Ok((-self.normal.x * x - self.normal.y * y - self.d) / c)
    }

    /// Solve for `y` given `x` and `z`.
    pub fn get_y(&self, x: Real, z: Real) -> Result<Real, GeometryError> {
        let b = self.solve_coefficient(self.normal.y, "plane is parallel to the y axis")?;
        Ok((-self.normal.x * x - self.normal.z * z - self.d) / b)
    }

    /// Solve for `x` given `y` and `z`.
    pub fn get_x(&self, y: Real, z: Real) -> Result<Real, GeometryError> {
        let a = self.solve_coefficient(self.normal.x, "plane is parallel to the x axis")?;
        Ok((-self.normal.y * y - self.normal.z * z - self.d) / a)
    }

    fn solve_coefficient(
        &self,
        coefficient: Real,
        reason: &'static str,
    ) -> Result<Real, GeometryError> {
        if is_negligible(coefficient, self.normal.norm()) {
            Err(GeometryError::NoIntersection(reason))
        } else {
            Ok(coefficient)
        }
    }
}
