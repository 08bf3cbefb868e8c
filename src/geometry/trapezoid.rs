//! The quadrilateral a viewing pyramid cuts out of the ground.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::geometry::{intersect::intersect_line_line, line::Line3D};
use approx::{AbsDiffEq, RelativeEq};
use geo::{LineString, Polygon as GeoPolygon};
use nalgebra::{Point2, Point3};

/// A quadrilateral in 3D cartesian space.
///
/// ```text
///    A-----B      far edge
///    |     |
///    |     |
///    C-----D      near edge
/// ```
///
/// Named after the usual shape of a camera's ground footprint; nothing forces
/// the sides to be parallel. The boundary runs `A → B → D → C`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    pub a: Point3<Real>,
    pub b: Point3<Real>,
    pub c: Point3<Real>,
    pub d: Point3<Real>,
}

/// The unit square, far edge at `y = 1`.
impl Default for Trapezoid {
    fn default() -> Self {
        Trapezoid {
            a: Point3::new(0.0, 1.0, 0.0),
            b: Point3::new(1.0, 1.0, 0.0),
            c: Point3::new(0.0, 0.0, 0.0),
            d: Point3::new(1.0, 0.0, 0.0),
        }
    }
}

impl Trapezoid {
    pub const fn new(a: Point3<Real>, b: Point3<Real>, c: Point3<Real>, d: Point3<Real>) -> Self {
        Trapezoid { a, b, c, d }
    }

    /// Build the corners from the four boundary lines:
    /// `A = ca ∩ ab`, `B = ab ∩ bd`, `C = ca ∩ dc`, `D = bd ∩ dc`.
    pub fn from_lines(
        ca: &Line3D,
        ab: &Line3D,
        bd: &Line3D,
        dc: &Line3D,
    ) -> Result<Self, GeometryError> {
        Ok(Trapezoid {
            a: intersect_line_line(ca, ab)?,
            b: intersect_line_line(ab, bd)?,
            c: intersect_line_line(ca, dc)?,
            d: intersect_line_line(bd, dc)?,
        })
    }

    /// Corners in boundary order `A, B, D, C`.
    pub const fn boundary(&self) -> [Point3<Real>; 4] {
        [self.a, self.b, self.d, self.c]
    }

    /// Area as the sum of the triangles `ABD` and `ADC`, each taken as half
    /// the magnitude of a cross product, so the winding does not matter.
    pub fn area(&self) -> Real {
        let ab = self.b - self.a;
        let ad = self.d - self.a;
        let ac = self.c - self.a;
        0.5 * ab.cross(&ad).norm() + 0.5 * ad.cross(&ac).norm()
    }

    /// Project onto the XY plane as a closed `geo` polygon.
    pub fn to_geo_polygon(&self) -> GeoPolygon<Real> {
        let mut ring: Vec<(Real, Real)> = self.boundary().iter().map(|p| (p.x, p.y)).collect();
        ring.push((self.a.x, self.a.y));
        GeoPolygon::new(LineString::from(ring), vec![])
    }

    /// Inclusive containment test of an XY point for a convex quadrilateral.
    ///
    /// A point within `slack` (in length units) of an edge counts as inside.
    pub fn contains_point(&self, p: &Point2<Real>, slack: Real) -> bool {
        let ring = self.boundary().map(|q| Point2::new(q.x, q.y));
        let mut sign = 0.0;
        for i in 0..ring.len() {
            let start = ring[i];
            let edge = ring[(i + 1) % ring.len()] - start;
            let length = edge.norm();
            if length == 0.0 {
                continue;
            }
            // signed distance of p from the edge line
            let side = edge.perp(&(p - start)) / length;
            if side.abs() <= slack {
                continue;
            }
            if sign == 0.0 {
                sign = side.signum();
            } else if side.signum() != sign {
                return false;
            }
        }
        true
    }
}

impl AbsDiffEq for Trapezoid {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Point3::<Real>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.boundary()
            .iter()
            .zip(other.boundary().iter())
            .all(|(p, q)| p.abs_diff_eq(q, epsilon))
    }
}

impl RelativeEq for Trapezoid {
    fn default_max_relative() -> Self::Epsilon {
        Point3::<Real>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.boundary()
            .iter()
            .zip(other.boundary().iter())
            .all(|(p, q)| p.relative_eq(q, epsilon, max_relative))
    }
}
