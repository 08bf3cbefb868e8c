//! The square pyramid spanned by a camera's field of view.

use crate::errors::{GeometryError, ensure_positive};
use crate::float_types::Real;
use crate::geometry::{plane::Plane, rotation::rotate_about_pivot_x};
use nalgebra::Point3;

/// Square pyramid in 3D cartesian space, apex `s` over the base `a, b, c, d`.
///
/// ```text
///    A-----B
///    |\   /|
///    | \ / |
///    |  S  |
///    | / \ |
///    |/   \|
///    C-----D
/// ```
///
/// For a camera pyramid `A`/`B` are the upper corners and `C`/`D` the lower
/// ones, left to right as seen from the apex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePyramid {
    pub a: Point3<Real>,
    pub b: Point3<Real>,
    pub c: Point3<Real>,
    pub d: Point3<Real>,
    pub s: Point3<Real>,
    /// left side
    pub sca: Plane,
    /// upper side
    pub sab: Plane,
    /// right side
    pub sbd: Plane,
    /// lower side
    pub sdc: Plane,
}

impl SquarePyramid {
    /// Build the pyramid and its four lateral planes.
    pub fn new(
        a: Point3<Real>,
        b: Point3<Real>,
        c: Point3<Real>,
        d: Point3<Real>,
        s: Point3<Real>,
    ) -> Result<Self, GeometryError> {
        Ok(SquarePyramid {
            a,
            b,
            c,
            d,
            s,
            sca: Plane::from_points(s, c, a)?,
            sab: Plane::from_points(s, a, b)?,
            sbd: Plane::from_points(s, b, d)?,
            sdc: Plane::from_points(s, d, c)?,
        })
    }

    /// Build the viewing pyramid of a camera at `s`.
    ///
    /// The un-rotated pyramid looks along +Y: its base is the rectangle at
    /// distance `depth` with half extents `depth·tan(fov_horizontal/2)` and
    /// `depth·tan(fov_vertical/2)`. The four base corners (not the apex) are
    /// then pitched about `s` with [`rotate_about_pivot_x`]. Angles of view
    /// are in radians, `pitch_deg` in degrees.
    pub fn from_fov(
        s: Point3<Real>,
        fov_vertical: Real,
        fov_horizontal: Real,
        depth: Real,
        pitch_deg: Real,
    ) -> Result<Self, GeometryError> {
        ensure_positive("pyramid depth", depth)?;
        let half_w = depth * (fov_horizontal / 2.0).tan();
        let half_h = depth * (fov_vertical / 2.0).tan();
        let y = s.y + depth;

        let a = Point3::new(s.x - half_w, y, s.z + half_h);
        let b = Point3::new(s.x + half_w, y, s.z + half_h);
        let c = Point3::new(s.x - half_w, y, s.z - half_h);
        let d = Point3::new(s.x + half_w, y, s.z - half_h);

        let [a, b, c, d] = [a, b, c, d].map(|p| rotate_about_pivot_x(&p, pitch_deg, &s));
        Self::new(a, b, c, d, s)
    }

    /// The lateral faces as `(name, [apex, corner, corner])`, apex first.
    pub const fn faces(&self) -> [(&'static str, [Point3<Real>; 3]); 4] {
        [
            ("sca", [self.s, self.c, self.a]),
            ("sab", [self.s, self.a, self.b]),
            ("sbd", [self.s, self.b, self.d]),
            ("sdc", [self.s, self.d, self.c]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unpitched_pyramid_is_symmetric() {
        let s = Point3::new(0.0, 0.0, 2.0);
        let p = SquarePyramid::from_fov(s, 1.0, 1.5, 10.0, 0.0).unwrap();
        assert_relative_eq!(p.a.x, -p.b.x);
        assert_relative_eq!(p.c.z - s.z, -(p.a.z - s.z));
        assert_relative_eq!(p.a.y, 10.0);
        assert_relative_eq!(p.a.z - s.z, 10.0 * (0.5 as Real).tan());
    }

    #[test]
    fn lateral_planes_contain_their_points() {
        let s = Point3::new(0.0, 0.0, 4.0);
        let p = SquarePyramid::from_fov(s, 1.2, 1.5, 50.0, 30.0).unwrap();
        for (plane, points) in [
            (p.sca, [p.s, p.c, p.a]),
            (p.sab, [p.s, p.a, p.b]),
            (p.sbd, [p.s, p.b, p.d]),
            (p.sdc, [p.s, p.d, p.c]),
        ] {
            let scale = plane.normal.norm();
            for q in points {
                assert!(plane.signed_value(&q).abs() < 1e-9 * scale);
            }
        }
    }

    #[test]
    fn pitch_lowers_the_base() {
        let s = Point3::new(0.0, 0.0, 4.0);
        let flat = SquarePyramid::from_fov(s, 1.2, 1.5, 50.0, 0.0).unwrap();
        let down = SquarePyramid::from_fov(s, 1.2, 1.5, 50.0, 45.0).unwrap();
        assert!(down.a.z < flat.a.z);
        assert!(down.c.z < flat.c.z);
        assert_eq!(down.s, s);
    }

    #[test]
    fn zero_fov_is_degenerate() {
        let s = Point3::new(0.0, 0.0, 4.0);
        assert!(matches!(
            SquarePyramid::from_fov(s, 0.0, 1.0, 50.0, 0.0),
            Err(GeometryError::DegeneratePlane { .. })
        ));
        assert!(SquarePyramid::from_fov(s, 1.0, 1.0, -1.0, 0.0).is_err());
    }
}
