//! Intersections between planes and lines.
//!
//! All "is it zero?" decisions go through [`is_negligible`] with a scale made
//! of the magnitudes involved, so the tests read as "the sine of the angle is
//! below tolerance" and do not depend on the units of the inputs.

use crate::errors::GeometryError;
use crate::float_types::{Real, is_negligible};
use crate::geometry::{line::Line3D, plane::Plane};
use nalgebra::{Matrix2, Point2, Point3, Vector2};

/// Intersect two planes.
///
/// The line direction is `normal_a × normal_b`. A point on the line is found
/// by fixing one coordinate to zero and solving the remaining 2×2 system.
/// Elimination is tried in the order x, y, z and the first order whose minor
/// is not negligible is used, even if a later one is better conditioned.
///
/// Parallel (or coincident) planes give [`GeometryError::NoIntersection`].
pub fn intersect_plane_plane(a: &Plane, b: &Plane) -> Result<Line3D, GeometryError> {
    let (na, nb) = (a.normal, b.normal);
    // components of the cross product are the three 2x2 minors
    let direction = na.cross(&nb);
    let scale = na.norm() * nb.norm();
    let rhs = Vector2::new(-a.d, -b.d);

    let origin = if !is_negligible(direction.x, scale) {
        let yz = solve_2x2(Matrix2::new(na.y, na.z, nb.y, nb.z), rhs)?;
        Point3::new(0.0, yz.x, yz.y)
    } else if !is_negligible(direction.y, scale) {
        let zx = solve_2x2(Matrix2::new(na.z, na.x, nb.z, nb.x), rhs)?;
        Point3::new(zx.y, 0.0, zx.x)
    } else if !is_negligible(direction.z, scale) {
        let xy = solve_2x2(Matrix2::new(na.x, na.y, nb.x, nb.y), rhs)?;
        Point3::new(xy.x, xy.y, 0.0)
    } else {
        return Err(GeometryError::NoIntersection("planes are parallel"));
    };

    Line3D::new(origin, direction)
}

fn solve_2x2(m: Matrix2<Real>, rhs: Vector2<Real>) -> Result<Vector2<Real>, GeometryError> {
    m.lu()
        .solve(&rhs)
        .ok_or(GeometryError::NoIntersection("singular 2x2 system"))
}

/// Intersect two lines in 3D.
///
/// The lines must be coplanar (the triple product of the origin offset and
/// both directions vanishes) and not parallel (the directions have rank 2).
/// The parameter `t` of `a` is then solved from the two equations of the axis
/// pair where the lines are best separated, i.e. the largest component of
/// `dir_a × dir_b`, and the point is `a.point_at(t)`.
///
/// Parallel and skew lines give [`GeometryError::NoIntersection`].
pub fn intersect_line_line(a: &Line3D, b: &Line3D) -> Result<Point3<Real>, GeometryError> {
    let (da, db) = (a.direction, b.direction);
    let w = b.origin - a.origin;
    let n = da.cross(&db);
    let dir_scale = da.norm() * db.norm();

    if is_negligible(n.norm(), dir_scale) {
        return Err(GeometryError::NoIntersection("lines are parallel"));
    }
    if is_negligible(w.dot(&n), w.norm() * dir_scale) {
        let t = match n.iamax() {
            0 => (w.y * db.z - w.z * db.y) / n.x,
            1 => (w.z * db.x - w.x * db.z) / n.y,
            _ => (w.x * db.y - w.y * db.x) / n.z,
        };
        Ok(a.point_at(t))
    } else {
        Err(GeometryError::NoIntersection("lines are skew"))
    }
}

/// Intersect a line with a plane: `t = -(n·p0 + d) / (n·dir)`.
///
/// A line parallel to the plane (including one lying in it) gives
/// [`GeometryError::NoIntersection`].
pub fn intersect_plane_line(plane: &Plane, line: &Line3D) -> Result<Point3<Real>, GeometryError> {
    let along = plane.normal.dot(&line.direction);
    if is_negligible(along, plane.normal.norm() * line.direction.norm()) {
        return Err(GeometryError::NoIntersection("line is parallel to the plane"));
    }
    let t = -plane.signed_value(&line.origin) / along;
    Ok(line.point_at(t))
}

/// Intersect the infinite 2D lines through `p1, p2` and through `p3, p4`.
pub fn intersect_line_line_2d(
    p1: &Point2<Real>,
    p2: &Point2<Real>,
    p3: &Point2<Real>,
    p4: &Point2<Real>,
) -> Result<Point2<Real>, GeometryError> {
    let d12 = p2 - p1;
    let d34 = p4 - p3;
    let div = d12.x * d34.y - d34.x * d12.y;
    if is_negligible(div, d12.norm() * d34.norm()) {
        return Err(GeometryError::NoIntersection("2D lines are parallel"));
    }

    let c12 = p2.x * p1.y - p1.x * p2.y;
    let c34 = p4.x * p3.y - p3.x * p4.y;
    Ok(Point2::new(
        (c12 * d34.x - c34 * d12.x) / div,
        (c12 * d34.y - c34 * d12.y) / div,
    ))
}
