//! Rotations about an arbitrary pivot (basis translation + axis rotation).
//!
//! The sign convention is the one the camera pitch needs: with Z up and the
//! camera looking along +Y, a positive angle about X tilts +Y toward -Z, i.e.
//! the camera looks down. Relative to the pivot this maps
//! `(x, y, z)` to `(x, y·cosθ + z·sinθ, -y·sinθ + z·cosθ)`.

use crate::float_types::Real;
use nalgebra::{Point3, Rotation3, Vector3};

/// Rotate `point` by `angle_deg` degrees about the X axis through `pivot`.
pub fn rotate_about_pivot_x(point: &Point3<Real>, angle_deg: Real, pivot: &Point3<Real>) -> Point3<Real> {
    let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), -angle_deg.to_radians());
    pivot + rotation * (point - pivot)
}

/// Rotate `point` by `angle_deg` degrees about the Y axis through `pivot`.
///
/// Same convention as [`rotate_about_pivot_x`]: relative to the pivot,
/// `(x, y, z)` maps to `(x·cosθ - z·sinθ, y, x·sinθ + z·cosθ)`.
pub fn rotate_about_pivot_y(point: &Point3<Real>, angle_deg: Real, pivot: &Point3<Real>) -> Point3<Real> {
    let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), -angle_deg.to_radians());
    pivot + rotation * (point - pivot)
}
