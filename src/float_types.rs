//! Scalar type and the tolerance behind every near-zero test.

pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Relative tolerance of the geometry code, fixed on first use.
///
/// Intersections ask whether a cross product, triple product or dot product
/// is small next to the product of the magnitudes that went into it, so the
/// value bounds the sine of an angle and is the same for millimeters and
/// kilometers. At the default `1e-6` two planes closer than about 0.2
/// arcseconds to parallel are treated as parallel.
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    1e-6
}

/// The relative tolerance in effect.
///
/// `GROUNDFOV_TOLERANCE` read when the crate is compiled takes precedence over
/// the default. Values below [`EPSILON`] are raised to it.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(text) = option_env!("GROUNDFOV_TOLERANCE") {
            if let Ok(value) = Real::from_str(text) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Fix the tolerance before any geometry runs.
///
/// Has no effect once [`tolerance`] has been read or set.
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Machine epsilon of [`Real`]; also the coefficient of a default-constructed plane.
pub const EPSILON: Real = Real::EPSILON;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

/// Returns `true` if `value` is negligible next to `scale` under the crate tolerance.
///
/// A zero `scale` makes only an exact zero negligible.
#[inline]
pub fn is_negligible(value: Real, scale: Real) -> bool {
    value.abs() <= tolerance() * scale
}
