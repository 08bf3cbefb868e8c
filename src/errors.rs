//! Geometry errors

use crate::float_types::Real;
use nalgebra::Point3;

/// All the possible failures of the geometric calculator.
///
/// Every variant is a local, pure-computation failure; nothing here wraps I/O.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (DegeneratePlane) The three points are collinear or coincident
    #[error("(DegeneratePlane) Points {a}, {b}, {c} do not define a plane")]
    DegeneratePlane {
        a: Point3<Real>,
        b: Point3<Real>,
        c: Point3<Real>,
    },
    /// (DegenerateLine) The direction vector is zero
    #[error("(DegenerateLine) Line through {0} has a zero direction vector")]
    DegenerateLine(Point3<Real>),
    /// (NoIntersection) Parallel or skew entities, or an axis solve on a negligible coefficient
    #[error("(NoIntersection) {0}")]
    NoIntersection(&'static str),
    /// (InvalidParameter) A physical input is out of its admissible range
    #[error("(InvalidParameter) {0}")]
    InvalidParameter(String),
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn ensure_positive(name: &str, value: Real) -> Result<Real, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidParameter(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}
