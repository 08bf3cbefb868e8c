//! Optical parameters of the pinhole model.

use crate::errors::{GeometryError, ensure_positive};
use crate::float_types::Real;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optics {
    /// focal length in meters
    pub focal_length: Real,
}

impl Optics {
    pub fn new(focal_length: Real) -> Result<Self, GeometryError> {
        ensure_positive("focal length", focal_length)?;
        Ok(Optics { focal_length })
    }
}
