//! Distance estimation from the apparent size of a person.
//!
//! Under the pinhole model an object of real size `S` at distance `Z` spans
//! `f·S / (p·Z)` pixels, with `f` the focal length and `p` the pixel pitch.
//! Each helper solves that relation for one of its unknowns.

use crate::camera::Camera;
use crate::errors::{GeometryError, ensure_positive};
use crate::float_types::Real;
use serde::{Deserialize, Serialize};

/// The body measurement a pixel count refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// interpupillary distance
    EyesDistance,
    FaceWidth,
    /// standing height
    Height,
}

impl ScaleMode {
    /// Typical adult size in meters.
    pub const fn size(self) -> Real {
        match self {
            ScaleMode::EyesDistance => 0.063,
            ScaleMode::FaceWidth => 0.14,
            ScaleMode::Height => 1.72,
        }
    }
}

/// Distance in meters to a person whose `mode` measurement spans `pixels`.
pub fn camera_to_distance(camera: &Camera, pixels: Real, mode: ScaleMode) -> Result<Real, GeometryError> {
    ensure_positive("pixel count", pixels)?;
    Ok(camera.optics.focal_length * mode.size() / (camera.sensor.pixel_size * pixels))
}

/// Focal length needed for the `mode` measurement to span `pixels` at `distance`.
pub fn distance_to_focal(
    camera: &Camera,
    pixels: Real,
    distance: Real,
    mode: ScaleMode,
) -> Result<Real, GeometryError> {
    ensure_positive("pixel count", pixels)?;
    ensure_positive("distance", distance)?;
    Ok(camera.sensor.pixel_size * pixels * distance / mode.size())
}

/// Pixels spanned by the `mode` measurement of a person at `distance`.
pub fn distance_to_pixels(camera: &Camera, distance: Real, mode: ScaleMode) -> Result<Real, GeometryError> {
    ensure_positive("distance", distance)?;
    Ok(camera.optics.focal_length * mode.size() / (camera.sensor.pixel_size * distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::FrameTable;
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        Camera::from_preset(&FrameTable::standard(), "FHD", 3.0e-6, 4.0e-3).unwrap()
    }

    #[test]
    fn face_at_two_meters() {
        // 4mm * 0.14m / (3um * 2m)
        let px = distance_to_pixels(&camera(), 2.0, ScaleMode::FaceWidth).unwrap();
        assert_relative_eq!(px, 93.333_333_333_333_33, epsilon = 1e-9);
        let back = camera_to_distance(&camera(), px, ScaleMode::FaceWidth).unwrap();
        assert_relative_eq!(back, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn focal_for_target_size() {
        let f = distance_to_focal(&camera(), 200.0, 5.0, ScaleMode::Height).unwrap();
        assert_relative_eq!(f, 3.0e-6 * 200.0 * 5.0 / 1.72, epsilon = 1e-15);
    }

    #[test]
    fn rejects_non_positive_input() {
        assert!(camera_to_distance(&camera(), 0.0, ScaleMode::EyesDistance).is_err());
        assert!(distance_to_pixels(&camera(), -1.0, ScaleMode::Height).is_err());
        assert!(distance_to_focal(&camera(), 10.0, Real::NAN, ScaleMode::Height).is_err());
    }
}
