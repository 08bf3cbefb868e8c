//! Pinhole camera model: sensor, optics, and how the camera is mounted.
//!
//! Angles of view come out in radians; mount angles go in as degrees.

pub mod optics;
pub mod sensor;

pub use optics::Optics;
pub use sensor::{DEFAULT_FRAME, DEFAULT_PIXEL_SIZE, FrameResolution, FrameTable, Sensor};

use crate::errors::{GeometryError, ensure_positive};
use crate::float_types::Real;
use serde::{Deserialize, Serialize};

/// A sensor behind a lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub sensor: Sensor,
    pub optics: Optics,
}

impl Camera {
    pub const fn new(sensor: Sensor, optics: Optics) -> Self {
        Camera { sensor, optics }
    }

    /// Shorthand for a preset frame, a pixel pitch and a focal length.
    pub fn from_preset(
        table: &FrameTable,
        frame_type: &str,
        pixel_size: Real,
        focal_length: Real,
    ) -> Result<Self, GeometryError> {
        Ok(Camera {
            sensor: Sensor::from_preset(table, frame_type, pixel_size)?,
            optics: Optics::new(focal_length)?,
        })
    }

    /// Horizontal angle of view, `2·atan(w / 2f)`.
    pub fn fov_horizontal(&self) -> Real {
        angle_of_view(self.sensor.width(), self.optics.focal_length)
    }

    /// Vertical angle of view, `2·atan(h / 2f)`.
    pub fn fov_vertical(&self) -> Real {
        angle_of_view(self.sensor.height(), self.optics.focal_length)
    }
}

fn angle_of_view(size: Real, focal_length: Real) -> Real {
    2.0 * (size / (2.0 * focal_length)).atan()
}

/// Camera orientation in degrees.
///
/// Only `pitch` takes part in the ground computation; `roll` and `yaw` are
/// carried along for callers that record full mount poses.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CamAngle {
    /// tilt below the horizon, positive looking down
    pub pitch: Real,
    #[serde(default)]
    pub roll: Real,
    #[serde(default)]
    pub yaw: Real,
}

impl CamAngle {
    pub const fn from_pitch(pitch: Real) -> Self {
        CamAngle {
            pitch,
            roll: 0.0,
            yaw: 0.0,
        }
    }
}

/// Where the camera sits: height above the ground plane plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraMount {
    /// meters above `z = 0`
    pub altitude: Real,
    #[serde(flatten)]
    pub angle: CamAngle,
}

impl CameraMount {
    pub fn new(altitude: Real, angle: CamAngle) -> Result<Self, GeometryError> {
        ensure_positive("altitude", altitude)?;
        Ok(CameraMount { altitude, angle })
    }
}
