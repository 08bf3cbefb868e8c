//! Test support library
//! Scenario builders and float helpers shared by the integration tests.
#![allow(dead_code)]

use groundfov::{
    camera::{CamAngle, Camera, CameraMount, FrameTable},
    float_types::Real,
    ground::{GroundQuery, GroundView, compute_ground_trapezoid},
};

/// Angles of view of the 2592x1944 sensor with 2 um pixels behind a 2.8 mm lens.
pub const FOV_H: Real = 1.493683226525587;
pub const FOV_V: Real = 1.2137611379999267;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// The 5 MP camera most scenarios are built around.
pub fn s2592_camera() -> Camera {
    Camera::from_preset(&FrameTable::standard(), "s2592", 2.0e-6, 2.8e-3).unwrap()
}

pub fn query(altitude: Real, pitch: Real, max_distance: Real) -> GroundQuery {
    let mount = CameraMount::new(altitude, CamAngle::from_pitch(pitch)).unwrap();
    GroundQuery::from_camera(&s2592_camera(), &mount, max_distance)
}

pub fn view(altitude: Real, pitch: Real, max_distance: Real) -> GroundView {
    compute_ground_trapezoid(&query(altitude, pitch, max_distance)).unwrap()
}

/// Camera at head height looking straight ahead.
pub fn level_view() -> GroundView {
    view(1.72, 0.0, 10.0)
}

/// Camera four meters up looking steeply down.
pub fn steep_view() -> GroundView {
    view(4.0, 75.0, 10.0)
}
