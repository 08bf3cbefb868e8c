//! Ground footprint of a pitched pinhole camera.
//!
//! The camera sits at `(0, 0, altitude)` and looks along +Y when unpitched.
//! Its viewing pyramid is cut by the ground plane `z = 0`; the four cut lines
//! bound a quadrilateral whose corners are the pairwise intersections of
//! adjacent lines.
//!
//! When the upper side of the pyramid never reaches the ground in front of the
//! camera, the far edge is replaced by a line parallel to X at the caller's
//! maximum visible distance. The true horizon is not modelled.

use crate::camera::{Camera, CameraMount};
use crate::errors::{GeometryError, ensure_positive};
use crate::float_types::{FRAC_PI_2, PI, Real, is_negligible};
use crate::geometry::{
    Line3D, Plane, SquarePyramid, Trapezoid, intersect_plane_line, intersect_plane_plane,
    rotate_about_pivot_x,
};
use crate::placement::PlacementGrid;
use log::debug;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Nominal distance to the base of the viewing pyramid, in meters.
pub const DEFAULT_PYRAMID_DEPTH: Real = 50.0;

/// Everything the ground computation needs, in plain numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundQuery {
    /// meters
    pub altitude: Real,
    /// degrees, positive looking down
    pub pitch_deg: Real,
    /// radians
    pub fov_horizontal: Real,
    /// radians
    pub fov_vertical: Real,
    /// far edge distance used when the view reaches the horizon
    pub max_distance: Real,
    pub pyramid_depth: Real,
}

impl GroundQuery {
    pub const fn new(
        altitude: Real,
        pitch_deg: Real,
        fov_horizontal: Real,
        fov_vertical: Real,
        max_distance: Real,
    ) -> Self {
        GroundQuery {
            altitude,
            pitch_deg,
            fov_horizontal,
            fov_vertical,
            max_distance,
            pyramid_depth: DEFAULT_PYRAMID_DEPTH,
        }
    }

    /// Take the angles of view from `camera` and altitude and pitch from `mount`.
    pub fn from_camera(camera: &Camera, mount: &CameraMount, max_distance: Real) -> Self {
        Self::new(
            mount.altitude,
            mount.angle.pitch,
            camera.fov_horizontal(),
            camera.fov_vertical(),
            max_distance,
        )
    }

    pub const fn with_pyramid_depth(mut self, pyramid_depth: Real) -> Self {
        self.pyramid_depth = pyramid_depth;
        self
    }

    /// Optical center.
    pub fn apex(&self) -> Point3<Real> {
        Point3::new(0.0, 0.0, self.altitude)
    }

    /// Which way the far edge is obtained for this pitch.
    ///
    /// The upper side of the view descends at `pitch - fov_v/2` below the
    /// horizontal. It counts as reaching the ground only when the sine of that
    /// angle is above the crate tolerance, the same test the plane
    /// intersection applies, so a nearly level upper side uses the horizon line.
    pub fn case(&self) -> GroundCase {
        let descent = self.pitch_deg.to_radians() - self.fov_vertical / 2.0;
        if descent > 0.0 && !is_negligible(descent.sin(), 1.0) {
            GroundCase::Finite
        } else {
            GroundCase::Horizon
        }
    }

    fn validate(&self) -> Result<(), GeometryError> {
        ensure_positive("altitude", self.altitude)?;
        ensure_positive("max distance", self.max_distance)?;
        ensure_positive("pyramid depth", self.pyramid_depth)?;
        for (name, fov) in [
            ("horizontal FOV", self.fov_horizontal),
            ("vertical FOV", self.fov_vertical),
        ] {
            ensure_positive(name, fov)?;
            if fov >= PI {
                return Err(GeometryError::InvalidParameter(format!(
                    "{name} must be below pi, got {fov}"
                )));
            }
        }
        let pitch = self.pitch_deg.to_radians();
        if !pitch.is_finite() || pitch.abs() >= FRAC_PI_2 {
            return Err(GeometryError::InvalidParameter(format!(
                "pitch must lie strictly between -90 and 90 degrees, got {}",
                self.pitch_deg
            )));
        }
        if pitch + self.fov_vertical / 2.0 <= 0.0 {
            return Err(GeometryError::InvalidParameter(format!(
                "camera pitched {} degrees up sees no ground",
                -self.pitch_deg
            )));
        }
        Ok(())
    }
}

/// How the far edge of the ground footprint was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroundCase {
    /// The upper side of the view meets the ground in front of the camera.
    Finite,
    /// The far edge is the synthetic line at the maximum visible distance.
    Horizon,
}

/// Result of [`compute_ground_trapezoid`].
#[derive(Debug, Clone, PartialEq)]
pub struct GroundView {
    pub query: GroundQuery,
    pub case: GroundCase,
    pub pyramid: SquarePyramid,
    pub trapezoid: Trapezoid,
    /// square meters
    pub area: Real,
    /// Where the optical axis hits the ground, if it descends at all.
    pub aim_point: Option<Point3<Real>>,
}

/// Compute the part of the ground plane seen by the camera described in `query`.
///
/// Corners follow [`Trapezoid`]'s naming: `A = upper ∩ left`, `B = upper ∩ right`,
/// `C = lower ∩ left`, `D = lower ∩ right`.
///
/// # Errors
/// [`GeometryError::InvalidParameter`] for out-of-range inputs, including a
/// maximum distance that does not reach past the near edge in the horizon
/// case. Geometric failures of the intersections are passed through.
pub fn compute_ground_trapezoid(query: &GroundQuery) -> Result<GroundView, GeometryError> {
    query.validate()?;
    let apex = query.apex();
    let pyramid = SquarePyramid::from_fov(
        apex,
        query.fov_vertical,
        query.fov_horizontal,
        query.pyramid_depth,
        query.pitch_deg,
    )?;
    let ground = Plane::ground();

    let left = intersect_plane_plane(&pyramid.sca, &ground)?;
    let right = intersect_plane_plane(&pyramid.sbd, &ground)?;
    let lower = intersect_plane_plane(&pyramid.sdc, &ground)?;

    let far_edge = match query.case() {
        GroundCase::Finite => match intersect_plane_plane(&pyramid.sab, &ground) {
            Ok(line) => Some(line),
            // rounding at the tolerance boundary
            Err(GeometryError::NoIntersection(_)) => None,
            Err(e) => return Err(e),
        },
        GroundCase::Horizon => None,
    };
    let (case, upper) = match far_edge {
        Some(line) => (GroundCase::Finite, line),
        None => (
            GroundCase::Horizon,
            Line3D::new(
                Point3::new(apex.x, apex.y + query.max_distance, 0.0),
                Vector3::x(),
            )?,
        ),
    };
    debug!(
        "ground case {case:?}: left {:?} right {:?} lower {:?} upper {:?}",
        left, right, lower, upper
    );

    let trapezoid = Trapezoid::from_lines(&left, &upper, &right, &lower)?;

    if case == GroundCase::Horizon {
        let near = trapezoid.c.y.max(trapezoid.d.y) - apex.y;
        if query.max_distance <= near {
            return Err(GeometryError::InvalidParameter(format!(
                "max distance {} does not reach past the near edge at {near}",
                query.max_distance
            )));
        }
    }

    let area = trapezoid.area();
    let aim_point = aim_point(&ground, &apex, query.pitch_deg)?;
    debug!(
        "ground trapezoid A {} B {} C {} D {}, area {area}",
        trapezoid.a, trapezoid.b, trapezoid.c, trapezoid.d
    );

    Ok(GroundView {
        query: *query,
        case,
        pyramid,
        trapezoid,
        area,
        aim_point,
    })
}

fn aim_point(
    ground: &Plane,
    apex: &Point3<Real>,
    pitch_deg: Real,
) -> Result<Option<Point3<Real>>, GeometryError> {
    if pitch_deg <= 0.0 {
        return Ok(None);
    }
    let ahead = rotate_about_pivot_x(&(apex + Vector3::y()), pitch_deg, apex);
    let axis = Line3D::from_points(*apex, ahead)?;
    intersect_plane_line(ground, &axis).map(Some)
}

impl GroundView {
    /// Serializable summary of this view.
    pub fn report(&self) -> GroundReport {
        let t = &self.trapezoid;
        GroundReport {
            case: self.case,
            altitude: self.query.altitude,
            pitch: self.query.pitch_deg,
            fov_horizontal: self.query.fov_horizontal,
            fov_vertical: self.query.fov_vertical,
            corners: [t.a, t.b, t.c, t.d].map(|p| [p.x, p.y, p.z]),
            area: self.area,
            aim_point: self.aim_point.map(|p| [p.x, p.y, p.z]),
            placement: None,
        }
    }
}

/// JSON-friendly view summary. Corners are listed `A, B, C, D`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundReport {
    pub case: GroundCase,
    pub altitude: Real,
    pub pitch: Real,
    pub fov_horizontal: Real,
    pub fov_vertical: Real,
    pub corners: [[Real; 3]; 4],
    pub area: Real,
    pub aim_point: Option<[Real; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<PlacementReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub footprint: [Real; 2],
    pub rows: usize,
    pub count: usize,
    pub centers: Vec<[Real; 3]>,
}

impl GroundReport {
    pub fn with_placement(mut self, grid: &PlacementGrid) -> Self {
        self.placement = Some(PlacementReport {
            footprint: [grid.footprint.width, grid.footprint.depth],
            rows: grid.rows,
            count: grid.len(),
            centers: grid.positions.iter().map(|p| [p.x, p.y, p.z]).collect(),
        });
        self
    }
}
