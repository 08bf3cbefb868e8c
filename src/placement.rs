//! Greedy row-by-row tiling of a ground trapezoid with fixed-size footprints.
//!
//! Rows start at the near edge and march toward the far edge one footprint
//! depth at a time. Each row is limited left and right by where the slanted
//! sides cross the row's two bounding scan lines; footprints are then laid
//! left to right until the next one would stick out. The result is a simple
//! deterministic packing, not an optimal one.

use crate::errors::{GeometryError, ensure_positive};
use crate::float_types::{Real, tolerance};
use crate::geometry::{Line3D, Trapezoid, intersect_line_line};
use log::{debug, trace};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Largest grid [`place_footprints`] will build.
///
/// A camera pitched just past the point where its upper side meets the ground
/// sees a patch tens of kilometers deep; tiling that is refused instead.
pub const MAX_FOOTPRINTS: usize = 1_000_000;

/// Size of one placed item on the ground, e.g. the space a standing person takes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// extent along X, meters
    pub width: Real,
    /// extent along Y, meters
    pub depth: Real,
}

impl Footprint {
    pub fn new(width: Real, depth: Real) -> Result<Self, GeometryError> {
        ensure_positive("footprint width", width)?;
        ensure_positive("footprint depth", depth)?;
        Ok(Footprint { width, depth })
    }

    pub fn square(size: Real) -> Result<Self, GeometryError> {
        Self::new(size, size)
    }
}

/// Footprints placed by [`place_footprints`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementGrid {
    pub footprint: Footprint,
    /// number of row bands that fit between the near and far edges
    pub rows: usize,
    /// footprint centers on the ground, row-major from the near-left corner
    pub positions: Vec<Point3<Real>>,
}

impl PlacementGrid {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Corners of footprint `i`, counter-clockwise from its near-left corner.
    pub fn footprint_corners(&self, i: usize) -> Option<[Point3<Real>; 4]> {
        let center = self.positions.get(i)?;
        let (hw, hd) = (self.footprint.width / 2.0, self.footprint.depth / 2.0);
        Some([
            Point3::new(center.x - hw, center.y - hd, center.z),
            Point3::new(center.x + hw, center.y - hd, center.z),
            Point3::new(center.x + hw, center.y + hd, center.z),
            Point3::new(center.x - hw, center.y + hd, center.z),
        ])
    }
}

/// Tile `trapezoid` with copies of `footprint`.
///
/// The trapezoid is read as a ground footprint: near edge `C–D`, far edge
/// `A–B`, left side `C→A`, right side `D→B`.
///
/// # Errors
/// [`GeometryError::InvalidParameter`] for a non-positive footprint, a
/// trapezoid with a non-finite corner, or one large enough to hold more than
/// [`MAX_FOOTPRINTS`] footprints by area or more than that many rows.
pub fn place_footprints(
    trapezoid: &Trapezoid,
    footprint: &Footprint,
) -> Result<PlacementGrid, GeometryError> {
    let footprint = Footprint::new(footprint.width, footprint.depth)?;
    if let Some(p) = trapezoid.boundary().iter().find(|p| !p.coords.iter().all(|v| v.is_finite())) {
        return Err(GeometryError::InvalidParameter(format!(
            "trapezoid corner {p} is not finite"
        )));
    }
    let left = Line3D::from_points(trapezoid.c, trapezoid.a)?;
    let right = Line3D::from_points(trapezoid.d, trapezoid.b)?;

    let near = trapezoid.c.y.max(trapezoid.d.y);
    let far = trapezoid.a.y.min(trapezoid.b.y);
    let slack = tolerance();

    let limit = MAX_FOOTPRINTS as Real;
    let by_area = trapezoid.area() / (footprint.width * footprint.depth);
    let by_rows = (far - near) / footprint.depth;
    if by_area > limit || by_rows > limit {
        return Err(GeometryError::InvalidParameter(format!(
            "{} m^2 in {}x{} footprints exceeds the limit of {MAX_FOOTPRINTS}",
            trapezoid.area(),
            footprint.width,
            footprint.depth
        )));
    }

    let mut rows = 0;
    let mut positions = Vec::new();
    loop {
        let y = near + rows as Real * footprint.depth;
        let y_next = y + footprint.depth;
        if y_next > far + slack {
            break;
        }

        let (x_min, x_max) = row_span(&left, &right, y, y_next)?;
        let before = positions.len();
        let mut x = x_min;
        while x + footprint.width <= x_max + slack {
            positions.push(Point3::new(
                x + footprint.width / 2.0,
                y + footprint.depth / 2.0,
                0.0,
            ));
            x += footprint.width;
        }
        trace!(
            "row {rows} y [{y}, {y_next}] x [{x_min}, {x_max}]: {} footprints",
            positions.len() - before
        );
        rows += 1;
    }
    debug!(
        "placed {} footprints of {}x{} in {rows} rows",
        positions.len(),
        footprint.width,
        footprint.depth
    );

    Ok(PlacementGrid {
        footprint,
        rows,
        positions,
    })
}

/// Usable X range of the band between `y0` and `y1`.
fn row_span(
    left: &Line3D,
    right: &Line3D,
    y0: Real,
    y1: Real,
) -> Result<(Real, Real), GeometryError> {
    let mut x_min = Real::NEG_INFINITY;
    let mut x_max = Real::INFINITY;
    for y in [y0, y1] {
        let scan = Line3D::new(Point3::new(0.0, y, 0.0), Vector3::x())?;
        x_min = x_min.max(intersect_line_line(&scan, left)?.x);
        x_max = x_max.min(intersect_line_line(&scan, right)?.x);
    }
    Ok((x_min, x_max))
}
