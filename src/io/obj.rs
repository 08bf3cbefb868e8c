//! Plain-text Wavefront OBJ export of named triangles and line segments.
//!
//! Every entity becomes its own object and group. Vertices are written with
//! four decimals and a double space after `v`; face and line indices are
//! 1-based and keep counting across entities.

use super::IoError;
use crate::float_types::Real;
use crate::geometry::{SquarePyramid, Trapezoid};
use crate::placement::PlacementGrid;
use nalgebra::Point3;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Marker for the blank separator entries.
const BLANK: &str = "\n";

/// Accumulates OBJ entities in memory until written out.
///
/// ```rust
/// # use groundfov::io::ObjExport;
/// # use nalgebra::Point3;
/// let mut obj = ObjExport::new();
/// obj.add_line("edge", Point3::origin(), Point3::new(1.0, 0.0, 0.0)).unwrap();
/// assert!(obj.to_obj_string().contains("l 1 2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjExport {
    entries: Vec<String>,
    vertex_count: usize,
}

impl ObjExport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices emitted so far.
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn add_triangle(
        &mut self,
        name: &str,
        a: Point3<Real>,
        b: Point3<Real>,
        c: Point3<Real>,
    ) -> Result<(), IoError> {
        check_name(name)?;
        self.header("object", name);
        self.vertices(&[a, b, c]);
        let i = self.vertex_count;
        self.footer(name, format!("f {} {} {}", i + 1, i + 2, i + 3));
        self.vertex_count += 3;
        Ok(())
    }

    pub fn add_line(&mut self, name: &str, a: Point3<Real>, b: Point3<Real>) -> Result<(), IoError> {
        check_name(name)?;
        self.header("shape", name);
        self.vertices(&[a, b]);
        let i = self.vertex_count;
        self.footer(name, format!("l {} {}", i + 1, i + 2));
        self.vertex_count += 2;
        Ok(())
    }

    /// The four lateral faces, named `{prefix}_sca`, `{prefix}_sab` and so on.
    pub fn add_pyramid(&mut self, prefix: &str, pyramid: &SquarePyramid) -> Result<(), IoError> {
        for (face, [s, p, q]) in pyramid.faces() {
            self.add_triangle(&format!("{prefix}_{face}"), s, p, q)?;
        }
        Ok(())
    }

    /// The four edges in boundary order, named `{prefix}_ab`, `{prefix}_bd`,
    /// `{prefix}_dc` and `{prefix}_ca`.
    pub fn add_trapezoid(&mut self, prefix: &str, trapezoid: &Trapezoid) -> Result<(), IoError> {
        let t = trapezoid;
        for (edge, p, q) in [
            ("ab", t.a, t.b),
            ("bd", t.b, t.d),
            ("dc", t.d, t.c),
            ("ca", t.c, t.a),
        ] {
            self.add_line(&format!("{prefix}_{edge}"), p, q)?;
        }
        Ok(())
    }

    /// Outline of every placed footprint, named `{prefix}_{i}_{edge}`.
    pub fn add_footprints(&mut self, prefix: &str, grid: &PlacementGrid) -> Result<(), IoError> {
        for i in 0..grid.len() {
            let Some(corners) = grid.footprint_corners(i) else {
                break;
            };
            for edge in 0..corners.len() {
                let next = (edge + 1) % corners.len();
                self.add_line(&format!("{prefix}_{i}_{edge}"), corners[edge], corners[next])?;
            }
        }
        Ok(())
    }

    pub fn to_obj_string(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry);
            if entry != BLANK {
                out.push('\n');
            }
        }
        out
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), IoError> {
        writer.write_all(self.to_obj_string().as_bytes())?;
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn header(&mut self, kind: &str, name: &str) {
        self.entries.push("#".to_string());
        self.entries.push(format!("# {kind} {name}"));
        self.entries.push("#".to_string());
        self.entries.push(BLANK.to_string());
    }

    fn vertices(&mut self, points: &[Point3<Real>]) {
        for p in points {
            self.entries
                .push(format!("v  {:.4} {:.4} {:.4}", p.x, p.y, p.z));
        }
        self.entries.push(format!("# {} vertices", points.len()));
        self.entries.push(BLANK.to_string());
    }

    fn footer(&mut self, name: &str, element: String) {
        self.entries.push(format!("o {name}"));
        self.entries.push(format!("g {name}"));
        self.entries.push(element);
        self.entries.push(BLANK.to_string());
    }
}

fn check_name(name: &str) -> Result<(), IoError> {
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(IoError::MalformedInput(format!(
            "OBJ object names must be non-empty without whitespace, got {name:?}"
        )));
    }
    Ok(())
}
