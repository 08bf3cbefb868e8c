//! Geometric primitives for 2D and 3D cartesian space.
//!
//! The axes follow the usual modelling-package convention: Z up, and a camera
//! with no rotation looks along +Y.

pub mod intersect;
pub mod line;
pub mod plane;
pub mod pyramid;
pub mod rotation;
pub mod trapezoid;
pub mod vector;

pub use intersect::{
    intersect_line_line, intersect_line_line_2d, intersect_plane_line, intersect_plane_plane,
};
pub use line::Line3D;
pub use plane::Plane;
pub use pyramid::SquarePyramid;
pub use rotation::{rotate_about_pivot_x, rotate_about_pivot_y};
pub use trapezoid::Trapezoid;
pub use vector::{Rectangle2D, cross, distance_2d, distance_3d, dot, point_in_rectangle_2d};
