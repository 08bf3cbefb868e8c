//! Ground-plane geometry of a **pinhole camera**: which part of the floor a
//! pitched camera sees, how large that part is, and how many fixed-size
//! footprints fit into it.
//!
//! The camera's field of view is modelled as a square pyramid. Its four side
//! planes are cut by the ground plane `z = 0` and the cut lines bound a
//! [`Trapezoid`](geometry::Trapezoid). When the view reaches the horizon the
//! far edge is replaced by a line at a caller-supplied maximum distance.
//!
//! ```rust
//! use groundfov::camera::{CamAngle, Camera, CameraMount, FrameTable};
//! use groundfov::ground::{GroundCase, GroundQuery, compute_ground_trapezoid};
//! use groundfov::placement::{Footprint, place_footprints};
//!
//! # fn main() -> Result<(), groundfov::errors::GeometryError> {
//! let camera = Camera::from_preset(&FrameTable::standard(), "s2592", 2.0e-6, 2.8e-3)?;
//! let mount = CameraMount::new(4.0, CamAngle::from_pitch(75.0))?;
//! let view = compute_ground_trapezoid(&GroundQuery::from_camera(&camera, &mount, 10.0))?;
//! assert_eq!(view.case, GroundCase::Finite);
//!
//! let grid = place_footprints(&view.trapezoid, &Footprint::square(0.5)?)?;
//! assert!(view.area > 0.0 && !grid.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! #### Default
//! - **obj-io**: Wavefront `.obj` export of pyramids, trapezoids and footprints
//!
//! # Frame
//! Z is up and an unpitched camera looks along +Y. Positive pitch tilts the
//! view down. Lengths are meters, FOVs radians, mount angles degrees.

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod camera;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod ground;
pub mod human;
pub mod io;
pub mod placement;

pub use errors::GeometryError;
pub use ground::{GroundCase, GroundQuery, GroundView, compute_ground_trapezoid};
pub use placement::{Footprint, PlacementGrid, place_footprints};
