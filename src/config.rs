//! JSON runtime configuration for the `groundfov` binary.

use crate::camera::{
    CamAngle, Camera, CameraMount, DEFAULT_FRAME, DEFAULT_PIXEL_SIZE, FrameTable,
};
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::ground::{DEFAULT_PYRAMID_DEPTH, GroundQuery};
use crate::placement::Footprint;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(#[from] GeometryError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraConfig {
    /// preset name looked up in the standard table plus `frames`
    #[serde(default = "default_frame")]
    pub frame: String,
    #[serde(default = "default_pixel_size")]
    pub pixel_size: Real,
    pub focal_length: Real,
}

fn default_frame() -> String {
    DEFAULT_FRAME.to_string()
}

const fn default_pixel_size() -> Real {
    DEFAULT_PIXEL_SIZE
}

const fn default_pyramid_depth() -> Real {
    DEFAULT_PYRAMID_DEPTH
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OutputConfig {
    pub obj_out: Option<PathBuf>,
    pub json_out: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    pub camera: CameraConfig,
    pub mount: CameraMount,
    pub max_distance: Real,
    #[serde(default = "default_pyramid_depth")]
    pub pyramid_depth: Real,
    #[serde(default)]
    pub footprint: Option<Footprint>,
    /// extra frame presets, merged over the standard ones
    #[serde(default)]
    pub frames: FrameTable,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for RuntimeConfig {
    /// A 5 MP sensor behind a 2.8 mm lens, four meters up and pitched 75 degrees.
    fn default() -> Self {
        RuntimeConfig {
            camera: CameraConfig {
                frame: "s2592".to_string(),
                pixel_size: 2.0e-6,
                focal_length: 2.8e-3,
            },
            mount: CameraMount {
                altitude: 4.0,
                angle: CamAngle::from_pitch(75.0),
            },
            max_distance: 10.0,
            pyramid_depth: DEFAULT_PYRAMID_DEPTH,
            footprint: Some(Footprint {
                width: 0.5,
                depth: 0.5,
            }),
            frames: FrameTable::default(),
            output: OutputConfig::default(),
        }
    }
}

impl RuntimeConfig {
    pub fn frame_table(&self) -> FrameTable {
        FrameTable::standard().merged(&self.frames)
    }

    pub fn build_camera(&self) -> Result<Camera, GeometryError> {
        Camera::from_preset(
            &self.frame_table(),
            &self.camera.frame,
            self.camera.pixel_size,
            self.camera.focal_length,
        )
    }

    pub fn ground_query(&self) -> Result<GroundQuery, ConfigError> {
        let camera = self.build_camera()?;
        let mount = CameraMount::new(self.mount.altitude, self.mount.angle)?;
        Ok(GroundQuery::from_camera(&camera, &mount, self.max_distance)
            .with_pyramid_depth(self.pyramid_depth))
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: RuntimeConfig =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(config)
}
