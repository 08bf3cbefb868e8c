//! Sensor parameters and the frame-resolution presets they are built from.

use crate::errors::{GeometryError, ensure_positive};
use crate::float_types::Real;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default pixel pitch in meters.
pub const DEFAULT_PIXEL_SIZE: Real = 2.8e-6;

/// Default preset name.
pub const DEFAULT_FRAME: &str = "QQVGA";

/// Active frame size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameResolution {
    pub width: u32,
    pub height: u32,
}

impl FrameResolution {
    pub const fn new(width: u32, height: u32) -> Self {
        FrameResolution { width, height }
    }
}

/// Immutable lookup table from preset name to [`FrameResolution`].
///
/// Tables are plain values: build one (usually from [`FrameTable::standard`])
/// and pass it by reference wherever a sensor is constructed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameTable {
    frames: BTreeMap<String, FrameResolution>,
}

impl FrameTable {
    /// The common frame presets.
    pub fn standard() -> Self {
        let frames = [
            ("QQVGA", 160, 120),
            ("nHD", 640, 360),
            ("XGA", 1024, 768),
            ("SXGA", 1280, 1024),
            ("SXGAminus", 1280, 960),
            ("s2592", 2592, 1944),
            ("WXGA_1152", 1152, 768),
            ("WXGA_1280", 1280, 800),
            ("HD", 1280, 720),
            ("FHD", 1920, 1080),
            ("s1440", 1440, 720),
            ("s2560", 2560, 1080),
        ]
        .into_iter()
        .map(|(name, w, h)| (name.to_string(), FrameResolution::new(w, h)))
        .collect();
        FrameTable { frames }
    }

    /// A copy of this table with `name` added (or replaced).
    pub fn with(mut self, name: impl Into<String>, frame: FrameResolution) -> Self {
        self.frames.insert(name.into(), frame);
        self
    }

    /// Merge every entry of `other` into a copy of this table; `other` wins on conflicts.
    pub fn merged(mut self, other: &FrameTable) -> Self {
        self.frames
            .extend(other.frames.iter().map(|(k, v)| (k.clone(), *v)));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FrameResolution> {
        self.frames.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// The sensor: active frame size and pixel pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensor {
    pub frame: FrameResolution,
    /// pixel size in meters
    pub pixel_size: Real,
}

impl Default for Sensor {
    fn default() -> Self {
        Sensor {
            frame: FrameResolution::new(160, 120),
            pixel_size: DEFAULT_PIXEL_SIZE,
        }
    }
}

impl Sensor {
    pub fn new(frame: FrameResolution, pixel_size: Real) -> Result<Self, GeometryError> {
        if frame.width == 0 || frame.height == 0 {
            return Err(GeometryError::InvalidParameter(format!(
                "frame must be non-empty, got {}x{}",
                frame.width, frame.height
            )));
        }
        ensure_positive("pixel size", pixel_size)?;
        Ok(Sensor { frame, pixel_size })
    }

    /// Look `frame_type` up in `table`.
    pub fn from_preset(
        table: &FrameTable,
        frame_type: &str,
        pixel_size: Real,
    ) -> Result<Self, GeometryError> {
        let frame = table.get(frame_type).ok_or_else(|| {
            GeometryError::InvalidParameter(format!("unknown frame preset {frame_type:?}"))
        })?;
        Self::new(*frame, pixel_size)
    }

    /// Physical width of the active area in meters.
    pub fn width(&self) -> Real {
        Real::from(self.frame.width) * self.pixel_size
    }

    /// Physical height of the active area in meters.
    pub fn height(&self) -> Real {
        Real::from(self.frame.height) * self.pixel_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_presets() {
        let table = FrameTable::standard();
        assert_eq!(table.len(), 12);
        assert_eq!(table.get("FHD"), Some(&FrameResolution::new(1920, 1080)));
        assert_eq!(table.get("QQVGA"), Some(&FrameResolution::new(160, 120)));
        assert!(table.get("8K").is_none());
    }

    #[test]
    fn table_is_extended_by_value() {
        let base = FrameTable::standard();
        let extended = base.clone().with("square", FrameResolution::new(512, 512));
        assert!(base.get("square").is_none());
        assert_eq!(extended.len(), base.len() + 1);
    }

    #[test]
    fn sensor_from_preset() {
        let sensor = Sensor::from_preset(&FrameTable::standard(), "s2592", 2.0e-6).unwrap();
        assert_eq!(sensor.frame, FrameResolution::new(2592, 1944));
        assert!((sensor.width() - 5.184e-3).abs() < 1e-12);
        assert!((sensor.height() - 3.888e-3).abs() < 1e-12);
    }

    #[test]
    fn sensor_rejects_bad_input() {
        let table = FrameTable::standard();
        assert!(Sensor::from_preset(&table, "nope", 2.0e-6).is_err());
        assert!(Sensor::from_preset(&table, "HD", 0.0).is_err());
        assert!(Sensor::new(FrameResolution::new(0, 10), 1e-6).is_err());
    }

    #[test]
    fn default_sensor_matches_default_preset() {
        let table = FrameTable::standard();
        assert_eq!(table.get(DEFAULT_FRAME), Some(&Sensor::default().frame));
    }
}
