//! Runtime configuration.
//!
//! Every section carries `#[serde(default)]`, so a configuration file only
//! needs the keys it wants to change:
//!
//! ```json
//! { "frame_delay_us": 30000, "camera": { "focal_distance": 80 } }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::Result;
use crate::math::vec3::Vec3;
use crate::render::RasterizerType;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pause after each frame, in microseconds.
    pub frame_delay_us: u64,
    /// `[width, height]` used when the terminal size cannot be queried.
    pub fallback_size: Option<(usize, usize)>,
    /// Line rasterization algorithm.
    pub rasterizer: RasterizerType,
    pub camera: CameraConfig,
    pub plot: PlotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_delay_us: 50_000,
            fallback_size: None,
            rasterizer: RasterizerType::default(),
            camera: CameraConfig::default(),
            plot: PlotConfig::default(),
        }
    }
}

impl Config {
    /// Reads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_micros(self.frame_delay_us)
    }
}

/// Starting camera for 3D scenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// World-frame location `[x, y, z]`.
    pub location: [f32; 3],
    pub focal_distance: i32,
    /// Degrees the camera travels around the Z axis per frame.
    pub orbit_step_deg: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            location: [6.0, 2.0, 3.0],
            focal_distance: 60,
            orbit_step_deg: 3.0,
        }
    }
}

impl CameraConfig {
    pub fn camera(&self) -> Camera {
        Camera::new(Vec3::from(self.location), self.focal_distance)
    }

    pub fn orbit_step(&self) -> f32 {
        self.orbit_step_deg.to_radians()
    }
}

/// Labels and scale for the time-series plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub y_label: String,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            y_label: "Value".to_string(),
            min_y: 0.0,
            max_y: 10.0,
        }
    }
}
