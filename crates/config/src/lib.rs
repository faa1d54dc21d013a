//! Shared configuration for Pathview
//!
//! This crate provides the single source of truth for the viewport size,
//! the synthetic path parameters, stroke colors, and frame cadence used by
//! the painting core and the host application.

mod env;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use env::{ENV_FPS, ENV_SEED, ENV_VIEWPORT, parse_viewport};

/// Default viewport width in pixels
pub const DEFAULT_WIDTH: u32 = 800;

/// Default viewport height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;

/// Default scale factor (1.0 = no scaling)
pub const DEFAULT_SCALE: f32 = 1.0;

/// Half of the virtual drawing surface in both axes. The path spans
/// `2 * DEFAULT_HALF_EXTENT` units, far beyond any single texture.
pub const DEFAULT_HALF_EXTENT: i32 = 3000;

/// Upper bound (exclusive) for a single random path step.
pub const DEFAULT_STEP: i32 = 100;

/// Width of the inner stroke. The outer stroke is twice as wide.
pub const DEFAULT_INNER_WIDTH: f32 = 4.0;

/// Target redraw cadence.
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Largest buffer dimension the display backend accepts as a texture.
pub const DEFAULT_MAX_TEXTURE_SIZE: u32 = 8192;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid viewport '{0}', expected <width>x<height>")]
    InvalidViewport(String),
    #[error("Invalid value for {var}: '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

/// Viewport configuration, as measured by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewport width in logical pixels
    pub width: u32,
    /// Viewport height in logical pixels
    pub height: u32,
    /// Scale factor for DPI scaling
    pub scale: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
        }
    }
}

impl ViewportConfig {
    /// Create a new viewport config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale: DEFAULT_SCALE,
        }
    }

    /// Get scaled width (physical pixels of the offscreen buffer)
    pub fn scaled_width(&self) -> u32 {
        (self.width as f32 * self.scale) as u32
    }

    /// Get scaled height (physical pixels of the offscreen buffer)
    pub fn scaled_height(&self) -> u32 {
        (self.height as f32 * self.scale) as u32
    }
}

/// Parameters for the synthetic staircase path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub half_extent: i32,
    pub step_x: i32,
    pub step_y: i32,
    /// Fixed seed for reproducible paths; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            half_extent: DEFAULT_HALF_EXTENT,
            step_x: DEFAULT_STEP,
            step_y: DEFAULT_STEP,
            seed: None,
        }
    }
}

/// Stroke and background colors as straight-alpha RGBA8
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub inner_width: f32,
    pub inner_color: [u8; 4],
    pub outer_color: [u8; 4],
    pub background: [u8; 4],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            inner_width: DEFAULT_INNER_WIDTH,
            inner_color: [0x00, 0x99, 0xcc, 0xff],
            outer_color: [0x33, 0xb5, 0xe5, 0xff],
            background: [0xf9, 0xf9, 0xf9, 0xff],
        }
    }
}

impl StyleConfig {
    pub fn outer_width(&self) -> f32 {
        self.inner_width * 2.0
    }
}

/// Redraw cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub target_fps: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
        }
    }
}

impl FrameConfig {
    /// Duration of one frame; a zero fps is treated as 1 fps
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}

/// Rendering limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub max_texture_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_texture_size: DEFAULT_MAX_TEXTURE_SIZE,
        }
    }
}

/// Complete configuration for one rendering session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub viewport: ViewportConfig,
    pub path: PathConfig,
    pub style: StyleConfig,
    pub frame: FrameConfig,
    pub render: RenderConfig,
}

impl SessionConfig {
    /// Parse a config document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config document from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Apply `PATHVIEW_*` environment overrides
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.viewport.width, DEFAULT_WIDTH);
        assert_eq!(config.viewport.height, DEFAULT_HEIGHT);
        assert_eq!(config.path.half_extent, 3000);
        assert_eq!(config.path.seed, None);
        assert_eq!(config.style.outer_width(), 8.0);
    }

    #[test]
    fn test_scaled_dimensions() {
        let mut config = ViewportConfig::default();
        config.scale = 2.0;
        assert_eq!(config.scaled_width(), 1600);
        assert_eq!(config.scaled_height(), 1200);
    }

    #[test]
    fn test_frame_interval() {
        let frame = FrameConfig::default();
        let ms = frame.interval().as_secs_f64() * 1000.0;
        assert!((ms - 16.667).abs() < 0.01);

        let zero = FrameConfig { target_fps: 0 };
        assert_eq!(zero.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_json() {
        let config = SessionConfig::from_json_str(
            r#"{ "viewport": { "width": 1024 }, "path": { "seed": 7 } }"#,
        )
        .unwrap();
        assert_eq!(config.viewport.width, 1024);
        assert_eq!(config.viewport.height, DEFAULT_HEIGHT);
        assert_eq!(config.path.seed, Some(7));
        assert_eq!(config.path.step_x, DEFAULT_STEP);
    }

    #[test]
    fn test_invalid_json() {
        let result = SessionConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = SessionConfig::from_file("/nonexistent/pathview.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
