use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable pointing at an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Settings for the canvas, the marker presets and the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct SketchConfig {
    /// On-screen canvas size in points
    pub canvas_size: [u32; 2],
    /// Magnification applied to the canvas when exporting
    pub export_scale: u32,
    pub export_filename: String,
    /// Directory the native build writes exports into
    pub export_dir: PathBuf,
    pub thin_weight: f32,
    pub thick_weight: f32,
    /// Glyph size of stickers in points
    pub sticker_size: f32,
    pub stickers: Vec<String>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256, 256],
            export_scale: 4,
            export_filename: "sketchpad.png".to_owned(),
            export_dir: PathBuf::from("."),
            thin_weight: 2.0,
            thick_weight: 6.0,
            sticker_size: 32.0,
            stickers: vec!["⭐".to_owned(), "☕".to_owned(), "♥".to_owned()],
        }
    }
}

impl SketchConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load the config named by `SKETCHPAD_CONFIG`, or the defaults if unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::load(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_size[0] == 0 || self.canvas_size[1] == 0 {
            return Err(ConfigError::Invalid {
                field: "canvas_size",
                reason: format!("{:?} has a zero dimension", self.canvas_size),
            });
        }
        if self.export_scale == 0 {
            return Err(ConfigError::Invalid {
                field: "export_scale",
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.export_filename.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "export_filename",
                reason: "must not be empty".to_owned(),
            });
        }
        for (field, weight) in [("thin_weight", self.thin_weight), ("thick_weight", self.thick_weight)] {
            if weight.is_nan() || weight <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{weight} is not a positive line weight"),
                });
            }
        }
        if self.sticker_size.is_nan() || self.sticker_size <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "sticker_size",
                reason: format!("{} is not a positive size", self.sticker_size),
            });
        }
        Ok(())
    }

    pub fn canvas_vec(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_size[0] as f32, self.canvas_size[1] as f32)
    }
}
