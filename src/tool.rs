use egui::Pos2;

use crate::config::SketchConfig;
use crate::drawable::{Drawable, Sticker, Stroke};

/// The active tool, fully resolved against the config
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Marker { weight: f32 },
    Sticker { glyph: String, size: f32 },
}

impl Tool {
    /// Create the drawable a gesture starting at `pos` will own
    pub fn begin(&self, pos: Pos2) -> Drawable {
        match self {
            Tool::Marker { weight } => Stroke::new(pos, *weight).into(),
            Tool::Sticker { glyph, size } => Sticker::new(pos, glyph.clone(), *size).into(),
        }
    }
}

/// A toolbar preset the user can pick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ToolChoice {
    #[default]
    Thin,
    Thick,
    Sticker(String),
}

impl ToolChoice {
    pub fn resolve(&self, config: &SketchConfig) -> Tool {
        match self {
            ToolChoice::Thin => Tool::Marker {
                weight: config.thin_weight,
            },
            ToolChoice::Thick => Tool::Marker {
                weight: config.thick_weight,
            },
            ToolChoice::Sticker(glyph) => Tool::Sticker {
                glyph: glyph.clone(),
                size: config.sticker_size,
            },
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ToolChoice::Thin => "Thin",
            ToolChoice::Thick => "Thick",
            ToolChoice::Sticker(glyph) => glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_presets_use_config_weights() {
        let config = SketchConfig::default();
        assert_eq!(
            ToolChoice::Thick.resolve(&config),
            Tool::Marker {
                weight: config.thick_weight
            }
        );
    }

    #[test]
    fn test_begin_creates_matching_drawable() {
        let config = SketchConfig::default();
        let marker = ToolChoice::Thin.resolve(&config).begin(pos2(3.0, 4.0));
        assert_eq!(marker.as_stroke().unwrap().points(), &[pos2(3.0, 4.0)]);

        let sticker = ToolChoice::Sticker("☕".to_owned())
            .resolve(&config)
            .begin(pos2(3.0, 4.0));
        let sticker = sticker.as_sticker().unwrap();
        assert_eq!(sticker.glyph(), "☕");
        assert_eq!(sticker.position(), pos2(3.0, 4.0));
    }
}
