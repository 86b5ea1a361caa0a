use egui::{Color32, Pos2};

use crate::surface::Surface;
use crate::tool::Tool;

pub const PREVIEW_COLOR: Color32 = Color32::from_gray(140);

/// Cursor indicator for the active tool. Never part of the picture.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPreview {
    position: Pos2,
    tool: Tool,
}

impl ToolPreview {
    pub fn new(position: Pos2, tool: Tool) -> Self {
        Self { position, tool }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match &self.tool {
            Tool::Marker { weight } => {
                // Outline the marker tip so thin weights stay visible
                surface.circle_outline(self.position, (weight / 2.0).max(1.0), 1.0, PREVIEW_COLOR);
            }
            Tool::Sticker { glyph, size } => {
                surface.glyph(self.position, glyph, *size, PREVIEW_COLOR);
            }
        }
    }
}
