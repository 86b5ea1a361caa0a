use egui::{Color32, Pos2};

use crate::surface::Surface;

pub const STICKER_COLOR: Color32 = Color32::BLACK;

/// A glyph stamped onto the canvas. Dragging during its gesture moves it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    position: Pos2,
    glyph: String,
    size: f32,
}

impl Sticker {
    pub fn new(position: Pos2, glyph: impl Into<String>, size: f32) -> Self {
        Self {
            position,
            glyph: glyph.into(),
            size,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn extend(&mut self, pos: Pos2) {
        self.position = pos;
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.glyph(self.position, &self.glyph, self.size, STICKER_COLOR);
    }
}
