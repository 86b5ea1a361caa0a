use egui::{Color32, Pos2};

use super::Surface;

/// One call received by a [`RecordingSurface`]. Colors are dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Fill,
    Line { from: Pos2, to: Pos2, width: f32 },
    Glyph { center: Pos2, text: String, size: f32 },
    Circle { center: Pos2, radius: f32 },
}

/// Surface that records draw calls instead of drawing them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Line { .. }))
            .count()
    }

    pub fn glyph_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Glyph { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill(&mut self, _color: Color32) {
        self.calls.push(DrawCall::Fill);
    }

    fn line_segment(&mut self, from: Pos2, to: Pos2, width: f32, _color: Color32) {
        self.calls.push(DrawCall::Line { from, to, width });
    }

    fn glyph(&mut self, center: Pos2, text: &str, size: f32, _color: Color32) {
        self.calls.push(DrawCall::Glyph {
            center,
            text: text.to_owned(),
            size,
        });
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, _width: f32, _color: Color32) {
        self.calls.push(DrawCall::Circle { center, radius });
    }
}
