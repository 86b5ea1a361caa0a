use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke as EguiStroke};

use super::{BACKGROUND_COLOR, Surface};

/// The on-screen canvas, drawn through an egui painter
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas_rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            canvas_rect,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.canvas_rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.fill(BACKGROUND_COLOR);
    }

    fn fill(&mut self, color: Color32) {
        self.painter.rect_filled(self.canvas_rect, 0.0, color);
    }

    fn line_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            EguiStroke::new(width, color),
        );
        // Round the joint so consecutive segments don't leave notches
        self.painter
            .circle_filled(self.to_screen(to), width / 2.0, color);
    }

    fn glyph(&mut self, center: Pos2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(center),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(size),
            color,
        );
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius,
            EguiStroke::new(width, color),
        );
    }
}
