use egui::{Color32, Pos2};

use crate::surface::Surface;

pub const STROKE_COLOR: Color32 = Color32::BLACK;

/// Freehand marker line: consecutive points joined by straight segments
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    weight: f32,
}

impl Stroke {
    /// Start a stroke at the gesture's first point
    pub fn new(start: Pos2, weight: f32) -> Self {
        Self {
            points: vec![start],
            weight,
        }
    }

    pub fn from_points(points: Vec<Pos2>, weight: f32) -> Self {
        Self { points, weight }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn extend(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        // A single point has no segment to draw
        if self.points.len() < 2 {
            return;
        }

        for pair in self.points.windows(2) {
            surface.line_segment(pair[0], pair[1], self.weight, STROKE_COLOR);
        }
    }
}
