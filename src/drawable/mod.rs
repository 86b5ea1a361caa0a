use egui::Pos2;

use crate::surface::Surface;

pub(crate) mod preview;
pub(crate) mod sticker;
pub(crate) mod stroke;

pub use preview::ToolPreview;
pub use sticker::Sticker;
pub use stroke::Stroke;

/// A renderable unit of user input. Registry order is z-order.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    /// Feed a new pointer position from the gesture that owns this drawable
    pub fn extend(&mut self, pos: Pos2) {
        match self {
            Drawable::Stroke(s) => s.extend(pos),
            Drawable::Sticker(s) => s.extend(pos),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Drawable::Stroke(s) => s.render(surface),
            Drawable::Sticker(s) => s.render(surface),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Stroke(_) => "stroke",
            Drawable::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Drawable::Stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Drawable::Sticker(sticker)
    }
}
