//! Rendering surfaces the sketch can be replayed onto.
//!
//! All coordinates passed to a [`Surface`] are canvas coordinates in points,
//! with the origin at the canvas' top-left corner. Each surface maps them to
//! its own space: the on-screen painter offsets them by the canvas rect, the
//! raster surface multiplies them by the export scale.

use egui::{Color32, Pos2};

mod painter;
mod raster;
pub mod recording;

pub use painter::PainterSurface;
pub use raster::RasterSurface;

pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;

/// A 2D target for drawing calls
pub trait Surface {
    /// Wipe the whole surface back to the background
    fn clear(&mut self);

    /// Fill the whole surface with an opaque color
    fn fill(&mut self, color: Color32);

    /// Draw a straight segment of the given width
    fn line_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);

    /// Draw text centered at `center`
    fn glyph(&mut self, center: Pos2, text: &str, size: f32, color: Color32);

    fn circle_outline(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);
}
