use egui::epaint::text::{FontDefinitions, Fonts};
use egui::{Color32, FontId, Pos2, Vec2};
use image::{Rgba, RgbaImage};

use super::Surface;
use crate::error::{SketchError, SketchResult};
use crate::geometry::distance_to_segment;

/// Largest side we are willing to allocate for an offscreen buffer
pub const MAX_SURFACE_SIDE: u32 = 16_384;
const FONT_ATLAS_SIDE: usize = 8_192;

/// Offscreen RGBA buffer. Canvas coordinates are multiplied by `scale`.
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    // Built on first glyph; loading the default fonts is not free
    fonts: Option<Fonts>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, scale: f32) -> SketchResult<Self> {
        if width == 0 || height == 0 || width > MAX_SURFACE_SIDE || height > MAX_SURFACE_SIDE {
            return Err(SketchError::Surface { width, height });
        }

        Ok(Self {
            image: RgbaImage::new(width, height),
            scale,
            fonts: None,
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn to_pixels(&self, pos: Pos2) -> Pos2 {
        Pos2::new(pos.x * self.scale, pos.y * self.scale)
    }

    /// Source-over blend of `color` at `coverage` into one pixel
    fn blend(&mut self, x: i64, y: i64, color: Color32, coverage: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }

        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let alpha = coverage.clamp(0.0, 1.0) * (a as f32 / 255.0);
        if alpha <= 0.0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let mix = |src: u8, dst: u8| (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8;
        let dst_alpha = dst[3] as f32 / 255.0;
        *dst = Rgba([
            mix(r, dst[0]),
            mix(g, dst[1]),
            mix(b, dst[2]),
            ((alpha + dst_alpha * (1.0 - alpha)) * 255.0).round() as u8,
        ]);
    }

    /// Pixel range covering `[min, max]`, clamped to the image
    fn pixel_span(&self, min: f32, max: f32, limit: u32) -> std::ops::Range<i64> {
        let start = (min.floor() as i64).max(0);
        let end = (max.ceil() as i64 + 1).min(limit as i64);
        start..end.max(start)
    }

    /// Blend every pixel whose center gets a positive coverage from `coverage_at`
    fn shade_box(&mut self, min: Pos2, max: Pos2, color: Color32, coverage_at: impl Fn(Pos2) -> f32) {
        let xs = self.pixel_span(min.x, max.x, self.image.width());
        let ys = self.pixel_span(min.y, max.y, self.image.height());
        for y in ys {
            for x in xs.clone() {
                let coverage = coverage_at(Pos2::new(x as f32 + 0.5, y as f32 + 0.5));
                if coverage > 0.0 {
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn fill(&mut self, color: Color32) {
        let [r, g, b, _] = color.to_srgba_unmultiplied();
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([r, g, b, 255]);
        }
    }

    fn line_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let (a, b) = (self.to_pixels(from), self.to_pixels(to));
        let half = width * self.scale / 2.0;
        let pad = Vec2::splat(half + 1.0);

        // Round caps, with one pixel of antialiasing at the edge
        self.shade_box(a.min(b) - pad, a.max(b) + pad, color, |p| {
            half + 0.5 - distance_to_segment(p, a, b)
        });
    }

    fn glyph(&mut self, center: Pos2, text: &str, size: f32, color: Color32) {
        let pixel_size = size * self.scale;
        let (galley, atlas) = {
            let fonts = self
                .fonts
                .get_or_insert_with(|| Fonts::new(1.0, FONT_ATLAS_SIDE, FontDefinitions::default()));
            let galley = fonts.layout_no_wrap(text.to_owned(), FontId::proportional(pixel_size), color);
            (galley, fonts.image())
        };

        let origin = self.to_pixels(center) - galley.size() / 2.0;
        for row in &galley.rows {
            for glyph in &row.glyphs {
                let uv = glyph.uv_rect;
                if uv.min == uv.max {
                    continue;
                }

                let left_top = origin + glyph.pos.to_vec2() + uv.offset;
                for v in uv.min[1]..uv.max[1] {
                    for u in uv.min[0]..uv.max[0] {
                        let coverage = atlas.pixels[v as usize * atlas.size[0] + u as usize];
                        let x = (left_top.x + (u - uv.min[0]) as f32).round() as i64;
                        let y = (left_top.y + (v - uv.min[1]) as f32).round() as i64;
                        self.blend(x, y, color, coverage);
                    }
                }
            }
        }
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        let c = self.to_pixels(center);
        let r = radius * self.scale;
        let half = width * self.scale / 2.0;
        let pad = Vec2::splat(r + half + 1.0);

        self.shade_box(c - pad, c + pad, color, |p| {
            half + 0.5 - ((p - c).length() - r).abs()
        });
    }
}
