use crate::document::Document;
use crate::drawable::ToolPreview;
use crate::surface::Surface;

/// Full redraw: clear, replay every drawable in z-order, then the preview on top.
pub fn render_pass(document: &Document, preview: Option<&ToolPreview>, surface: &mut dyn Surface) {
    surface.clear();

    for drawable in document.drawables() {
        drawable.render(surface);
    }

    if let Some(preview) = preview {
        preview.render(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::{Sticker, Stroke};
    use crate::surface::recording::{DrawCall, RecordingSurface};
    use crate::tool::Tool;
    use egui::pos2;

    #[test]
    fn test_pass_order() {
        let mut document = Document::new();
        document.push(Stroke::from_points(vec![pos2(0.0, 0.0), pos2(1.0, 1.0)], 2.0).into());
        document.push(Sticker::new(pos2(5.0, 5.0), "♥", 20.0).into());
        let preview = ToolPreview::new(pos2(9.0, 9.0), Tool::Marker { weight: 4.0 });

        let mut surface = RecordingSurface::default();
        render_pass(&document, Some(&preview), &mut surface);

        assert_eq!(surface.calls.len(), 4);
        assert_eq!(surface.calls[0], DrawCall::Clear);
        assert!(matches!(surface.calls[1], DrawCall::Line { .. }));
        assert!(matches!(surface.calls[2], DrawCall::Glyph { .. }));
        assert_eq!(
            surface.calls[3],
            DrawCall::Circle {
                center: pos2(9.0, 9.0),
                radius: 2.0
            }
        );
    }

    #[test]
    fn test_empty_document_only_clears() {
        let mut surface = RecordingSurface::default();
        render_pass(&Document::new(), None, &mut surface);
        assert_eq!(surface.calls, vec![DrawCall::Clear]);
    }
}
