use crate::SketchApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = app.sketchpad().config().canvas_vec();
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // A modal prompt blocks drawing behind it
        if !app.is_blocked() {
            for event in app.input_mut().process(ctx, canvas_rect) {
                app.sketchpad_mut().handle(event);
            }
        }

        // The preview stands in for the cursor while it is over the canvas
        if app.sketchpad().preview().is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        let mut surface = PainterSurface::new(&painter, canvas_rect);
        app.sketchpad().render(&mut surface);

        painter.rect_stroke(
            canvas_rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(160)),
        );
    });
}
