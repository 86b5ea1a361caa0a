use eframe::egui;

/// Square toggle button used for tool presets and stickers
pub struct ToolButton<'a> {
    pub label: &'a str,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self { label, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        // Words need more room than a single glyph
        let is_word = self.label.chars().count() > 2;
        let button_size = if is_word {
            egui::vec2(56.0, 32.0)
        } else {
            egui::vec2(32.0, 32.0)
        };
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            // Follow the active theme; selected buttons use the selection colors
            let visuals = ui.style().interact_selectable(&response, self.selected);
            ui.painter()
                .rect(rect, visuals.rounding, visuals.weak_bg_fill, visuals.bg_stroke);

            let font_id = if is_word {
                egui::FontId::proportional(14.0)
            } else {
                egui::FontId::proportional(24.0)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                font_id,
                visuals.text_color(),
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_fills(visuals: egui::Visuals, selected: bool) -> Vec<egui::Color32> {
        let ctx = egui::Context::default();
        ctx.set_visuals(visuals);
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ToolButton::new("Thin", selected).show(ui);
            });
        });
        output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::Shape::Rect(rect) => Some(rect.fill),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_button_follows_light_theme() {
        let light = egui::Visuals::light();
        assert!(rect_fills(light.clone(), false).contains(&light.widgets.inactive.weak_bg_fill));
        assert!(rect_fills(light.clone(), true).contains(&light.selection.bg_fill));
    }
}
