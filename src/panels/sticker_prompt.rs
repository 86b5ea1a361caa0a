use crate::SketchApp;
use crate::state::Action;

/// Text and focus state of the open custom sticker prompt
#[derive(Debug, Default)]
pub struct StickerPrompt {
    text: String,
    focus_requested: bool,
}

impl StickerPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Modal text prompt for a custom sticker glyph. Cancel is a no-op.
pub fn sticker_prompt(app: &mut SketchApp, ctx: &egui::Context) {
    let Some(prompt) = app.sticker_prompt_mut() else {
        return;
    };

    let mut submitted = false;
    let mut cancelled = false;

    egui::Window::new("Custom sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Enter a sticker:");
            let edit = ui.text_edit_singleline(&mut prompt.text);
            // Focus once, on the first visible frame; Enter surrenders focus
            if !prompt.focus_requested && ui.is_visible() {
                edit.request_focus();
                prompt.focus_requested = true;
            }
            if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    submitted = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        cancelled = true;
    }

    if submitted {
        if let Some(prompt) = app.sticker_prompt_mut().take() {
            app.apply(Action::AddSticker(prompt.text));
        }
    } else if cancelled {
        log::debug!("Custom sticker prompt cancelled");
        *app.sticker_prompt_mut() = None;
    }
}
