use crate::SketchApp;
use crate::components::ToolButton;
use crate::state::Action;
use crate::tool::ToolChoice;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    let mut actions = Vec::new();
    let mut open_prompt = false;
    let enabled = !app.is_blocked();

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            let sketchpad = app.sketchpad();

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    actions.push(Action::Clear);
                }
                if ui.add_enabled(sketchpad.can_undo(), egui::Button::new("Undo")).clicked() {
                    actions.push(Action::Undo);
                }
                if ui.add_enabled(sketchpad.can_redo(), egui::Button::new("Redo")).clicked() {
                    actions.push(Action::Redo);
                }
                if ui.button("Export").clicked() {
                    actions.push(Action::Export);
                }
            });

            ui.separator();

            ui.horizontal_wrapped(|ui| {
                let mut choices = vec![ToolChoice::Thin, ToolChoice::Thick];
                choices.extend(sketchpad.stickers().iter().cloned().map(ToolChoice::Sticker));

                for choice in choices {
                    let selected = *sketchpad.tool_choice() == choice;
                    if ToolButton::new(choice.label(), selected).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", choice.label());
                        actions.push(Action::SelectTool(choice));
                    }
                }

                if ui.button("Custom sticker").clicked() {
                    open_prompt = true;
                }
            });

            ui.label(format!(
                "{} marks, {} redoable",
                sketchpad.document().len(),
                sketchpad.history().redo_stack().len()
            ));
        });
    });

    for action in actions {
        app.apply(action);
    }
    if open_prompt {
        app.open_sticker_prompt();
    }
}
