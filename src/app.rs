use crate::config::SketchConfig;
use crate::event::SketchEvent;
use crate::input::{self, CanvasInput};
use crate::panels::{self, StickerPrompt};
use crate::state::{Action, Sketchpad};

/// The eframe shell around a [`Sketchpad`]
pub struct SketchApp {
    sketchpad: Sketchpad,
    input: CanvasInput,
    /// Set while the custom sticker prompt is open; it blocks all other input
    sticker_prompt: Option<StickerPrompt>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        Self::with_context(&cc.egui_ctx, config)
    }

    pub fn with_context(ctx: &egui::Context, config: SketchConfig) -> Self {
        let sketchpad = Sketchpad::new(config);

        // egui only repaints on input; make sure every notification gets a render pass
        let ctx = ctx.clone();
        sketchpad.events().subscribe(move |event: &SketchEvent| {
            log::trace!("Repaint for {:?}", event);
            ctx.request_repaint();
        });

        Self {
            sketchpad,
            input: CanvasInput::new(),
            sticker_prompt: None,
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn input_mut(&mut self) -> &mut CanvasInput {
        &mut self.input
    }

    pub fn apply(&mut self, action: Action) {
        self.sketchpad.apply(action);
    }

    pub fn open_sticker_prompt(&mut self) {
        self.sticker_prompt = Some(StickerPrompt::new());
    }

    /// True while a modal prompt owns the input
    pub fn is_blocked(&self) -> bool {
        self.sticker_prompt.is_some()
    }

    pub(crate) fn sticker_prompt_mut(&mut self) -> &mut Option<StickerPrompt> {
        &mut self.sticker_prompt
    }

    /// Lay out and handle one frame
    pub fn ui(&mut self, ctx: &egui::Context) {
        if !self.is_blocked() {
            if let Some(action) = input::shortcut_action(ctx) {
                self.apply(action);
            }
        }

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        panels::sticker_prompt(self, ctx);
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
