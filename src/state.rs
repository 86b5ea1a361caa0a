use egui::Pos2;

use crate::config::SketchConfig;
use crate::document::Document;
use crate::drawable::ToolPreview;
use crate::error::SketchResult;
use crate::event::{EventBus, SketchEvent};
use crate::export;
use crate::history::History;
use crate::renderer;
use crate::surface::Surface;
use crate::tool::{Tool, ToolChoice};

/// Pointer gesture state. Only an active gesture may extend the top drawable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Active,
}

/// Pointer input on the canvas, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    PointerDown(Pos2),
    PointerMove(Pos2),
    PointerUp,
    PointerEnter(Pos2),
    PointerLeave,
}

/// Toolbar actions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Clear,
    Undo,
    Redo,
    SelectTool(ToolChoice),
    /// Glyph typed into the custom sticker prompt
    AddSticker(String),
    Export,
}

/// All application state: the picture, its history, the current tool and the
/// preview. Every mutation notifies the event bus synchronously.
#[derive(Debug)]
pub struct Sketchpad {
    config: SketchConfig,
    document: Document,
    history: History,
    gesture: GestureState,
    tool_choice: ToolChoice,
    stickers: Vec<String>,
    preview: Option<ToolPreview>,
    events: EventBus,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl Sketchpad {
    pub fn new(config: SketchConfig) -> Self {
        Self {
            stickers: config.stickers.clone(),
            config,
            document: Document::new(),
            history: History::new(),
            gesture: GestureState::Idle,
            tool_choice: ToolChoice::default(),
            preview: None,
            events: EventBus::new(),
        }
    }

    /// Dispatch one pointer event
    pub fn handle(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::PointerDown(pos) => self.begin_gesture(pos),
            CanvasEvent::PointerMove(pos) => match self.gesture {
                GestureState::Active => {
                    self.extend_gesture(pos);
                }
                GestureState::Idle => self.show_preview(pos),
            },
            CanvasEvent::PointerUp => self.end_gesture(),
            CanvasEvent::PointerEnter(pos) => {
                if self.gesture == GestureState::Idle {
                    self.show_preview(pos);
                }
            }
            CanvasEvent::PointerLeave => self.hide_preview(),
        }
    }

    /// Dispatch one toolbar action
    pub fn apply(&mut self, action: Action) {
        log::info!("Action: {:?}", action);
        match action {
            Action::Clear => self.clear(),
            Action::Undo => {
                self.undo();
            }
            Action::Redo => {
                self.redo();
            }
            Action::SelectTool(choice) => self.select_tool(choice),
            Action::AddSticker(text) => {
                self.add_sticker(&text);
            }
            Action::Export => {
                if let Err(err) = self.export() {
                    log::error!("Export failed: {}", err);
                }
            }
        }
    }

    /// Start a new drawable under the current tool. Drops the redo buffer.
    pub fn begin_gesture(&mut self, pos: Pos2) {
        if self.gesture == GestureState::Active {
            self.end_gesture();
        }

        let drawable = self.tool().begin(pos);
        log::debug!("Gesture started: {} at {:?}", drawable.kind(), pos);

        self.history.invalidate_redo();
        self.document.push(drawable);
        self.gesture = GestureState::Active;
        self.preview = None;
        self.events.emit(SketchEvent::Changed);
    }

    /// Extend the drawable owned by the active gesture.
    /// Returns false when no gesture is active.
    pub fn extend_gesture(&mut self, pos: Pos2) -> bool {
        if self.gesture != GestureState::Active {
            return false;
        }

        match self.document.top_mut() {
            Some(drawable) => {
                drawable.extend(pos);
                self.events.emit(SketchEvent::Changed);
                true
            }
            None => false,
        }
    }

    pub fn end_gesture(&mut self) {
        if self.gesture == GestureState::Active {
            log::debug!("Gesture ended");
        }
        self.gesture = GestureState::Idle;
    }

    /// Returns false (and stays silent) when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        self.end_gesture();
        let changed = self.history.undo(&mut self.document);
        if changed {
            self.events.emit(SketchEvent::Changed);
        }
        changed
    }

    /// Returns false (and stays silent) when the redo buffer is empty
    pub fn redo(&mut self) -> bool {
        self.end_gesture();
        let changed = self.history.redo(&mut self.document);
        if changed {
            self.events.emit(SketchEvent::Changed);
        }
        changed
    }

    /// Empty both the picture and the redo buffer
    pub fn clear(&mut self) {
        self.end_gesture();
        self.document.clear();
        self.history.clear();
        self.events.emit(SketchEvent::Changed);
    }

    pub fn select_tool(&mut self, choice: ToolChoice) {
        self.tool_choice = choice;
        let tool = self.tool();
        if let Some(preview) = &mut self.preview {
            *preview = ToolPreview::new(preview.position(), tool);
            self.events.emit(SketchEvent::ToolMoved);
        }
    }

    /// Add a glyph to the sticker palette and select it.
    /// Blank input (a cancelled prompt) is ignored.
    pub fn add_sticker(&mut self, text: &str) -> bool {
        let glyph = text.trim();
        if glyph.is_empty() {
            return false;
        }

        if !self.stickers.iter().any(|sticker| sticker == glyph) {
            self.stickers.push(glyph.to_owned());
        }
        self.select_tool(ToolChoice::Sticker(glyph.to_owned()));
        true
    }

    fn show_preview(&mut self, pos: Pos2) {
        self.preview = Some(ToolPreview::new(pos, self.tool()));
        self.events.emit(SketchEvent::ToolMoved);
    }

    fn hide_preview(&mut self) {
        if self.preview.take().is_some() {
            self.events.emit(SketchEvent::ToolMoved);
        }
    }

    /// Run a full render pass onto `surface`
    pub fn render(&self, surface: &mut dyn Surface) {
        renderer::render_pass(&self.document, self.preview.as_ref(), surface);
    }

    pub fn export_png(&self) -> SketchResult<Vec<u8>> {
        export::render_png(&self.document, &self.config)
    }

    pub fn export(&self) -> SketchResult<()> {
        export::export(&self.document, &self.config)
    }

    pub fn tool(&self) -> Tool {
        self.tool_choice.resolve(&self.config)
    }

    pub fn tool_choice(&self) -> &ToolChoice {
        &self.tool_choice
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo(&self.document)
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_move_while_idle_only_previews() {
        let mut pad = Sketchpad::default();
        pad.handle(CanvasEvent::PointerMove(pos2(4.0, 4.0)));
        assert!(pad.document().is_empty());
        assert_eq!(pad.preview().unwrap().position(), pos2(4.0, 4.0));
    }

    #[test]
    fn test_gesture_start_discards_preview() {
        let mut pad = Sketchpad::default();
        pad.handle(CanvasEvent::PointerEnter(pos2(1.0, 1.0)));
        assert!(pad.preview().is_some());

        pad.handle(CanvasEvent::PointerDown(pos2(1.0, 1.0)));
        assert!(pad.preview().is_none());
        assert_eq!(pad.gesture(), GestureState::Active);
    }

    #[test]
    fn test_undo_ends_active_gesture() {
        let mut pad = Sketchpad::default();
        pad.handle(CanvasEvent::PointerDown(pos2(1.0, 1.0)));
        assert!(pad.undo());
        assert_eq!(pad.gesture(), GestureState::Idle);

        // The undone stroke must not keep growing in the redo buffer
        pad.handle(CanvasEvent::PointerMove(pos2(2.0, 2.0)));
        assert_eq!(pad.history().redo_stack()[0].as_stroke().unwrap().points().len(), 1);
    }

    #[test]
    fn test_select_tool_refreshes_preview() {
        let mut pad = Sketchpad::default();
        pad.handle(CanvasEvent::PointerMove(pos2(7.0, 7.0)));
        pad.select_tool(ToolChoice::Thick);

        let preview = pad.preview().unwrap();
        assert_eq!(preview.position(), pos2(7.0, 7.0));
        assert_eq!(
            *preview.tool(),
            Tool::Marker {
                weight: pad.config().thick_weight
            }
        );
    }
}
