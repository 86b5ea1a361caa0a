use egui::{Context, Key, KeyboardShortcut, Modifiers, PointerButton, Pos2, Rect};

use crate::state::{Action, CanvasEvent};

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const REDO_SHIFT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);

/// Handles converting raw egui pointer input into canvas events.
///
/// Positions are made relative to the canvas' top-left corner. Pointer
/// movement outside the canvas is not reported, but releasing the primary
/// button anywhere ends the gesture.
#[derive(Debug, Default)]
pub struct CanvasInput {
    /// Last pointer position inside the canvas, in canvas coordinates
    last_pos: Option<Pos2>,
    pressed: bool,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's pointer state and generate canvas events
    pub fn process(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pos = input
                .pointer
                .hover_pos()
                .filter(|pos| canvas_rect.contains(*pos))
                .map(|pos| (pos - canvas_rect.min).to_pos2());
            let pressed_now = input.pointer.button_pressed(PointerButton::Primary);

            match (self.last_pos, pos) {
                (None, Some(pos)) => events.push(CanvasEvent::PointerEnter(pos)),
                (Some(_), None) => events.push(CanvasEvent::PointerLeave),
                _ => {}
            }

            if let Some(pos) = pos {
                // A press reports its own position; a move there would duplicate it
                if Some(pos) != self.last_pos && !pressed_now {
                    events.push(CanvasEvent::PointerMove(pos));
                }
                if pressed_now {
                    events.push(CanvasEvent::PointerDown(pos));
                    self.pressed = true;
                }
            }

            if self.pressed && input.pointer.button_released(PointerButton::Primary) {
                events.push(CanvasEvent::PointerUp);
                self.pressed = false;
            }

            self.last_pos = pos;
        });

        events
    }
}

/// Undo/redo keyboard shortcuts, consumed so widgets don't see them
pub fn shortcut_action(ctx: &Context) -> Option<Action> {
    ctx.input_mut(|input| {
        if input.consume_shortcut(&REDO_SHIFT) || input.consume_shortcut(&REDO) {
            Some(Action::Redo)
        } else if input.consume_shortcut(&UNDO) {
            Some(Action::Undo)
        } else {
            None
        }
    })
}
