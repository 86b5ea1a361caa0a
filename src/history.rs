use crate::document::Document;
use crate::drawable::Drawable;

/// Linear undo/redo over a [`Document`].
///
/// The document itself is the "done" sequence; undo moves its tail into the
/// redo buffer and redo moves it back. Starting new work drops the buffer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct History {
    redo_stack: Vec<Drawable>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the document's top drawable into the redo buffer.
    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        match document.pop() {
            Some(drawable) => {
                self.redo_stack.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone drawable back onto the document.
    /// Returns false when the redo buffer is empty.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        match self.redo_stack.pop() {
            Some(drawable) => {
                document.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Branching off: whatever was undone can no longer be redone
    pub fn invalidate_redo(&mut self) {
        if !self.redo_stack.is_empty() {
            log::debug!("Dropping {} redoable drawables", self.redo_stack.len());
        }
        self.redo_stack.clear();
    }

    pub fn can_undo(&self, document: &Document) -> bool {
        !document.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    /// Clear the redo buffer
    pub fn clear(&mut self) {
        self.redo_stack.clear();
    }
}
