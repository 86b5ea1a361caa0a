use crate::drawable::Drawable;

/// The drawable registry: the current picture, in z-order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    drawables: Vec<Drawable>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, drawable: Drawable) {
        self.drawables.push(drawable);
    }

    pub fn pop(&mut self) -> Option<Drawable> {
        self.drawables.pop()
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    /// The most recently pushed drawable, the only one a gesture may extend
    pub(crate) fn top_mut(&mut self) -> Option<&mut Drawable> {
        self.drawables.last_mut()
    }

    pub fn clear(&mut self) {
        self.drawables.clear();
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}
