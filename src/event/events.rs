/// Notifications emitted by the sketchpad state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// The registry or the drawable under the active gesture changed
    Changed,
    /// The tool preview moved, appeared, disappeared or switched tool
    ToolMoved,
}
