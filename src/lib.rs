#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod document;
pub mod drawable;
pub mod error;
pub mod event;
pub mod export;
mod geometry;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tool;

pub use app::SketchApp;
pub use config::SketchConfig;
pub use document::Document;
pub use drawable::{Drawable, Sticker, Stroke, ToolPreview};
pub use error::{ConfigError, SketchError, SketchResult};
pub use event::{EventBus, SketchEvent};
pub use history::History;
pub use state::{Action, CanvasEvent, GestureState, Sketchpad};
pub use tool::{Tool, ToolChoice};
