#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod compositor;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod input;
pub mod palette;
pub mod renderer;
pub mod stroke;
pub mod tools;

pub use app::DrawPadApp;
pub use canvas::{Canvas, CanvasState};
pub use config::DrawPadConfig;
pub use document::Document;
pub use error::ConfigError;
pub use event::{CanvasEvent, EventBus, EventHandler};
pub use input::{InputEvent, InputHandler};
pub use palette::Palette;
pub use renderer::Renderer;
pub use stroke::{BlendMode, LINE_WIDTH, Stroke};
pub use tools::Tool;
