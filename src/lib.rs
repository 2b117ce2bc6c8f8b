#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod texture_manager;
pub mod tool;
pub mod widgets;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use config::PaintConfig;
pub use error::{PaintError, PaintResult};
pub use input::{InputEvent, InputHandler};
pub use layout::Layout;
pub use tool::{ButtonAction, Tool, ToolState};
pub use widgets::{DrawSession, PaintWidget};
