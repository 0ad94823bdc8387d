#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod codec;
pub mod color;
pub mod components;
pub mod config;
pub mod editor;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod picture;
pub mod state;
pub mod tools;
pub mod util;

pub use app::PixelEditorApp;
pub use canvas::PictureCanvas;
pub use color::Color;
pub use config::EditorConfig;
pub use editor::PixelEditor;
pub use error::{CodecError, ConfigError, EditorError, PictureError};
pub use input::{GestureEvent, GestureTracker};
pub use picture::{Picture, PictureRef, PixelChange, Position, TileDimensions};
pub use state::{Action, EditorState, update_state};
pub use tools::{Tool, ToolKind, ToolType};
