use std::collections::VecDeque;

use crate::color::Color;
use crate::config::EditorConfig;
use crate::picture::{Picture, PictureRef, TileDimensions};
use crate::tools::ToolKind;

/// Everything the editor knows about the current session.
///
/// States are values: the history reducer builds a new one for every action
/// and never modifies the one it was given. Cloning is cheap because pictures
/// are shared through [`PictureRef`].
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// The active tool
    pub tool: ToolKind,
    /// Color painted by the drawing tools
    pub color: Color,
    pub picture: PictureRef,
    /// Earlier pictures, most recent first
    pub done: VecDeque<PictureRef>,
    /// When `done` was last pushed to, in epoch milliseconds. 0 means never.
    pub done_at: u64,
    /// Whether the tile grid overlay is shown
    pub grid: bool,
    /// Tile counts used when the picture is re-created
    pub tiles: TileDimensions,
}

impl EditorState {
    /// Builds the starting state of a session
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            tool: ToolKind::Draw,
            color: config.default_color,
            picture: Picture::empty(config.default_tiles, config.background).into_ref(),
            done: VecDeque::new(),
            done_at: 0,
            grid: config.grid_on_start,
            tiles: config.default_tiles,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}
