use super::{Tool, ToolResult};
use crate::picture::Position;
use crate::state::{Action, EditorState};

/// Color picker: sets the draw color to the clicked cell's color
#[derive(Debug, Clone, Copy, Default)]
pub struct PickTool;

impl Tool for PickTool {
    fn name(&self) -> &'static str {
        "pick"
    }

    fn on_pointer_down(&mut self, pos: Position, state: &EditorState) -> ToolResult {
        let color = state.picture.pixel(pos)?;
        log::debug!("Picked {color} at ({}, {})", pos.x, pos.y);
        Ok(Some(Action::color(color)))
    }
}
