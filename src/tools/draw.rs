use super::{Tool, ToolResult, paint};
use crate::picture::Position;
use crate::state::EditorState;

/// Freehand pencil: paints the cell under the pointer, one cell per call
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawTool;

impl Tool for DrawTool {
    fn name(&self) -> &'static str {
        "draw"
    }

    fn on_pointer_down(&mut self, pos: Position, state: &EditorState) -> ToolResult {
        paint(state, [pos]).map(Some)
    }

    fn on_pointer_move(&mut self, pos: Position, state: &EditorState) -> ToolResult {
        paint(state, [pos]).map(Some)
    }

    fn is_continuous(&self) -> bool {
        true
    }
}
