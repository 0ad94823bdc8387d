use super::{Tool, ToolResult, paint};
use crate::picture::Position;
use crate::state::EditorState;

/// Every cell of the filled rectangle spanned by two corners, inclusive
pub fn rectangle_points(start: Position, end: Position) -> Vec<Position> {
    let (x_start, x_end) = (start.x.min(end.x), start.x.max(end.x));
    let (y_start, y_end) = (start.y.min(end.y), start.y.max(end.y));

    (y_start..=y_end)
        .flat_map(|y| (x_start..=x_end).map(move |x| Position::new(x, y)))
        .collect()
}

/// Filled rectangle between the press position and the pointer.
///
/// Each move redraws the whole rectangle on top of the latest picture.
#[derive(Debug, Clone, Default)]
pub struct RectangleTool {
    start: Option<Position>,
}

impl RectangleTool {
    fn draw_to(&self, pos: Position, state: &EditorState) -> ToolResult {
        let start = self.start.unwrap_or(pos);
        paint(state, rectangle_points(start, pos)).map(Some)
    }
}

impl Tool for RectangleTool {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn on_pointer_down(&mut self, pos: Position, state: &EditorState) -> ToolResult {
        self.start = Some(pos);
        self.draw_to(pos, state)
    }

    fn on_pointer_move(&mut self, pos: Position, state: &EditorState) -> ToolResult {
        self.draw_to(pos, state)
    }

    fn is_continuous(&self) -> bool {
        true
    }
}
