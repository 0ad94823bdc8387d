use super::{Tool, ToolResult, paint};
use crate::picture::Position;
use crate::state::EditorState;

fn distance(a: Position, b: Position) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Cells of the filled disk centered on `center` whose radius is the
/// distance to `edge`, rounded down.
///
/// A cell is inside when it is strictly closer to the center than the
/// radius, so a radius of 0 yields nothing. The scan box is clamped to the
/// picture: rows up to and including `height`, columns below `width`. Row
/// `height` itself is past the last row and is never returned.
pub fn circle_points(center: Position, edge: Position, width: usize, height: usize) -> Vec<Position> {
    let radius = distance(center, edge).floor();
    let rad = radius as i32;
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);

    let y_start = (center.y - rad).max(0);
    let y_end = (center.y + rad).min(height);
    let x_start = (center.x - rad).max(0);
    let x_end = (center.x + rad).min(width);

    let mut points = Vec::new();
    for y in y_start..=y_end {
        if y >= height {
            break;
        }
        for x in x_start..x_end {
            let pos = Position::new(x, y);
            if distance(center, pos) < radius {
                points.push(pos);
            }
        }
    }
    points
}

/// Filled circle centered on the press position, reaching the pointer.
#[derive(Debug, Clone, Default)]
pub struct CircleTool {
    center: Option<Position>,
}

impl CircleTool {
    fn draw_to(&self, pos: Position, state: &EditorState) -> ToolResult {
        let center = self.center.unwrap_or(pos);
        let picture = &state.picture;
        paint(state, circle_points(center, pos, picture.width(), picture.height())).map(Some)
    }
}

impl Tool for CircleTool {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn on_pointer_down(&mut self, pos: Position, state: &EditorState) -> ToolResult {
        self.center = Some(pos);
        self.draw_to(pos, state)
    }

    fn on_pointer_move(&mut self, pos: Position, state: &EditorState) -> ToolResult {
        self.draw_to(pos, state)
    }

    fn is_continuous(&self) -> bool {
        true
    }
}
