use super::{Tool, ToolResult, paint};
use crate::picture::Position;
use crate::state::EditorState;

/// Rounds to the nearest integer, halves toward positive infinity
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Cells of the straight line from `start` to `end`, starting at `start`.
///
/// Shallow lines (`|dy| <= |dx|`) get exactly one cell per column and steep
/// lines one cell per row. The minor coordinate is the slope times the step
/// along the major axis, rounded, so `(0,0)..(5,2)` visits rows
/// `0, 0, 1, 1, 2, 2`.
pub fn line_points(start: Position, end: Position) -> Vec<Position> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx == 0 && dy == 0 {
        return vec![start];
    }

    if dy.abs() <= dx.abs() {
        let coef = f64::from(dy) / f64::from(dx);
        let dir = if dx > 0 { 1 } else { -1 };
        (0..=dx.abs())
            .map(|step| {
                let y = start.y + round_half_up(coef * f64::from(step)) * dir;
                Position::new(start.x + step * dir, y)
            })
            .collect()
    } else {
        // dy != 0 here, so the inverse slope is always finite
        let inv_coef = f64::from(dx) / f64::from(dy);
        let dir = if dy > 0 { 1 } else { -1 };
        (0..=dy.abs())
            .map(|step| {
                let x = start.x + round_half_up(inv_coef * f64::from(step)) * dir;
                Position::new(x, start.y + step * dir)
            })
            .collect()
    }
}

/// Straight line from the press position to the pointer.
///
/// Each move recomputes the full line from the fixed start.
#[derive(Debug, Clone, Default)]
pub struct LineTool {
    start: Option<Position>,
}

impl LineTool {
    fn draw_to(&self, pos: Position, state: &EditorState) -> ToolResult {
        let start = self.start.unwrap_or(pos);
        paint(state, line_points(start, pos)).map(Some)
    }
}

impl Tool for LineTool {
    fn name(&self) -> &'static str {
        "line"
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

#[cfg(test)]
mod tests {
    use super::*;

    fn ys(points: &[Position]) -> Vec<i32> {
        points.iter().map(|p| p.y).collect()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.6), -1);
        assert_eq!(round_half_up(1.4), 1);
    }

    #[test]
    fn test_shallow_line_backwards_ends_on_target() {
        let points = line_points(Position::new(5, 0), Position::new(0, 2));
        assert_eq!(points.first(), Some(&Position::new(5, 0)));
        assert_eq!(points.last(), Some(&Position::new(0, 2)));
        assert_eq!(points.len(), 6);
    }

    #[test]
    fn test_diagonal_is_shallow_branch() {
        let points = line_points(Position::new(0, 0), Position::new(3, 3));
        assert_eq!(ys(&points), vec![0, 1, 2, 3]);
        assert_eq!(points.iter().map(|p| p.x).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_steep_line_one_cell_per_row() {
        let points = line_points(Position::new(1, 6), Position::new(3, 0));
        assert_eq!(points.len(), 7);
        assert_eq!(ys(&points), vec![6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(points.last(), Some(&Position::new(3, 0)));
    }
}
