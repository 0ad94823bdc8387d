use std::collections::VecDeque;

use super::{Tool, ToolResult, paint};
use crate::error::PictureError;
use crate::picture::{Picture, Position};
use crate::state::EditorState;

const AROUND: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Cells of the 4-connected region around `start` that share its color.
///
/// Breadth-first, so cells come out in order of distance from `start`, with
/// `start` first.
pub fn flood_fill_points(picture: &Picture, start: Position) -> Result<Vec<Position>, PictureError> {
    let target = picture.pixel(start)?;
    let width = picture.width();

    let mut visited = vec![false; width * picture.height()];
    let mut queue = VecDeque::with_capacity(64);
    let mut region = Vec::new();

    visited[start.x as usize + start.y as usize * width] = true;
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        region.push(pos);
        for (dx, dy) in AROUND {
            let next = Position::new(pos.x + dx, pos.y + dy);
            if !picture.contains(next) {
                continue;
            }
            let idx = next.x as usize + next.y as usize * width;
            if !visited[idx] && picture.pixel(next)? == target {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }

    Ok(region)
}

/// Flood fill: repaints the clicked region in one step
#[derive(Debug, Clone, Copy, Default)]
pub struct FillTool;

impl Tool for FillTool {
    fn name(&self) -> &'static str {
        "fill"
    }

    fn on_pointer_down(&mut self, pos: Position, state: &EditorState) -> ToolResult {
        let region = flood_fill_points(&state.picture, pos)?;
        log::debug!("Filling {} cell(s) from ({}, {})", region.len(), pos.x, pos.y);
        paint(state, region).map(Some)
    }
}
