use egui::{Context, Pos2, Rect};

use crate::picture::Position;

/// Maps screen positions onto picture cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    /// Screen position of the top-left corner of cell (0, 0)
    pub origin: Pos2,
    /// Screen points per cell
    pub scale: f32,
    pub width: usize,
    pub height: usize,
}

impl CanvasGeometry {
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(
            self.origin,
            egui::vec2(self.width as f32 * self.scale, self.height as f32 * self.scale),
        )
    }

    /// The cell under `pos`; may lie outside the picture
    pub fn cell_at(&self, pos: Pos2) -> Position {
        let rel = (pos - self.origin) / self.scale;
        Position::new(rel.x.floor() as i32, rel.y.floor() as i32)
    }

    pub fn contains(&self, cell: Position) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.width && (cell.y as usize) < self.height
    }

    /// Pulls `cell` onto the nearest cell of the picture
    pub fn clamp(&self, cell: Position) -> Position {
        let max_x = self.width.saturating_sub(1) as i32;
        let max_y = self.height.saturating_sub(1) as i32;
        Position::new(cell.x.clamp(0, max_x), cell.y.clamp(0, max_y))
    }
}

/// The primary pointer's state during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// The button went down this frame
    pub pressed: bool,
    /// The button is held
    pub down: bool,
    /// The button went up this frame
    pub released: bool,
    /// Screen position of the pointer, if known
    pub pos: Option<Pos2>,
}

impl PointerSample {
    /// Reads the primary pointer (mouse button or first touch) from egui
    pub fn read(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            pressed: input.pointer.primary_pressed(),
            down: input.pointer.primary_down(),
            released: input.pointer.primary_released(),
            pos: input.pointer.interact_pos(),
        })
    }
}

/// Gesture steps handed to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    Start(Position),
    Move(Position),
    End,
}

/// Turns raw pointer samples into gestures.
///
/// A gesture starts when the button goes down over the picture, reports a
/// move only when the pointer reaches a different cell, and ends when the
/// button is released.
#[derive(Debug, Default)]
pub struct GestureTracker {
    /// Cell of the last event of the gesture in progress
    last_cell: Option<Position>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.last_cell.is_some()
    }

    pub fn update(&mut self, sample: PointerSample, geometry: &CanvasGeometry) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        let cell = sample.pos.map(|pos| geometry.cell_at(pos));

        if sample.pressed && !self.is_active() {
            if let Some(cell) = cell.filter(|&c| geometry.contains(c)) {
                events.push(GestureEvent::Start(cell));
                self.last_cell = Some(cell);
            }
        }

        if let (Some(last), Some(cell)) = (self.last_cell, cell) {
            let cell = geometry.clamp(cell);
            if sample.down && cell != last {
                events.push(GestureEvent::Move(cell));
                self.last_cell = Some(cell);
            }
        }

        if self.is_active() && (sample.released || !sample.down) {
            events.push(GestureEvent::End);
            self.last_cell = None;
        }

        events
    }
}
