use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PictureError;
use crate::picture::{PixelChange, Position};
use crate::state::{Action, EditorState};

/// What a tool hands back for dispatch, if anything
pub type ToolResult = Result<Option<Action>, PictureError>;

/// Tool trait defines the interface for all picture tools.
///
/// A gesture starts with [`Tool::on_pointer_down`] at the pressed cell. For
/// continuous tools the gesture driver then calls [`Tool::on_pointer_move`]
/// for every new cell until the pointer is released. Each call receives the
/// latest editor state, never the one the gesture started with.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Paint at the start of a gesture.
    fn on_pointer_down(&mut self, pos: Position, state: &EditorState) -> ToolResult;

    /// Continue the gesture at a new cell.
    fn on_pointer_move(&mut self, _pos: Position, _state: &EditorState) -> ToolResult {
        Ok(None)
    }

    /// Whether the tool wants [`Tool::on_pointer_move`] calls after the press.
    fn is_continuous(&self) -> bool {
        false
    }
}

/// Paints every cell in `cells` with the state's current color
pub(crate) fn paint(
    state: &EditorState,
    cells: impl IntoIterator<Item = Position>,
) -> Result<Action, PictureError> {
    let changes: Vec<PixelChange> = cells
        .into_iter()
        .map(|pos| PixelChange::at(pos, state.color))
        .collect();
    Ok(Action::picture(state.picture.draw(&changes)?))
}

// Tool implementations
mod circle;
mod draw;
mod fill;
mod line;
mod pick;
mod rectangle;

pub use circle::{CircleTool, circle_points};
pub use draw::DrawTool;
pub use fill::{FillTool, flood_fill_points};
pub use line::{LineTool, line_points};
pub use pick::PickTool;
pub use rectangle::{RectangleTool, rectangle_points};

/// The tools a user can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Draw,
    Line,
    Rectangle,
    Circle,
    Fill,
    Pick,
}

impl ToolKind {
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Draw,
        ToolKind::Line,
        ToolKind::Fill,
        ToolKind::Rectangle,
        ToolKind::Pick,
        ToolKind::Circle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Fill => "fill",
            Self::Pick => "pick",
        }
    }

    /// Icon shown next to the name in the tool picker
    pub fn icon(self) -> &'static str {
        match self {
            Self::Draw => "✏",
            Self::Line => "╱",
            Self::Rectangle => "▬",
            Self::Circle => "●",
            Self::Fill => "🪣",
            Self::Pick => "💧",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownTool(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool {0:?}")]
pub struct UnknownTool(pub String);

/// Enum representing all available tool instances
/// This allows us to avoid using Box<dyn Tool> for the active gesture
#[derive(Debug, Clone)]
pub enum ToolType {
    Draw(DrawTool),
    Line(LineTool),
    Rectangle(RectangleTool),
    Circle(CircleTool),
    Fill(FillTool),
    Pick(PickTool),
}

impl ToolType {
    /// Creates a fresh tool instance for a gesture
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Draw => Self::Draw(DrawTool),
            ToolKind::Line => Self::Line(LineTool::default()),
            ToolKind::Rectangle => Self::Rectangle(RectangleTool::default()),
            ToolKind::Circle => Self::Circle(CircleTool::default()),
            ToolKind::Fill => Self::Fill(FillTool),
            ToolKind::Pick => Self::Pick(PickTool),
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Draw(_) => ToolKind::Draw,
            Self::Line(_) => ToolKind::Line,
            Self::Rectangle(_) => ToolKind::Rectangle,
            Self::Circle(_) => ToolKind::Circle,
            Self::Fill(_) => ToolKind::Fill,
            Self::Pick(_) => ToolKind::Pick,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Draw(tool) => tool.name(),
            Self::Line(tool) => tool.name(),
            Self::Rectangle(tool) => tool.name(),
            Self::Circle(tool) => tool.name(),
            Self::Fill(tool) => tool.name(),
            Self::Pick(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, pos: Position, state: &EditorState) -> ToolResult {
        match self {
            Self::Draw(tool) => tool.on_pointer_down(pos, state),
            Self::Line(tool) => tool.on_pointer_down(pos, state),
            Self::Rectangle(tool) => tool.on_pointer_down(pos, state),
            Self::Circle(tool) => tool.on_pointer_down(pos, state),
            Self::Fill(tool) => tool.on_pointer_down(pos, state),
            Self::Pick(tool) => tool.on_pointer_down(pos, state),
        }
    }

    fn on_pointer_move(&mut self, pos: Position, state: &EditorState) -> ToolResult {
        match self {
            Self::Draw(tool) => tool.on_pointer_move(pos, state),
            Self::Line(tool) => tool.on_pointer_move(pos, state),
            Self::Rectangle(tool) => tool.on_pointer_move(pos, state),
            Self::Circle(tool) => tool.on_pointer_move(pos, state),
            Self::Fill(tool) => tool.on_pointer_move(pos, state),
            Self::Pick(tool) => tool.on_pointer_move(pos, state),
        }
    }

    fn is_continuous(&self) -> bool {
        match self {
            Self::Draw(tool) => tool.is_continuous(),
            Self::Line(tool) => tool.is_continuous(),
            Self::Rectangle(tool) => tool.is_continuous(),
            Self::Circle(tool) => tool.is_continuous(),
            Self::Fill(tool) => tool.is_continuous(),
            Self::Pick(tool) => tool.is_continuous(),
        }
    }
}
