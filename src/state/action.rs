use crate::color::Color;
use crate::picture::{Picture, PictureRef, TileDimensions};
use crate::tools::ToolKind;

/// A partial update to the editor state.
///
/// Any combination of fields may be set; the reducer merges the ones that are
/// present over the current state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Action {
    pub tool: Option<ToolKind>,
    pub color: Option<Color>,
    pub picture: Option<PictureRef>,
    pub grid: Option<bool>,
    /// Restore the most recent picture from the undo stack
    pub undo: bool,
    /// Re-create the picture with new tile counts
    pub resize: Option<TileDimensions>,
}

impl Action {
    pub fn tool(tool: ToolKind) -> Self {
        Self {
            tool: Some(tool),
            ..Default::default()
        }
    }

    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Default::default()
        }
    }

    pub fn picture(picture: Picture) -> Self {
        Self::picture_ref(picture.into_ref())
    }

    pub fn picture_ref(picture: PictureRef) -> Self {
        Self {
            picture: Some(picture),
            ..Default::default()
        }
    }

    pub fn grid(grid: bool) -> Self {
        Self {
            grid: Some(grid),
            ..Default::default()
        }
    }

    pub fn undo() -> Self {
        Self {
            undo: true,
            ..Default::default()
        }
    }

    pub fn resize(tiles: TileDimensions) -> Self {
        Self {
            resize: Some(tiles),
            ..Default::default()
        }
    }

    pub fn with_tool(mut self, tool: ToolKind) -> Self {
        self.tool = Some(tool);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Short description for logging
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.undo {
            parts.push("undo".to_owned());
        }
        if let Some(tiles) = self.resize {
            parts.push(format!("resize {}x{}", tiles.tiles_x, tiles.tiles_y));
        }
        if let Some(tool) = self.tool {
            parts.push(format!("tool={tool}"));
        }
        if let Some(color) = self.color {
            parts.push(format!("color={color}"));
        }
        if self.picture.is_some() {
            parts.push("picture".to_owned());
        }
        if let Some(grid) = self.grid {
            parts.push(format!("grid={grid}"));
        }
        if parts.is_empty() {
            "noop".to_owned()
        } else {
            parts.join(" ")
        }
    }
}
