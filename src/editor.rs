use log::{debug, info, warn};

use crate::codec;
use crate::color::Color;
use crate::config::EditorConfig;
use crate::error::{CodecError, PictureError};
use crate::picture::{Position, TileDimensions};
use crate::state::{Action, EditorState, update_state};
use crate::tools::{Tool, ToolKind, ToolResult, ToolType};
use crate::util::time::{Clock, SystemClock};

/// Owns the current editor state and feeds every action through the history
/// reducer.
///
/// Pointer gestures are driven through [`PixelEditor::pointer_down`],
/// [`PixelEditor::pointer_move`] and [`PixelEditor::pointer_up`]; the tool
/// for a gesture is chosen at press time and always sees the newest state.
pub struct PixelEditor<C: Clock = SystemClock> {
    state: EditorState,
    config: EditorConfig,
    clock: C,
    /// Tool of the gesture in progress, if it wants move events
    gesture: Option<ToolType>,
}

impl PixelEditor<SystemClock> {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for PixelEditor<SystemClock> {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl<C: Clock> PixelEditor<C> {
    pub fn with_clock(config: EditorConfig, clock: C) -> Self {
        Self {
            state: EditorState::new(&config),
            config,
            clock,
            gesture: None,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Runs `action` through the reducer and makes the result current
    pub fn dispatch(&mut self, action: Action) {
        debug!("Dispatch: {}", action.describe());
        let now = self.clock.now_ms();
        self.state = update_state(&self.state, action, now, &self.config);
    }

    fn dispatch_tool_result(&mut self, result: ToolResult) {
        match result {
            Ok(Some(action)) => self.dispatch(action),
            Ok(None) => {}
            Err(err) => warn!("Ignoring tool action: {err}"),
        }
    }

    /// Starts a gesture with the active tool at `pos`
    pub fn pointer_down(&mut self, pos: Position) {
        if !self.state.picture.contains(pos) {
            warn!("Ignoring press outside the picture at ({}, {})", pos.x, pos.y);
            return;
        }
        let mut tool = ToolType::new(self.state.tool);
        debug!("Gesture start: {} at ({}, {})", tool.name(), pos.x, pos.y);
        let result = tool.on_pointer_down(pos, &self.state);
        self.dispatch_tool_result(result);
        self.gesture = tool.is_continuous().then_some(tool);
    }

    /// Continues the current gesture; ignored when no gesture wants moves
    pub fn pointer_move(&mut self, pos: Position) {
        let Some(tool) = self.gesture.as_mut() else {
            return;
        };
        let result = tool.on_pointer_move(pos, &self.state);
        self.dispatch_tool_result(result);
    }

    /// Ends the current gesture. The last dispatched state stays.
    pub fn pointer_up(&mut self) {
        if let Some(tool) = self.gesture.take() {
            debug!("Gesture end: {}", tool.name());
        }
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn undo(&mut self) {
        self.dispatch(Action::undo());
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn select_tool(&mut self, tool: ToolKind) {
        self.dispatch(Action::tool(tool));
    }

    pub fn set_color(&mut self, color: Color) {
        self.dispatch(Action::color(color));
    }

    pub fn toggle_grid(&mut self) {
        self.dispatch(Action::grid(!self.state.grid));
    }

    /// Replaces the picture with a blank one of `tiles` tiles.
    ///
    /// Fails when either count is zero or above `max_tiles`.
    pub fn resize(&mut self, tiles: TileDimensions) -> Result<(), PictureError> {
        tiles.check(self.config.max_tiles)?;
        info!("Resizing canvas to {}x{} tiles", tiles.tiles_x, tiles.tiles_y);
        self.gesture = None;
        self.dispatch(Action::resize(tiles));
        Ok(())
    }

    /// Decodes an image and makes it the current picture
    pub fn import_image(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let picture = codec::picture_from_image_bytes(bytes, self.config.max_import_side)?;
        info!("Imported {}x{} picture", picture.width(), picture.height());
        self.gesture = None;
        self.dispatch(Action::picture(picture));
        Ok(())
    }

    /// Encodes the current picture as PNG
    pub fn export_png(&self) -> Result<Vec<u8>, CodecError> {
        codec::picture_to_png(&self.state.picture)
    }
}
