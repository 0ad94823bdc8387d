use egui::{Color32, Ui};

use crate::color::Color;
use crate::components::tool_button::ToolButton;
use crate::picture::TileDimensions;
use crate::state::{Action, EditorState};
use crate::tools::ToolKind;

/// What a control asks the app to do
#[derive(Debug, Clone, PartialEq)]
pub enum ControlRequest {
    Dispatch(Action),
    /// Export the current picture
    Save,
    /// Import a picture from a file
    Load,
}

/// A widget in the controls panel.
///
/// `sync_state` is called after every dispatch and must only refresh the
/// control's own view of the state.
pub trait Control {
    fn sync_state(&mut self, state: &EditorState);

    fn ui(&mut self, ui: &mut Ui) -> Option<ControlRequest>;
}

/// The standard control set, in panel order
pub fn base_controls(state: &EditorState, max_tiles: usize) -> Vec<Box<dyn Control>> {
    let mut controls: Vec<Box<dyn Control>> = vec![
        Box::new(ToolSelect::default()),
        Box::new(ColorSelect::default()),
        Box::new(SaveButton),
        Box::new(LoadButton),
        Box::new(UndoButton::default()),
        Box::new(GridToggle::default()),
        Box::new(TilesInput::new(Axis::X, max_tiles)),
        Box::new(TilesInput::new(Axis::Y, max_tiles)),
    ];
    for control in &mut controls {
        control.sync_state(state);
    }
    controls
}

#[derive(Debug, Default)]
pub struct ToolSelect {
    selected: ToolKind,
}

impl Control for ToolSelect {
    fn sync_state(&mut self, state: &EditorState) {
        self.selected = state.tool;
    }

    fn ui(&mut self, ui: &mut Ui) -> Option<ControlRequest> {
        let mut request = None;
        ui.label("🖌 Tool:");
        for tool in ToolKind::ALL {
            if ToolButton::new(tool, tool == self.selected).show(ui).clicked() {
                log::info!("Tool selected from UI: {tool}");
                request = Some(ControlRequest::Dispatch(Action::tool(tool)));
            }
        }
        request
    }
}

#[derive(Debug)]
pub struct ColorSelect {
    color: Color32,
}

impl Default for ColorSelect {
    fn default() -> Self {
        Self {
            color: Color::BLACK.into(),
        }
    }
}

impl Control for ColorSelect {
    fn sync_state(&mut self, state: &EditorState) {
        self.color = state.color.into();
    }

    fn ui(&mut self, ui: &mut Ui) -> Option<ControlRequest> {
        ui.label("🎨 Color:");
        let response = egui::color_picker::color_edit_button_srgba(
            ui,
            &mut self.color,
            egui::color_picker::Alpha::Opaque,
        );
        response
            .changed()
            .then(|| ControlRequest::Dispatch(Action::color(self.color.into())))
    }
}

#[derive(Debug, Default)]
pub struct SaveButton;

impl Control for SaveButton {
    fn sync_state(&mut self, _state: &EditorState) {}

    fn ui(&mut self, ui: &mut Ui) -> Option<ControlRequest> {
        ui.button("💾 Save").clicked().then_some(ControlRequest::Save)
    }
}

#[derive(Debug, Default)]
pub struct LoadButton;

impl Control for LoadButton {
    fn sync_state(&mut self, _state: &EditorState) {}

    fn ui(&mut self, ui: &mut Ui) -> Option<ControlRequest> {
        ui.button("📁 Load").clicked().then_some(ControlRequest::Load)
    }
}

#[derive(Debug, Default)]
pub struct UndoButton {
    enabled: bool,
}

impl Control for UndoButton {
    fn sync_state(&mut self, state: &EditorState) {
        self.enabled = state.can_undo();
    }

    fn ui(&mut self, ui: &mut Ui) -> Option<ControlRequest> {
        ui.add_enabled(self.enabled, egui::Button::new("⮪ Undo"))
            .clicked()
            .then(|| ControlRequest::Dispatch(Action::undo()))
    }
}

#[derive(Debug, Default)]
pub struct GridToggle {
    grid: bool,
}

impl Control for GridToggle {
    fn sync_state(&mut self, state: &EditorState) {
        self.grid = state.grid;
    }

    fn ui(&mut self, ui: &mut Ui) -> Option<ControlRequest> {
        ui.selectable_label(self.grid, "# Grid")
            .clicked()
            .then(|| ControlRequest::Dispatch(Action::grid(!self.grid)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Text field for one of the tile counts. Committing a new count resizes
/// the canvas.
#[derive(Debug)]
pub struct TilesInput {
    axis: Axis,
    max_tiles: usize,
    tiles: TileDimensions,
    text: String,
}

impl TilesInput {
    pub fn new(axis: Axis, max_tiles: usize) -> Self {
        Self {
            axis,
            max_tiles,
            tiles: TileDimensions::default(),
            text: String::new(),
        }
    }

    fn current(&self) -> usize {
        match self.axis {
            Axis::X => self.tiles.tiles_x,
            Axis::Y => self.tiles.tiles_y,
        }
    }

    /// Parses the edited text; invalid or unchanged input resets the field
    pub fn commit(&mut self) -> Option<ControlRequest> {
        let request = match self.text.trim().parse::<usize>() {
            Ok(count) if count == self.current() => None,
            Ok(count) if (1..=self.max_tiles).contains(&count) => {
                let mut tiles = self.tiles;
                match self.axis {
                    Axis::X => tiles.tiles_x = count,
                    Axis::Y => tiles.tiles_y = count,
                }
                return Some(ControlRequest::Dispatch(Action::resize(tiles)));
            }
            Ok(count) => {
                log::warn!("Tile count {count} is outside 1..={}", self.max_tiles);
                None
            }
            Err(_) => {
                log::warn!("Ignoring tile count {:?}", self.text);
                None
            }
        };
        self.text = self.current().to_string();
        request
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Control for TilesInput {
    fn sync_state(&mut self, state: &EditorState) {
        self.tiles = state.tiles;
        self.text = self.current().to_string();
    }

    fn ui(&mut self, ui: &mut Ui) -> Option<ControlRequest> {
        ui.label(match self.axis {
            Axis::X => "Tiles X:",
            Axis::Y => "Tiles Y:",
        });
        let response = ui.add(egui::TextEdit::singleline(&mut self.text).desired_width(32.0));
        if response.lost_focus() {
            self.commit()
        } else {
            None
        }
    }
}
