mod central_panel;
mod controls;
mod controls_panel;

pub use central_panel::central_panel;
pub use controls::{
    Axis, ColorSelect, Control, ControlRequest, GridToggle, LoadButton, SaveButton, TilesInput,
    ToolSelect, UndoButton, base_controls,
};
pub use controls_panel::controls_panel;
