mod action;
mod editor_state;
mod history;

pub use action::Action;
pub use editor_state::EditorState;
pub use history::update_state;
