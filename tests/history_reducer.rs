use std::sync::Arc;

use pixel_tiles::{Action, Color, EditorConfig, EditorState, PixelChange, ToolKind, update_state};

const NOW: u64 = 1_700_000_000_000;

fn edit(state: &EditorState, x: i32) -> Action {
    let change = PixelChange { x, y: 0, color: Color::rgb(9, 9, 9) };
    Action::picture(state.picture.draw(&[change]).unwrap())
}

#[test]
fn test_edit_inside_window_is_coalesced() {
    let config = EditorConfig::default();
    let mut state = EditorState::new(&config);
    state.done_at = NOW;

    let next = update_state(&state, edit(&state, 0), NOW + 500, &config);
    assert!(next.done.is_empty());
    assert_eq!(next.done_at, NOW);
    assert!(!Arc::ptr_eq(&next.picture, &state.picture));
}

#[test]
fn test_edit_after_window_pushes_history() {
    let config = EditorConfig::default();
    let mut state = EditorState::new(&config);
    state.done_at = NOW;

    let later = NOW + 1_001;
    let next = update_state(&state, edit(&state, 0), later, &config);
    assert_eq!(next.done.len(), 1);
    assert!(Arc::ptr_eq(&next.done[0], &state.picture));
    assert_eq!(next.done_at, later);
}

#[test]
fn test_window_boundary_is_exclusive() {
    let config = EditorConfig::default();
    let mut state = EditorState::new(&config);
    state.done_at = NOW;

    // exactly one window later is still inside it
    let next = update_state(&state, edit(&state, 0), NOW + 1_000, &config);
    assert!(next.done.is_empty());
}

#[test]
fn test_undo_with_empty_history_is_a_noop() {
    let config = EditorConfig::default();
    let mut state = EditorState::new(&config);
    state.color = Color::rgb(1, 2, 3);
    state.tool = ToolKind::Circle;

    let next = update_state(&state, Action::undo(), NOW, &config);
    assert_eq!(next, state);
    assert!(Arc::ptr_eq(&next.picture, &state.picture));
}

#[test]
fn test_undo_restores_most_recent_first() {
    let config = EditorConfig::default();
    let s0 = EditorState::new(&config);
    let s1 = update_state(&s0, edit(&s0, 0), NOW, &config);
    let s2 = update_state(&s1, edit(&s1, 1), NOW + 2_000, &config);
    assert_eq!(s2.done.len(), 2);

    let u1 = update_state(&s2, Action::undo(), NOW + 2_100, &config);
    assert!(Arc::ptr_eq(&u1.picture, &s1.picture));
    let u2 = update_state(&u1, Action::undo(), NOW + 2_200, &config);
    assert!(Arc::ptr_eq(&u2.picture, &s0.picture));
    assert!(!u2.can_undo());
}

#[test]
fn test_fields_merge_shallowly() {
    let config = EditorConfig::default();
    let state = EditorState::new(&config);
    let action = Action::color(Color::WHITE).with_tool(ToolKind::Line).with_grid(false);

    let next = update_state(&state, action, NOW, &config);
    assert_eq!(next.color, Color::WHITE);
    assert_eq!(next.tool, ToolKind::Line);
    assert!(!next.grid);
    assert_eq!(next.tiles, state.tiles);
    assert!(Arc::ptr_eq(&next.picture, &state.picture));
}

#[test]
fn test_reducer_never_mutates_input() {
    let config = EditorConfig::default();
    let state = EditorState::new(&config);
    let snapshot = state.clone();
    let _ = update_state(&state, edit(&state, 3), NOW, &config);
    let _ = update_state(&state, Action::undo(), NOW, &config);
    assert_eq!(state, snapshot);
}
