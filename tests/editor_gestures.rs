use std::rc::Rc;

use pixel_tiles::util::FixedClock;
use pixel_tiles::{
    Color, EditorConfig, PictureError, PixelEditor, Position, TileDimensions, ToolKind,
};

const NOW: u64 = 1_700_000_000_000;

fn test_editor() -> (PixelEditor<Rc<FixedClock>>, Rc<FixedClock>) {
    let clock = Rc::new(FixedClock::new(NOW));
    let config = EditorConfig {
        default_tiles: TileDimensions::new(2, 2),
        ..Default::default()
    };
    (PixelEditor::with_clock(config, clock.clone()), clock)
}

fn count_color(editor: &PixelEditor<Rc<FixedClock>>, color: Color) -> usize {
    editor
        .state()
        .picture
        .pixels()
        .iter()
        .filter(|&&c| c == color)
        .count()
}

#[test]
fn test_line_drag_redraws_over_latest_state() {
    let (mut editor, _clock) = test_editor();
    editor.select_tool(ToolKind::Line);

    editor.pointer_down(Position::new(0, 0));
    editor.pointer_move(Position::new(5, 0));
    editor.pointer_move(Position::new(0, 5));
    editor.pointer_up();

    // both lines stay: each move draws over the picture the previous one left
    assert_eq!(count_color(&editor, Color::BLACK), 6 + 5);
    // and the whole drag was one undo step
    assert_eq!(editor.state().done.len(), 1);
}

#[test]
fn test_undo_after_gesture_restores_picture() {
    let (mut editor, clock) = test_editor();
    let blank = editor.state().picture.clone();

    editor.pointer_down(Position::new(1, 1));
    editor.pointer_move(Position::new(2, 1));
    editor.pointer_up();
    assert_eq!(count_color(&editor, Color::BLACK), 2);

    clock.advance(5_000);
    editor.undo();
    assert_eq!(*editor.state().picture, *blank);
    assert!(!editor.can_undo());
}

#[test]
fn test_separate_gestures_are_separate_undo_steps() {
    let (mut editor, clock) = test_editor();
    editor.pointer_down(Position::new(0, 0));
    editor.pointer_up();
    clock.advance(1_500);
    editor.pointer_down(Position::new(1, 0));
    editor.pointer_up();
    assert_eq!(editor.state().done.len(), 2);
}

#[test]
fn test_single_shot_tools_ignore_moves() {
    let (mut editor, _clock) = test_editor();
    editor.set_color(Color::WHITE);
    editor.select_tool(ToolKind::Fill);
    editor.pointer_down(Position::new(3, 3));
    assert!(!editor.is_gesture_active());
    assert_eq!(count_color(&editor, Color::WHITE), 16 * 16);

    editor.select_tool(ToolKind::Pick);
    editor.set_color(Color::BLACK);
    editor.pointer_down(Position::new(0, 0));
    assert_eq!(editor.state().color, Color::WHITE);
}

#[test]
fn test_press_outside_picture_is_ignored() {
    let (mut editor, _clock) = test_editor();
    let before = editor.state().clone();
    editor.pointer_down(Position::new(16, 0));
    assert!(!editor.is_gesture_active());
    assert_eq!(*editor.state(), before);
}

#[test]
fn test_rejected_move_keeps_last_state() {
    let (mut editor, _clock) = test_editor();
    editor.select_tool(ToolKind::Rectangle);
    editor.pointer_down(Position::new(1, 1));
    editor.pointer_move(Position::new(2, 2));
    let drawn = editor.state().picture.clone();

    editor.pointer_move(Position::new(40, 40));
    assert!(std::sync::Arc::ptr_eq(&editor.state().picture, &drawn));
    editor.pointer_up();
}

#[test]
fn test_resize_replaces_picture() {
    let (mut editor, _clock) = test_editor();
    editor.pointer_down(Position::new(0, 0));
    editor.pointer_up();

    editor.resize(TileDimensions::new(3, 1)).unwrap();
    let state = editor.state();
    assert_eq!((state.picture.width(), state.picture.height()), (24, 8));
    assert_eq!(state.tiles, TileDimensions::new(3, 1));
    assert!(!editor.can_undo());

    assert!(editor.resize(TileDimensions::new(0, 1)).is_err());
    let too_wide = TileDimensions::new(editor.config().max_tiles + 1, 1);
    assert!(matches!(
        editor.resize(too_wide),
        Err(PictureError::TooManyTiles { .. })
    ));
    assert_eq!(editor.state().tiles, TileDimensions::new(3, 1));
}

#[test]
fn test_export_and_import_round_trip() {
    let (mut editor, clock) = test_editor();
    editor.set_color(Color::rgb(10, 200, 30));
    editor.pointer_down(Position::new(4, 4));
    editor.pointer_up();
    let picture = editor.state().picture.clone();

    let png = editor.export_png().unwrap();
    editor.resize(TileDimensions::new(1, 1)).unwrap();
    clock.advance(2_000);
    editor.import_image(&png).unwrap();

    assert_eq!(*editor.state().picture, *picture);
    // the import can be undone
    assert!(editor.can_undo());
    assert!(editor.import_image(b"nope").is_err());
}
