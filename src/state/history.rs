use log::{debug, warn};

use super::{Action, EditorState};
use crate::config::EditorConfig;
use crate::picture::Picture;

/// Combines `action` with `state` and returns the next state.
///
/// Transitions, checked in order:
/// 1. `undo`: restore the head of the undo stack and reset `done_at` so the
///    next edit is recorded immediately. Undo with nothing to restore is a
///    no-op.
/// 2. `resize`: replace the picture with a blank one of the new size. The
///    undo stack is cleared because its pictures no longer fit the tiles.
///    Tile counts outside `1..=max_tiles` leave the state untouched.
/// 3. `picture` arriving more than `coalesce_window_ms` after the last
///    recorded edit: push the old picture onto the undo stack, then merge.
/// 4. Anything else is merged without touching the history, so bursts of
///    edits collapse into one undo step.
pub fn update_state(
    state: &EditorState,
    action: Action,
    now_ms: u64,
    config: &EditorConfig,
) -> EditorState {
    if action.undo {
        let mut next = state.clone();
        return match next.done.pop_front() {
            Some(previous) => {
                debug!("Undo: {} step(s) left", next.done.len());
                next.picture = previous;
                next.done_at = 0;
                next
            }
            None => {
                debug!("Undo requested with empty history");
                next
            }
        };
    }

    if let Some(tiles) = action.resize {
        if let Err(err) = tiles.check(config.max_tiles) {
            warn!("Ignoring resize: {err}");
            return state.clone();
        }
        let mut next = merge(state, action);
        next.tiles = tiles;
        next.picture = Picture::empty(tiles, config.background).into_ref();
        next.done.clear();
        next.done_at = 0;
        debug!(
            "Resized to {}x{} tiles ({}x{} pixels)",
            tiles.tiles_x,
            tiles.tiles_y,
            next.picture.width(),
            next.picture.height()
        );
        return next;
    }

    if action.picture.is_some() && state.done_at < now_ms.saturating_sub(config.coalesce_window_ms) {
        let previous = state.picture.clone();
        let mut next = merge(state, action);
        next.done.push_front(previous);
        next.done.truncate(config.undo_limit);
        next.done_at = now_ms;
        debug!("Recorded undo step ({} total)", next.done.len());
        return next;
    }

    merge(state, action)
}

fn merge(state: &EditorState, action: Action) -> EditorState {
    let mut next = state.clone();
    if let Some(tool) = action.tool {
        next.tool = tool;
    }
    if let Some(color) = action.color {
        next.color = color;
    }
    if let Some(picture) = action.picture {
        next.picture = picture;
    }
    if let Some(grid) = action.grid {
        next.grid = grid;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::picture::{PixelChange, TileDimensions};
    use crate::tools::ToolKind;
    use std::sync::Arc;

    const NOW: u64 = 1_700_000_000_000;

    fn edited(state: &EditorState, x: i32) -> Action {
        let change = PixelChange { x, y: 0, color: Color::WHITE };
        Action::picture(state.picture.draw(&[change]).unwrap())
    }

    #[test]
    fn test_merge_leaves_history_alone() {
        let config = EditorConfig::default();
        let state = EditorState::new(&config);
        let next = update_state(&state, Action::tool(ToolKind::Fill).with_grid(false), NOW, &config);
        assert_eq!(next.tool, ToolKind::Fill);
        assert!(!next.grid);
        assert!(next.done.is_empty());
        assert_eq!(next.done_at, 0);
        assert!(Arc::ptr_eq(&next.picture, &state.picture));
    }

    #[test]
    fn test_undo_stack_is_capped() {
        let config = EditorConfig {
            undo_limit: 3,
            ..Default::default()
        };
        let mut state = EditorState::new(&config);
        let mut now = NOW;
        for x in 0..5 {
            now += config.coalesce_window_ms + 1;
            state = update_state(&state, edited(&state, x), now, &config);
        }
        assert_eq!(state.done.len(), 3);
        // the newest snapshot has the four earlier edits
        assert_eq!(state.done[0].pixel((3, 0).into()).unwrap(), Color::WHITE);
        assert_eq!(state.done[0].pixel((4, 0).into()).unwrap(), Color::BACKGROUND);
    }

    #[test]
    fn test_undo_resets_done_at() {
        let config = EditorConfig::default();
        let state = EditorState::new(&config);
        let edited_state = update_state(&state, edited(&state, 0), NOW, &config);
        assert_eq!(edited_state.done_at, NOW);

        let undone = update_state(&edited_state, Action::undo(), NOW + 10, &config);
        assert_eq!(undone.done_at, 0);
        assert!(undone.done.is_empty());
        assert!(Arc::ptr_eq(&undone.picture, &state.picture));

        // the next edit is recorded even though it is inside the old window
        let again = update_state(&undone, edited(&undone, 1), NOW + 20, &config);
        assert_eq!(again.done.len(), 1);
    }

    #[test]
    fn test_resize_resets_picture_and_history() {
        let config = EditorConfig::default();
        let state = EditorState::new(&config);
        let state = update_state(&state, edited(&state, 0), NOW, &config);
        let tiles = TileDimensions::new(2, 3);

        let next = update_state(&state, Action::resize(tiles), NOW + 5_000, &config);
        assert_eq!(next.tiles, tiles);
        assert_eq!((next.picture.width(), next.picture.height()), (16, 24));
        assert!(next.picture.pixels().iter().all(|&c| c == config.background));
        assert!(next.done.is_empty());
        assert_eq!(next.done_at, 0);
    }

    #[test]
    fn test_resize_out_of_range_is_ignored() {
        let config = EditorConfig::default();
        let state = EditorState::new(&config);
        let state = update_state(&state, edited(&state, 0), NOW, &config);

        for tiles in [
            TileDimensions::new(0, 3),
            TileDimensions::new(3, 0),
            TileDimensions::new(config.max_tiles + 1, 2),
            TileDimensions::new(usize::MAX / 8 + 1, 6),
        ] {
            let next = update_state(&state, Action::resize(tiles), NOW + 5_000, &config);
            assert_eq!(next.tiles, state.tiles);
            assert!(Arc::ptr_eq(&next.picture, &state.picture));
            assert_eq!(next.done.len(), 1);
            assert_eq!(next.picture.width(), next.tiles.tiles_x * 8);
            assert_eq!(next.picture.height(), next.tiles.tiles_y * 8);
        }
    }
}
