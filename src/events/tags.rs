use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{move_tag_cursor, remove_tag};
use crate::state::{AppState, Focus};
use crate::theme::KeyMap;

/// What: Handle a key press while the tag row has focus.
///
/// Inputs:
/// - `ke`: Key event (already filtered to presses)
/// - `app`: Application state
///
/// Output:
/// - `true` when the key was consumed; `false` to let the caller forward it
///   to the query input.
///
/// Details:
/// - Left/Right move between chips; the remove binding drops the focused tag.
/// - Focus returns to the input once the last tag is removed.
pub fn handle_tags_key(ke: KeyEvent, app: &mut AppState) -> bool {
    if KeyMap::any(&app.keymap.remove_tag, ke.code, ke.modifiers) {
        if let Some(name) = app.tags.get(app.tag_cursor).map(|t| t.name.clone()) {
            remove_tag(app, &name);
        }
        if app.tags.is_empty() {
            app.focus = Focus::Search;
        }
        return true;
    }
    match ke.code {
        KeyCode::Left => move_tag_cursor(app, -1),
        KeyCode::Right => move_tag_cursor(app, 1),
        KeyCode::Home => app.tag_cursor = 0,
        KeyCode::End => app.tag_cursor = app.tags.len().saturating_sub(1),
        KeyCode::Char(_) => {
            app.focus = Focus::Search;
            return false;
        }
        _ => {}
    }
    true
}
