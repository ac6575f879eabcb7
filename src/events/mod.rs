//! Event handling layer for the tag picker.
//!
//! Converts raw `crossterm` events into mutations on [`AppState`]. All
//! functions here are synchronous; query changes are handed to a
//! [`QuerySink`] and the fetch happens elsewhere.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind};

use crate::logic::QuerySink;
use crate::state::{AppState, Focus};
use crate::theme::KeyMap;

pub mod dismiss;
mod mouse;
mod search;
mod tags;

pub use dismiss::ListenerClaim;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event (key, mouse, resize, ...)
/// - `app`: Application state
/// - `sink`: Dispatcher receiving query changes
/// - `claim`: Listener claim held by the running widget
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Only key presses are handled; repeats and releases are ignored.
/// - Escape dismisses the search from either focus.
/// - The focus toggle only moves to the tag row when tags exist.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    sink: &dyn QuerySink,
    claim: &ListenerClaim,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if KeyMap::any(&app.keymap.exit, ke.code, ke.modifiers) {
                return true;
            }
            if ke.code == KeyCode::Esc {
                dismiss::dismiss(app, sink, claim);
                app.focus = Focus::Search;
                return false;
            }
            if KeyMap::any(&app.keymap.toggle_focus, ke.code, ke.modifiers) {
                app.focus = match app.focus {
                    Focus::Search if !app.tags.is_empty() => {
                        app.tag_cursor = app.tag_cursor.min(app.tags.len() - 1);
                        Focus::Tags
                    }
                    _ => Focus::Search,
                };
                return false;
            }
            match app.focus {
                Focus::Search => search::handle_search_key(ke, app, sink),
                Focus::Tags => {
                    if !tags::handle_tags_key(ke, app) {
                        search::handle_search_key(ke, app, sink);
                    }
                }
            }
        }
        CEvent::Mouse(m) => mouse::handle_mouse_event(m, app, sink, claim),
        _ => {}
    }
    false
}
