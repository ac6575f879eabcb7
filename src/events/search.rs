use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{QuerySink, move_sel, select_candidate, send_query};
use crate::state::AppState;
use crate::util::char_to_byte;

/// Rows skipped by PageUp/PageDown in the dropdown.
const PAGE_STEP: isize = 5;

/// What: Insert `ch` at the caret.
fn insert_char(app: &mut AppState, ch: char) {
    let at = char_to_byte(&app.input, app.caret);
    app.input.insert(at, ch);
    app.caret += 1;
}

/// What: Remove the character before the caret.
///
/// Output:
/// - `true` when the text changed.
fn backspace(app: &mut AppState) -> bool {
    if app.caret == 0 {
        return false;
    }
    app.caret -= 1;
    let at = char_to_byte(&app.input, app.caret);
    app.input.remove(at);
    true
}

/// What: Remove the character under the caret.
///
/// Output:
/// - `true` when the text changed.
fn delete_forward(app: &mut AppState) -> bool {
    if app.caret >= app.input.chars().count() {
        return false;
    }
    let at = char_to_byte(&app.input, app.caret);
    app.input.remove(at);
    true
}

/// What: Handle a key press while the query input has focus.
///
/// Inputs:
/// - `ke`: Key event (already filtered to presses)
/// - `app`: Application state
/// - `sink`: Dispatcher receiving query changes
///
/// Details:
/// - Every edit that changes the text re-arms the dispatcher.
/// - Up/Down/PageUp/PageDown move the dropdown highlight; Enter selects it.
/// - Enter does nothing while the dropdown is not on screen, e.g. when the
///   terminal left too little room to draw it.
pub fn handle_search_key(ke: KeyEvent, app: &mut AppState, sink: &dyn QuerySink) {
    let changed = match ke.code {
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            insert_char(app, ch);
            true
        }
        KeyCode::Backspace => backspace(app),
        KeyCode::Delete => delete_forward(app),
        KeyCode::Left => {
            app.caret = app.caret.saturating_sub(1);
            false
        }
        KeyCode::Right => {
            app.caret = (app.caret + 1).min(app.input.chars().count());
            false
        }
        KeyCode::Home => {
            app.caret = 0;
            false
        }
        KeyCode::End => {
            app.caret = app.input.chars().count();
            false
        }
        KeyCode::Up => {
            move_sel(app, -1);
            false
        }
        KeyCode::Down => {
            move_sel(app, 1);
            false
        }
        KeyCode::PageUp => {
            move_sel(app, -PAGE_STEP);
            false
        }
        KeyCode::PageDown => {
            move_sel(app, PAGE_STEP);
            false
        }
        KeyCode::Enter => {
            // Only a row that was actually drawn can be picked.
            if app.results_visible && app.results_rect.is_some() && app.highlighted().is_some() {
                let idx = app.selected;
                select_candidate(app, idx, sink);
            }
            false
        }
        _ => false,
    };
    if changed {
        send_query(app, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Package, QueryInput};
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    /// What: Typing edits at the caret and submits every changed query.
    ///
    /// Inputs:
    /// - Keys `r`, `a`, Left, `e`, End, Backspace.
    ///
    /// Output:
    /// - Queries `r`, `ra`, `rea`, `re` submitted in order; caret moves stay silent.
    fn search_typing_submits_each_edit() {
        let (tx, mut rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = AppState::default();
        for code in [
            KeyCode::Char('r'),
            KeyCode::Char('a'),
            KeyCode::Left,
            KeyCode::Char('e'),
            KeyCode::End,
            KeyCode::Backspace,
        ] {
            handle_search_key(key(code), &mut app, &tx);
        }
        let mut seen = Vec::new();
        while let Ok(q) = rx.try_recv() {
            seen.push(q.text);
        }
        assert_eq!(seen, ["r", "ra", "rea", "re"]);
        assert_eq!(app.input, "re");
        assert_eq!(app.caret, 2);
    }

    #[test]
    /// What: Backspace at the start and Delete at the end leave the query alone.
    fn search_edges_do_not_submit() {
        let (tx, mut rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = AppState {
            input: "ab".into(),
            caret: 0,
            ..Default::default()
        };
        handle_search_key(key(KeyCode::Backspace), &mut app, &tx);
        app.caret = 2;
        handle_search_key(key(KeyCode::Delete), &mut app, &tx);
        assert!(rx.try_recv().is_err());
        assert_eq!(app.input, "ab");
    }

    #[test]
    /// What: Control chords are not inserted as text.
    fn search_ignores_control_chars() {
        let (tx, mut rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = AppState::default();
        handle_search_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );
        assert!(app.input.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Down then Enter selects the second candidate.
    ///
    /// Inputs:
    /// - Visible dropdown with `react`, `react-dom`.
    ///
    /// Output:
    /// - `react-dom` tagged; query cleared.
    fn search_enter_selects_highlighted() {
        let (tx, _rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = AppState {
            input: "rea".into(),
            caret: 3,
            results_visible: true,
            results_rect: Some((1, 6, 38, 2)),
            candidates: vec![
                Package::named("react", "18.3.1"),
                Package::named("react-dom", "18.3.1"),
            ],
            ..Default::default()
        };
        handle_search_key(key(KeyCode::Down), &mut app, &tx);
        handle_search_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.tags.len(), 1);
        assert_eq!(app.tags[0].name, "react-dom");
        assert!(app.input.is_empty());
        assert!(!app.results_visible);
    }

    #[test]
    /// What: Enter is ignored when the dropdown could not be drawn.
    ///
    /// Inputs:
    /// - Visible candidates but no recorded dropdown rect (too little room).
    ///
    /// Output:
    /// - No tag added; query and candidates kept.
    fn search_enter_ignored_when_dropdown_not_drawn() {
        let (tx, _rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = AppState {
            input: "rea".into(),
            caret: 3,
            results_visible: true,
            results_rect: None,
            candidates: vec![Package::named("react", "18.3.1")],
            ..Default::default()
        };
        handle_search_key(key(KeyCode::Enter), &mut app, &tx);
        assert!(app.tags.is_empty());
        assert_eq!(app.input, "rea");
        assert_eq!(app.candidates.len(), 1);
    }

    #[test]
    /// What: Enter on an empty candidate list is a no-op.
    fn search_enter_without_highlight_is_noop() {
        let (tx, mut rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = AppState {
            input: "xyz".into(),
            caret: 3,
            results_visible: true,
            results_rect: Some((1, 6, 38, 2)),
            ..Default::default()
        };
        assert!(app.highlighted().is_none());
        handle_search_key(key(KeyCode::Enter), &mut app, &tx);
        assert!(app.tags.is_empty());
        assert_eq!(app.input, "xyz");
        assert!(rx.try_recv().is_err());
    }
}
