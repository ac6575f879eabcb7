use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::dismiss::{ListenerClaim, dismiss, hit, is_outside};
use crate::logic::{QuerySink, move_sel, remove_tag, select_candidate};
use crate::state::{AppState, Focus};

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position and kind
/// - `app`: Application state holding the rectangles recorded by the last draw
/// - `sink`: Dispatcher receiving query changes
/// - `claim`: Listener claim required to dismiss
///
/// Details:
/// - Any button press outside the widget dismisses the search.
/// - Left click on a chip's remove marker removes that tag.
/// - Left click on a dropdown row selects that candidate.
/// - Left click in the input focuses it.
/// - Scroll wheel over the dropdown moves the highlight.
pub fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    sink: &dyn QuerySink,
    claim: &ListenerClaim,
) {
    let mx = m.column;
    let my = m.row;

    if let MouseEventKind::Down(button) = m.kind {
        if is_outside(app, mx, my) {
            dismiss(app, sink, claim);
            return;
        }
        if button != MouseButton::Left {
            return;
        }
        if let Some(name) = app
            .tag_remove_rects
            .iter()
            .find(|(r, _)| hit(*r, mx, my))
            .map(|(_, n)| n.clone())
        {
            remove_tag(app, &name);
            if app.tags.is_empty() {
                app.focus = Focus::Search;
            }
            return;
        }
        if app.results_visible
            && let Some(rect) = app.results_rect
            && hit(rect, mx, my)
        {
            let row = (my - rect.1) as usize + app.list_state.offset();
            if row < app.candidates.len() {
                app.selected = row;
                app.list_state.select(Some(row));
                select_candidate(app, row, sink);
            }
            return;
        }
        if let Some(rect) = app.input_rect
            && hit(rect, mx, my)
        {
            app.focus = Focus::Search;
        }
        return;
    }

    let over_results = app.results_visible && app.results_rect.is_some_and(|r| hit(r, mx, my));
    match m.kind {
        MouseEventKind::ScrollUp if over_results => move_sel(app, -1),
        MouseEventKind::ScrollDown if over_results => move_sel(app, 1),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::dismiss::test_mutex;
    use crate::state::{Package, QueryInput};
    use crossterm::event::KeyModifiers;
    use tokio::sync::mpsc;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn laid_out() -> AppState {
        AppState {
            input: "rea".into(),
            caret: 3,
            results_visible: true,
            candidates: vec![
                Package::named("react", "18.3.1"),
                Package::named("react-dom", "18.3.1"),
            ],
            tags: vec![Package::named("vue", "3.4.0")],
            widget_rect: Some((0, 0, 40, 12)),
            input_rect: Some((1, 4, 38, 1)),
            results_rect: Some((1, 6, 38, 2)),
            tag_remove_rects: vec![((8, 2, 1, 1), "vue".into())],
            ..Default::default()
        }
    }

    #[test]
    /// What: A click outside the widget dismisses; inside it does not.
    ///
    /// Inputs:
    /// - Left click inside the input, then a right click below the widget.
    ///
    /// Output:
    /// - Query survives the first click and is cleared by the second.
    fn mouse_outside_click_dismisses() {
        let _guard = test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let claim = ListenerClaim::acquire().expect("claim");
        let (tx, _rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = laid_out();
        handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 5, 4),
            &mut app,
            &tx,
            &claim,
        );
        assert_eq!(app.input, "rea");
        assert!(app.results_visible);
        handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Right), 5, 20),
            &mut app,
            &tx,
            &claim,
        );
        assert!(app.input.is_empty());
        assert!(!app.results_visible);
        assert_eq!(app.tags.len(), 1);
    }

    #[test]
    /// What: Clicking a dropdown row tags that package.
    fn mouse_click_row_selects() {
        let _guard = test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let claim = ListenerClaim::acquire().expect("claim");
        let (tx, _rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = laid_out();
        handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 10, 7),
            &mut app,
            &tx,
            &claim,
        );
        let names: Vec<_> = app.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["vue", "react-dom"]);
        assert!(!app.results_visible);
    }

    #[test]
    /// What: Clicking a chip's remove marker drops that tag and leaves the query.
    fn mouse_click_remove_marker() {
        let _guard = test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let claim = ListenerClaim::acquire().expect("claim");
        let (tx, _rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = laid_out();
        handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 8, 2),
            &mut app,
            &tx,
            &claim,
        );
        assert!(app.tags.is_empty());
        assert_eq!(app.input, "rea");
    }

    #[test]
    /// What: Wheel over the dropdown moves the highlight; elsewhere it is ignored.
    fn mouse_scroll_moves_highlight() {
        let _guard = test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let claim = ListenerClaim::acquire().expect("claim");
        let (tx, _rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = laid_out();
        handle_mouse_event(mouse(MouseEventKind::ScrollDown, 2, 2), &mut app, &tx, &claim);
        assert_eq!(app.selected, 0);
        handle_mouse_event(mouse(MouseEventKind::ScrollDown, 2, 6), &mut app, &tx, &claim);
        assert_eq!(app.selected, 1);
    }
}
