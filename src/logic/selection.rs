use crate::logic::query::{QuerySink, clear_query};
use crate::state::AppState;

/// What: Move the dropdown highlight by `delta`, clamped to the candidate list.
///
/// Inputs:
/// - `app`: Application state
/// - `delta`: Signed step; negative moves up
///
/// Details:
/// - No-op when the dropdown is hidden or empty.
pub fn move_sel(app: &mut AppState, delta: isize) {
    if !app.results_visible || app.candidates.is_empty() {
        return;
    }
    let last = app.candidates.len() - 1;
    let next = app.selected.saturating_add_signed(delta).min(last);
    app.selected = next;
    app.list_state.select(Some(next));
}

/// What: Move the selected candidate at `index` into the tag collection.
///
/// Inputs:
/// - `app`: Application state
/// - `index`: Position in `candidates`
/// - `sink`: Dispatcher notified when the query is cleared
///
/// Output:
/// - `true` when a tag was added.
///
/// Details:
/// - Rows whose package name is already tagged are disabled and ignored.
/// - On success the package is appended, the query cleared, and the dropdown hidden.
pub fn select_candidate(app: &mut AppState, index: usize, sink: &dyn QuerySink) -> bool {
    let Some(pkg) = app.candidates.get(index) else {
        return false;
    };
    if app.is_tagged(&pkg.name) {
        tracing::debug!(name = %pkg.name, "candidate already tagged");
        return false;
    }
    let pkg = pkg.clone();
    tracing::info!(name = %pkg.name, version = %pkg.version, "tag added");
    app.tags.push(pkg);
    clear_query(app, sink);
    true
}

/// What: Remove every tag whose name equals `name`.
///
/// Inputs:
/// - `app`: Application state
/// - `name`: Tag name to drop
///
/// Output:
/// - Number of tags removed.
///
/// Details:
/// - Remaining tags keep their relative order; the chip cursor is clamped.
pub fn remove_tag(app: &mut AppState, name: &str) -> usize {
    let before = app.tags.len();
    app.tags.retain(|t| t.name != name);
    let removed = before - app.tags.len();
    app.tag_cursor = app.tag_cursor.min(app.tags.len().saturating_sub(1));
    if removed > 0 {
        tracing::info!(name = %name, removed, "tag removed");
    }
    removed
}

/// What: Move the chip cursor by `delta`, clamped to the tag list.
pub fn move_tag_cursor(app: &mut AppState, delta: isize) {
    if app.tags.is_empty() {
        app.tag_cursor = 0;
        return;
    }
    app.tag_cursor = app
        .tag_cursor
        .saturating_add_signed(delta)
        .min(app.tags.len() - 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Package, QueryInput};
    use tokio::sync::mpsc;

    fn app_with_candidates(names: &[&str]) -> AppState {
        let mut app = AppState {
            input: "rea".into(),
            caret: 3,
            results_visible: true,
            candidates: names.iter().map(|n| Package::named(n, "1.0.0")).collect(),
            ..Default::default()
        };
        app.list_state.select(Some(0));
        app
    }

    #[test]
    /// What: Selecting appends to tags, clears the query, and hides the dropdown.
    ///
    /// Inputs:
    /// - Existing tag `vue`; candidates `react`, `react-dom`; select index 0.
    ///
    /// Output:
    /// - Tags `[vue, react]`; empty query submitted; dropdown hidden.
    fn select_candidate_appends_and_clears() {
        let (tx, mut rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = app_with_candidates(&["react", "react-dom"]);
        app.tags.push(Package::named("vue", "3.5.0"));
        assert!(select_candidate(&mut app, 0, &tx));
        let names: Vec<&str> = app.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["vue", "react"]);
        assert!(app.input.is_empty());
        assert!(!app.results_visible);
        assert_eq!(rx.try_recv().expect("cleared query").text, "");
    }

    #[test]
    /// What: A candidate already tagged by name cannot be selected again.
    ///
    /// Inputs:
    /// - Tag `react` with a different version than the refetched candidate.
    ///
    /// Output:
    /// - Selection refused; state unchanged; nothing submitted.
    fn select_candidate_refuses_tagged_name() {
        let (tx, mut rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = app_with_candidates(&["react"]);
        app.tags.push(Package::named("react", "0.14.0"));
        assert!(!select_candidate(&mut app, 0, &tx));
        assert_eq!(app.tags.len(), 1);
        assert_eq!(app.input, "rea");
        assert!(app.results_visible);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Out-of-range selection is a no-op.
    fn select_candidate_out_of_range() {
        let (tx, _rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = app_with_candidates(&["react"]);
        assert!(!select_candidate(&mut app, 5, &tx));
        assert!(app.tags.is_empty());
    }

    #[test]
    /// What: Removal drops every tag with the name and keeps the rest in order.
    ///
    /// Inputs:
    /// - Tags `[a, b, a, c]`; remove `a`.
    ///
    /// Output:
    /// - Two removed; tags `[b, c]`; cursor clamped.
    fn remove_tag_removes_all_with_name() {
        let mut app = AppState::default();
        for n in ["a", "b", "a", "c"] {
            app.tags.push(Package::named(n, "1.0.0"));
        }
        app.tag_cursor = 3;
        assert_eq!(remove_tag(&mut app, "a"), 2);
        let names: Vec<&str> = app.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["b", "c"]);
        assert_eq!(app.tag_cursor, 1);
        assert_eq!(remove_tag(&mut app, "zzz"), 0);
    }

    #[test]
    /// What: Highlight movement clamps at both ends and ignores a hidden dropdown.
    fn move_sel_clamps() {
        let mut app = app_with_candidates(&["a", "b", "c"]);
        move_sel(&mut app, -1);
        assert_eq!(app.selected, 0);
        move_sel(&mut app, 10);
        assert_eq!(app.selected, 2);
        assert_eq!(app.list_state.selected(), Some(2));
        app.results_visible = false;
        move_sel(&mut app, -1);
        assert_eq!(app.selected, 2);
    }

    #[test]
    /// What: Chip cursor clamps to the tag list.
    fn move_tag_cursor_clamps() {
        let mut app = AppState::default();
        move_tag_cursor(&mut app, 1);
        assert_eq!(app.tag_cursor, 0);
        app.tags.push(Package::named("a", "1"));
        app.tags.push(Package::named("b", "1"));
        move_tag_cursor(&mut app, 5);
        assert_eq!(app.tag_cursor, 1);
        move_tag_cursor(&mut app, -5);
        assert_eq!(app.tag_cursor, 0);
    }
}
