use crate::logic::apply_search_results;
use crate::state::{AppState, SearchResults};

/// What: Handle search results arriving from a fetch task.
///
/// Inputs:
/// - `app`: Application state
/// - `new_results`: Packages tagged with the id of the query they answer
///
/// Details:
/// - Stale ids are dropped by [`apply_search_results`].
pub fn handle_search_results(app: &mut AppState, new_results: SearchResults) {
    let id = new_results.id;
    let count = new_results.items.len();
    if apply_search_results(app, new_results) {
        tracing::debug!(id, count, visible = app.results_visible, "search results applied");
    }
}

/// What: Handle a failed fetch.
///
/// Inputs:
/// - `app`: Application state
/// - `id`: Id of the query whose fetch failed
///
/// Details:
/// - The error was already logged by the fetch task. Candidates and dropdown
///   stay as they were; only the pending indicator is cleared.
pub fn handle_search_failure(app: &mut AppState, id: u64) {
    if id == app.latest_query_id {
        app.awaiting_results = false;
    }
}
