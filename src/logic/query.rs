use tokio::sync::mpsc;

use crate::logic::debounce::Debounced;
use crate::state::{AppState, QueryInput, SearchResults};

/// Destination for query updates produced by input handling.
///
/// The running widget submits through a [`Debounced`] dispatcher; tests and
/// tools can submit straight into a channel.
pub trait QuerySink {
    /// Accept the latest query.
    fn submit(&self, query: QueryInput);
}

impl QuerySink for Debounced<QueryInput> {
    fn submit(&self, query: QueryInput) {
        self.call(query);
    }
}

impl QuerySink for mpsc::UnboundedSender<QueryInput> {
    fn submit(&self, query: QueryInput) {
        let _ = self.send(query);
    }
}

/// What: Send the current query text to the dispatcher with a fresh id.
///
/// Inputs:
/// - `app`: Mutable application state; updates `next_query_id` and `latest_query_id`
/// - `sink`: Dispatcher receiving the `QueryInput`
///
/// Output:
/// - Submits a `QueryInput` with incremented id and current text.
///
/// Details:
/// - The id lets [`apply_search_results`] discard responses to superseded queries.
/// - An empty query is still submitted (it replaces any pending dispatch) but
///   hides the dropdown immediately and never leads to a fetch.
pub fn send_query(app: &mut AppState, sink: &dyn QuerySink) {
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    if app.input.is_empty() {
        app.results_visible = false;
        app.awaiting_results = false;
    } else {
        app.awaiting_results = true;
    }
    sink.submit(QueryInput {
        id,
        text: app.input.clone(),
    });
}

/// What: Clear the query text and hide the dropdown.
///
/// Inputs:
/// - `app`: Application state
/// - `sink`: Dispatcher notified of the now-empty query
///
/// Details:
/// - Used by selection, Escape, and outside-click dismissal.
pub fn clear_query(app: &mut AppState, sink: &dyn QuerySink) {
    app.input.clear();
    app.caret = 0;
    app.results_visible = false;
    send_query(app, sink);
}

/// What: Apply a response from the fetch task to the candidate list.
///
/// Inputs:
/// - `app`: Application state
/// - `results`: Response tagged with the id of the query it answers
///
/// Output:
/// - `true` when the response was accepted; `false` when it was stale.
///
/// Details:
/// - Responses whose id differs from `latest_query_id` are dropped, so a slow
///   answer to an old query can never overwrite a newer one.
/// - An accepted response replaces the candidates wholesale; the dropdown is
///   shown only when it is non-empty and the query is non-empty.
pub fn apply_search_results(app: &mut AppState, results: SearchResults) -> bool {
    if results.id != app.latest_query_id {
        tracing::debug!(
            id = results.id,
            latest = app.latest_query_id,
            "discarding stale search results"
        );
        return false;
    }
    app.awaiting_results = false;
    app.candidates = results.items;
    app.results_visible = !app.candidates.is_empty() && !app.input.is_empty();
    app.selected = 0;
    app.list_state.select(if app.candidates.is_empty() {
        None
    } else {
        Some(0)
    });
    true
}
