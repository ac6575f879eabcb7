use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::logic::Debounced;
use crate::sources::PackageSearch;
use crate::state::{QueryInput, SearchResults};

/// What: Run one search and tag the answer with its query id.
///
/// Inputs:
/// - `source`: Search backend
/// - `query`: Query text and id
///
/// Output:
/// - `Some(SearchResults)` on success; `None` when the fetch failed.
///
/// Details:
/// - A failure is logged once at error level and otherwise swallowed.
pub async fn fetch_candidates<S: PackageSearch>(
    source: &S,
    query: QueryInput,
) -> Option<SearchResults> {
    match source.search(&query.text).await {
        Ok(items) => Some(SearchResults {
            id: query.id,
            items,
        }),
        Err(e) => {
            tracing::error!(
                query = %query.text,
                id = query.id,
                error = %e,
                "error fetching data from the npm registry"
            );
            None
        }
    }
}

/// What: Build the debounced search dispatcher.
///
/// Inputs:
/// - `source`: Search backend shared with every fetch task
/// - `quiet`: Quiet period before a query is dispatched
/// - `result_tx`: Channel sender for successful results
/// - `err_tx`: Channel sender for the ids of failed queries
///
/// Output:
/// - Handle that input handling submits queries to.
///
/// Details:
/// - Empty text never reaches the network.
/// - Each dispatched query gets its own task; responses are matched back by id,
///   so nothing here needs to cancel an in-flight request.
/// - Dropping the handle cancels a query still waiting for its quiet period.
pub fn spawn_search_dispatcher<S: PackageSearch>(
    source: Arc<S>,
    quiet: Duration,
    result_tx: mpsc::UnboundedSender<SearchResults>,
    err_tx: mpsc::UnboundedSender<u64>,
) -> Debounced<QueryInput> {
    Debounced::new(quiet, move |query: QueryInput| {
        if query.text.is_empty() {
            tracing::trace!(id = query.id, "empty query; nothing to fetch");
            return;
        }
        tracing::debug!(id = query.id, query = %query.text, "dispatching search");
        let source = Arc::clone(&source);
        let tx = result_tx.clone();
        let err_tx = err_tx.clone();
        tokio::spawn(async move {
            let id = query.id;
            match fetch_candidates(source.as_ref(), query).await {
                Some(results) => {
                    let _ = tx.send(results);
                }
                None => {
                    let _ = err_tx.send(id);
                }
            }
        });
    })
}
