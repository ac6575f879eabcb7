use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::SearchResults;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Senders are handed to the terminal thread and the search dispatcher;
///   receivers are drained by the event loop, which owns all UI state.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub search_result_tx: mpsc::UnboundedSender<SearchResults>,
    pub results_rx: mpsc::UnboundedReceiver<SearchResults>,
    /// Ids of queries whose fetch failed.
    pub search_err_tx: mpsc::UnboundedSender<u64>,
    pub search_err_rx: mpsc::UnboundedReceiver<u64>,
}

impl Channels {
    /// What: Create all channels used for runtime communication.
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (search_result_tx, results_rx) = mpsc::unbounded_channel::<SearchResults>();
        let (search_err_tx, search_err_rx) = mpsc::unbounded_channel::<u64>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            search_result_tx,
            results_rx,
            search_err_tx,
            search_err_rx,
        }
    }
}
