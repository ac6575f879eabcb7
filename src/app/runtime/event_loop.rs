use ratatui::Terminal;
use tokio::select;

use crate::events::{ListenerClaim, handle_event};
use crate::logic::Debounced;
use crate::state::{AppState, QueryInput};
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{handle_search_failure, handle_search_results};

/// What: Wait for the next message and apply it.
///
/// Output:
/// - `true` if the event loop should exit, `false` to continue
async fn process_channel_messages(
    app: &mut AppState,
    channels: &mut Channels,
    dispatcher: &Debounced<QueryInput>,
    claim: &ListenerClaim,
) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => handle_event(ev, app, dispatcher, claim),
        Some(results) = channels.results_rx.recv() => {
            handle_search_results(app, results);
            false
        }
        Some(id) = channels.search_err_rx.recv() => {
            handle_search_failure(app, id);
            false
        }
        else => true
    }
}

/// What: Run the main event loop, rendering after every message.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels
/// - `dispatcher`: Debounced search dispatcher fed by input handling
/// - `claim`: Listener claim held for the lifetime of the loop
///
/// Details:
/// - Exits when the event handler returns true (exit chord) or all channels close.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
    dispatcher: &Debounced<QueryInput>,
    claim: &ListenerClaim,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "draw failed");
        }

        if process_channel_messages(app, channels, dispatcher, claim).await {
            break;
        }
    }
}
