use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::events::ListenerClaim;
use crate::logic::send_query;
use crate::sources::RegistryClient;
use crate::state::AppState;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
mod handlers;
pub mod workers;

use background::spawn_event_thread;
use channels::Channels;
use event_loop::run_event_loop;
use workers::search::spawn_search_dispatcher;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that skips terminal setup (used by smoke tests).
const HEADLESS_ENV: &str = "NPMTAG_TEST_HEADLESS";

/// Startup options for [`run`].
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Settings after CLI overrides were applied.
    pub settings: Settings,
    /// Text to pre-fill the query input with.
    pub initial_query: Option<String>,
}

/// What: Build the initial state from settings.
fn initial_state(settings: &Settings) -> AppState {
    AppState {
        keymap: settings.keymap.clone(),
        dropdown_max_rows: settings.dropdown_max_rows,
        ..Default::default()
    }
}

/// What: Run the tag picker end-to-end: claim the input listeners, set up the
/// terminal, spawn the dispatcher and reader thread, drive the event loop, and
/// restore the terminal on exit.
///
/// Inputs:
/// - `opts`: Effective settings and an optional initial query
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or
///   startup errors, or when another widget already holds the listener claim.
///
/// Details:
/// - With `NPMTAG_TEST_HEADLESS=1` no terminal is touched and no reader thread
///   is started; the loop then only reacts to search results.
/// - The dispatcher is dropped before the terminal is restored, which cancels
///   any query still waiting for its quiet period.
pub async fn run(opts: RunOptions) -> Result<()> {
    let Some(claim) = ListenerClaim::acquire() else {
        return Err("input listeners are already claimed by another widget".into());
    };
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    let settings = opts.settings;

    let client = Arc::new(RegistryClient::new(
        &settings.registry_url,
        settings.results_limit,
    )?);
    let mut channels = Channels::new();
    let dispatcher = spawn_search_dispatcher(
        client,
        Duration::from_millis(settings.debounce_ms),
        channels.search_result_tx.clone(),
        channels.search_err_tx.clone(),
    );

    let mut app = initial_state(&settings);
    if let Some(q) = opts.initial_query.filter(|q| !q.is_empty()) {
        app.caret = q.chars().count();
        app.input = q;
        send_query(&mut app, &dispatcher);
    }

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    tracing::info!(
        headless,
        registry = %settings.registry_url,
        debounce_ms = settings.debounce_ms,
        "tag picker running"
    );

    run_event_loop(&mut terminal, &mut app, &mut channels, &dispatcher, &claim).await;

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    drop(dispatcher);
    let names: Vec<&str> = app.tags.iter().map(|t| t.name.as_str()).collect();
    tracing::info!(count = names.len(), tags = ?names, "tag picker exited");

    if !headless {
        restore_terminal()?;
    }
    drop(claim);
    Ok(())
}
