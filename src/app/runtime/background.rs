use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// How long a single `poll` waits before re-checking the cancel flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What: Spawn the blocking terminal reader thread.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Flag set by the runtime on exit
///
/// Details:
/// - Polls with a short timeout so the thread notices `cancelled` promptly.
/// - Exits when the flag is set or the receiving side is gone.
/// - Transient read errors are logged and skipped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(POLL_INTERVAL) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal read failed"),
                },
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "terminal poll failed"),
            }
        }
        tracing::debug!("terminal event thread exiting");
    });
}
