use tokio::{
    select,
    sync::mpsc,
    task::JoinHandle,
    time::{Duration, sleep},
};

/// Message from a [`Debounced`] handle to its timer task.
enum Signal<T> {
    Call(T),
    Cancel,
}

/// Call-coalescing wrapper around a callback.
///
/// Each [`Debounced::call`] re-arms a quiet-period timer; the callback runs
/// once, with the most recent argument, after `quiet` elapses without another
/// call. [`Debounced::cancel`] drops a pending call without running it.
/// Dropping the handle cancels any pending call and stops the timer task.
///
/// Must be created inside a Tokio runtime.
pub struct Debounced<T> {
    tx: mpsc::UnboundedSender<Signal<T>>,
    worker: JoinHandle<()>,
    quiet: Duration,
}

impl<T: Send + 'static> Debounced<T> {
    /// What: Spawn the timer task and return its handle.
    ///
    /// Inputs:
    /// - `quiet`: Period without calls after which the callback fires
    /// - `callback`: Invoked on the timer task with the latest argument
    ///
    /// Output:
    /// - Handle used to schedule or cancel calls.
    ///
    /// Details:
    /// - The callback must not block; spawn async work from inside it.
    pub fn new<F>(quiet: Duration, mut callback: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Signal<T>>();
        let worker = tokio::spawn(async move {
            loop {
                let mut latest = match rx.recv().await {
                    Some(Signal::Call(v)) => v,
                    Some(Signal::Cancel) => continue,
                    None => break,
                };
                let fire = loop {
                    select! {
                        msg = rx.recv() => match msg {
                            Some(Signal::Call(v)) => latest = v,
                            Some(Signal::Cancel) | None => break false,
                        },
                        () = sleep(quiet) => break true,
                    }
                };
                if fire {
                    callback(latest);
                } else {
                    tracing::trace!("debounced call cancelled");
                }
            }
        });
        Self { tx, worker, quiet }
    }

    /// Schedule `arg`, replacing any call still waiting for its quiet period.
    pub fn call(&self, arg: T) {
        let _ = self.tx.send(Signal::Call(arg));
    }

    /// Discard the pending call, if any, without running it.
    pub fn cancel(&self) {
        let _ = self.tx.send(Signal::Cancel);
    }

    /// Configured quiet period.
    #[must_use]
    pub const fn quiet(&self) -> Duration {
        self.quiet
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
