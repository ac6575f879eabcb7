// End-to-end runtime smoke test (headless)
// - Starts npmtag::app::run in the background with NPMTAG_TEST_HEADLESS=1 so no
//   raw mode, alternate screen, or reader thread is set up.
// - Waits briefly, then checks the task did not fail or panic.
// - A second run while the first is live must be refused (listener claim).

use std::time::Duration;

use npmtag::app::{self, RunOptions};

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    // Only this test in this binary touches the environment.
    unsafe {
        std::env::set_var("NPMTAG_TEST_HEADLESS", "1");
    }

    let handle = tokio::spawn(async { app::run(RunOptions::default()).await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(Ok(())) => return,
            Ok(Err(e)) => panic!("app::run returned error early: {e:?}"),
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    // The first run holds the listener claim, so a second one is refused.
    let second = app::run(RunOptions::default()).await;
    assert!(second.is_err(), "second run must not acquire the listener claim");

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
