//! npmtag binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use npmtag::app::{self, RunOptions};
use npmtag::args::{self, Args};
use npmtag::theme;

struct NpmtagTimer;

impl tracing_subscriber::fmt::time::FormatTime for NpmtagTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        // "YYYY-MM-DD-T HH:MM:SS"
        write!(w, "{}", chrono::Utc::now().format("%Y-%m-%d-T %H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/npmtag/logs/npmtag.log`, or stderr as a fallback.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("npmtag.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(NpmtagTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // The TUI owns stdout; stderr is the only other place to write.
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(NpmtagTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings = args::apply_overrides(&args, theme::settings());

    if let Some(query) = &args.search {
        let code = args::search::handle_search(query, &settings).await;
        return if code == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "npmtag starting");
    let opts = RunOptions {
        settings,
        initial_query: args.query,
    };
    let code = match app::run(opts).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "application error");
            eprintln!("npmtag: {err}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("npmtag exited");
    code
}
