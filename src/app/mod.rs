//! Terminal runtime for the tag picker.
//!
//! Owns the terminal, the background tasks and the event loop. The widget's
//! behavior lives in `events`, `logic` and `ui`; this module only wires them.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::workers::search::{fetch_candidates, spawn_search_dispatcher};
pub use runtime::{RunOptions, run};
