//! Core non-UI logic split into modular submodules.

pub mod debounce;
pub mod query;
pub mod selection;

pub use debounce::Debounced;
pub use query::{QuerySink, apply_search_results, clear_query, send_query};
pub use selection::{move_sel, move_tag_cursor, remove_tag, select_candidate};
