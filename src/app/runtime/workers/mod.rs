/// Debounced registry search dispatcher.
pub mod search;
