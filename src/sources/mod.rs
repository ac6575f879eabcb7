//! Network data retrieval from the package registry.

mod registry;

pub use registry::{PackageSearch, RegistryClient, parse_search_response, search_url};

/// Failure while fetching or decoding a registry search.
///
/// This is the only error kind the widget handles at runtime; it is logged
/// by the fetch task and otherwise swallowed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("registry request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The registry answered with a non-success status.
    #[error("registry returned status {0}")]
    Status(u16),
    /// The body was not a valid search response.
    #[error("malformed registry response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, FetchError>;
