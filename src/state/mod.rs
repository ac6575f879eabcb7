//! Widget state split into value types and the central container.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, CellRect};
pub use types::{
    Author, Focus, Maintainer, Package, PackageLinks, Publisher, QueryInput, Score, ScoreDetail,
    SearchResponse, SearchResult, SearchResults,
};
