//! Core value types used by npmtag state.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing string.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// Optional links published alongside a registry package.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageLinks {
    /// Package page on npmjs.com.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm: Option<String>,
    /// Project homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Source repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Issue tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bugs: Option<String>,
}

/// Package author as declared in `package.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Account that published the current version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    /// Registry username.
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Registry account with publish rights on the package.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    /// Registry username.
    #[serde(default)]
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
}

/// A package as returned by the registry search endpoint.
///
/// Immutable once fetched. `name` is the identifying key used for tag
/// membership and removal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Canonical package name.
    pub name: String,
    /// Latest version string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub version: String,
    /// One-line description suitable for list display.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Registry, homepage, repository and issue-tracker links.
    #[serde(default)]
    pub links: PackageLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Publisher of the current version.
    #[serde(default)]
    pub publisher: Publisher,
    /// Maintainers in registry order.
    #[serde(default)]
    pub maintainers: Vec<Maintainer>,
}

impl Package {
    /// What: Build a package carrying only a name and version.
    ///
    /// Inputs:
    /// - `name`: Package name
    /// - `version`: Version string
    ///
    /// Output:
    /// - `Package` with every other field defaulted.
    #[must_use]
    pub fn named(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            ..Self::default()
        }
    }
}

/// Per-dimension relevance scores reported by the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    #[serde(default)]
    pub quality: f64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub maintenance: f64,
}

/// Combined relevance score for a search hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Weighted final score.
    #[serde(default, rename = "final")]
    pub final_score: f64,
    #[serde(default)]
    pub detail: ScoreDetail,
}

/// One element of the registry's `objects` array.
///
/// Only [`SearchResult::package`] is kept once a response has been parsed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matching package.
    pub package: Package,
    #[serde(default)]
    pub score: Score,
    /// Raw search-engine score.
    #[serde(default, rename = "searchScore")]
    pub search_score: f64,
}

/// Top-level body of `GET /-/v1/search`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching packages with scores, in relevance order.
    pub objects: Vec<SearchResult>,
}

impl SearchResponse {
    /// What: Drop the score envelopes and keep the packages.
    ///
    /// Output:
    /// - Packages in the order returned by the registry.
    #[must_use]
    pub fn into_packages(self) -> Vec<Package> {
        self.objects.into_iter().map(|o| o.package).collect()
    }
}

/// Search query sent to the debounced dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Raw query text entered by the user.
    pub text: String,
}

/// Results corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct SearchResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Matching packages in relevance order.
    pub items: Vec<Package>,
}

/// Which part of the widget currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Query input and its dropdown.
    #[default]
    Search,
    /// Row of selected tag chips.
    Tags,
}
