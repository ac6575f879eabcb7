//! registry.npmjs.org search client.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info};

use super::{FetchError, Result};
use crate::state::{Package, SearchResponse};
use crate::util::percent_encode;

/// Something that can answer a package search.
///
/// Implemented by [`RegistryClient`] for the real registry; tests substitute
/// canned or failing implementations.
pub trait PackageSearch: Send + Sync + 'static {
    /// What: Search for packages matching `text`.
    ///
    /// Inputs:
    /// - `text`: Raw query text (encoding is the implementation's job)
    ///
    /// Output:
    /// - Matching packages in relevance order, or a [`FetchError`].
    fn search(&self, text: &str) -> impl Future<Output = Result<Vec<Package>>> + Send;
}

/// What: Build the search URL for `text`.
///
/// Inputs:
/// - `base`: Registry base URL without trailing slash
/// - `text`: Raw query text
/// - `size`: Number of results to request
///
/// Output:
/// - `<base>/-/v1/search?text=<encoded>&size=<size>`.
///
/// Details:
/// - The query is percent-encoded so characters such as `&`, `#`, `/` and
///   spaces cannot alter the request.
#[must_use]
pub fn search_url(base: &str, text: &str, size: u16) -> String {
    format!(
        "{}/-/v1/search?text={}&size={size}",
        base.trim_end_matches('/'),
        percent_encode(text)
    )
}

/// What: Decode a search response body into packages.
///
/// Inputs:
/// - `body`: JSON text from the search endpoint
///
/// Output:
/// - Packages extracted from `objects[].package`, in order.
///
/// # Errors
/// - [`FetchError::Parse`] when the body is not JSON or lacks `objects`.
pub fn parse_search_response(body: &str) -> Result<Vec<Package>> {
    let resp: SearchResponse = serde_json::from_str(body)?;
    Ok(resp.into_packages())
}

/// HTTP client for the registry search endpoint.
#[derive(Clone, Debug)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
    size: u16,
}

impl RegistryClient {
    /// What: Create a client for `base_url` requesting `size` results per search.
    ///
    /// Inputs:
    /// - `base_url`: Registry base URL, e.g. `https://registry.npmjs.org`
    /// - `size`: Results per request
    ///
    /// Output:
    /// - Client with a 15s request timeout.
    ///
    /// # Errors
    /// - [`FetchError::Http`] when the HTTP client cannot be built (TLS backend init).
    pub fn new(base_url: &str, size: u16) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            size,
        })
    }

    /// Registry base URL this client queries.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PackageSearch for RegistryClient {
    async fn search(&self, text: &str) -> Result<Vec<Package>> {
        let url = search_url(&self.base_url, text, self.size);
        debug!(url = %url, "querying registry");
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let preview: String = body.chars().take(200).collect();
            // The caller reports the failure; this only keeps the body for debugging.
            debug!(
                status = status.as_u16(),
                preview = %preview,
                "registry search returned non-success status"
            );
            return Err(FetchError::Status(status.as_u16()));
        }
        let items = parse_search_response(&body)?;
        info!(query = %text, count = items.len(), bytes = body.len(), "registry search complete");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Query text is encoded into the search URL.
    ///
    /// Inputs:
    /// - Plain, scoped, and hostile query strings; base with trailing slash.
    ///
    /// Output:
    /// - Encoded `text` parameter and the configured `size`.
    fn registry_search_url_encodes_query() {
        assert_eq!(
            search_url("https://registry.npmjs.org", "rea", 20),
            "https://registry.npmjs.org/-/v1/search?text=rea&size=20"
        );
        assert_eq!(
            search_url("https://registry.npmjs.org/", "@types/node", 5),
            "https://registry.npmjs.org/-/v1/search?text=%40types%2Fnode&size=5"
        );
        assert_eq!(
            search_url("http://localhost:4873", "a&size=999#x", 20),
            "http://localhost:4873/-/v1/search?text=a%26size%3D999%23x&size=20"
        );
    }

    #[test]
    /// What: Response parsing keeps packages and reports malformed bodies as parse errors.
    ///
    /// Inputs:
    /// - Valid body with two packages, an empty `objects` array, and non-JSON text.
    ///
    /// Output:
    /// - Two packages; zero packages; `FetchError::Parse`.
    fn registry_parse_search_response() {
        let ok = parse_search_response(
            r#"{"objects":[{"package":{"name":"react","version":"18.3.1"}},{"package":{"name":"react-dom","version":"18.3.1"}}]}"#,
        )
        .expect("valid body");
        assert_eq!(ok.len(), 2);
        assert_eq!(ok[1].name, "react-dom");

        let empty = parse_search_response(r#"{"objects":[],"total":0}"#).expect("valid body");
        assert!(empty.is_empty());

        assert!(matches!(
            parse_search_response("<html>502</html>"),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    /// What: The client normalizes its base URL.
    fn registry_client_trims_base_url() {
        let c = RegistryClient::new("https://registry.npmjs.org/", 20).expect("client");
        assert_eq!(c.base_url(), "https://registry.npmjs.org");
    }
}
