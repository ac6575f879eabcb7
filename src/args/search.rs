//! Command-line search functionality.

use std::io::Write;

use crate::sources::{FetchError, PackageSearch, RegistryClient};
use crate::state::Package;
use crate::theme::Settings;

/// What: Format one package as a CLI output line.
///
/// Output:
/// - `name@version  description`, or `name@version` when there is no description.
#[must_use]
pub fn format_package_line(pkg: &Package) -> String {
    if pkg.description.is_empty() {
        format!("{}@{}", pkg.name, pkg.version)
    } else {
        format!("{}@{}  {}", pkg.name, pkg.version, pkg.description)
    }
}

/// What: Run one search against `source` and write the result lines.
///
/// Inputs:
/// - `source`: Search backend
/// - `query`: Search text
/// - `out`: Destination for the lines
///
/// Output:
/// - Number of packages printed.
///
/// # Errors
/// - [`FetchError`] when the search fails. Write errors are ignored.
pub async fn search_and_print<S: PackageSearch, W: Write>(
    source: &S,
    query: &str,
    out: &mut W,
) -> Result<usize, FetchError> {
    let items = source.search(query).await?;
    for pkg in &items {
        let _ = writeln!(out, "{}", format_package_line(pkg));
    }
    Ok(items.len())
}

/// What: Handle command-line search mode against the configured registry.
///
/// Inputs:
/// - `search_query`: The search text to use.
/// - `settings`: Effective settings (registry URL, result limit).
///
/// Output:
/// - Process exit code: `0` on success (even with no matches), `1` on failure.
///
/// Details:
/// - Does not start the TUI.
pub async fn handle_search(search_query: &str, settings: &Settings) -> i32 {
    tracing::info!(query = %search_query, "search mode requested from CLI");
    if search_query.is_empty() {
        eprintln!("npmtag: empty search query");
        return 1;
    }
    let client = match RegistryClient::new(&settings.registry_url, settings.results_limit) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("npmtag: {e}");
            tracing::error!(error = %e, "failed to build registry client");
            return 1;
        }
    };
    let mut stdout = std::io::stdout().lock();
    match search_and_print(&client, search_query, &mut stdout).await {
        Ok(count) => {
            tracing::info!(query = %search_query, count, "CLI search complete");
            0
        }
        Err(e) => {
            eprintln!("npmtag: {e}");
            tracing::error!(query = %search_query, error = %e, "CLI search failed");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(Vec<Package>);

    impl PackageSearch for Canned {
        async fn search(&self, _text: &str) -> crate::sources::Result<Vec<Package>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    /// What: Output lines include the description only when present.
    fn args_format_package_line() {
        let mut pkg = Package::named("react", "18.3.1");
        assert_eq!(format_package_line(&pkg), "react@18.3.1");
        pkg.description = "UI library".into();
        assert_eq!(format_package_line(&pkg), "react@18.3.1  UI library");
    }

    #[tokio::test]
    /// What: Every result is written on its own line in registry order.
    async fn args_search_and_print_writes_lines() {
        let source = Canned(vec![
            Package::named("react", "18.3.1"),
            Package::named("react-dom", "18.3.1"),
        ]);
        let mut buf: Vec<u8> = Vec::new();
        let n = search_and_print(&source, "rea", &mut buf)
            .await
            .expect("search");
        assert_eq!(n, 2);
        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "react@18.3.1\nreact-dom@18.3.1\n"
        );
    }
}
