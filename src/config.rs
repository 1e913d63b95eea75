//! Runtime configuration.
//!
//! Everything is built once from the command line and passed down explicitly.
//! There is no config file and no environment lookup.

use std::path::PathBuf;
use std::time::Duration;

/// NCBI E-utilities base URL
pub const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Maximum identifiers requested from esearch
pub const DEFAULT_RETMAX: usize = 10;

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for the E-utilities HTTP client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL that `esearch.fcgi` and `esummary.fcgi` are appended to
    pub base_url: String,
    /// Maximum number of ids returned by a search
    pub retmax: usize,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: EUTILS_BASE_URL.to_string(),
            retmax: DEFAULT_RETMAX,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("pubmed-affiliations/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    /// Options pointing at a different E-utilities host (mock servers, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub(crate) fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }
}

/// One invocation of the tool
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// PubMed search term
    pub query: String,
    /// CSV destination; console output when `None`
    pub output: Option<PathBuf>,
    /// Debug-level logging
    pub debug: bool,
    pub client: ClientOptions,
}

impl RunConfig {
    pub fn new(query: impl Into<String>, output: Option<PathBuf>, debug: bool) -> Self {
        Self {
            query: query.into(),
            output,
            debug,
            client: ClientOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.retmax, 10);
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert!(options.user_agent.starts_with("pubmed-affiliations/"));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let options = ClientOptions::with_base_url("http://127.0.0.1:9000/");
        assert_eq!(
            options.endpoint("esearch.fcgi"),
            "http://127.0.0.1:9000/esearch.fcgi"
        );

        let options = ClientOptions::default();
        assert_eq!(
            options.endpoint("esummary.fcgi"),
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi"
        );
    }
}
