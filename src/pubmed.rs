//! PubMed E-utilities client.
//!
//! Two endpoints are used:
//!   esearch:  term -> list of PMIDs
//!   esummary: comma-joined PMIDs -> per-article document summaries
//!
//! Both stages degrade to an empty result on any failure. The error is
//! logged and the caller carries on with nothing.

use crate::config::ClientOptions;
use crate::error::{PubmedError, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, warn};

const ESEARCH: &str = "esearch.fcgi";
const ESUMMARY: &str = "esummary.fcgi";
const DATABASE: &str = "pubmed";

/// Document summary for one PMID, as much of it as we use.
///
/// Fields that are missing or have an unexpected JSON type fall back to
/// their defaults instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocumentSummary {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub pubdate: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub affiliations: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author_email: Option<String>,
}

impl DocumentSummary {
    /// Read a summary out of one entry of the esummary `result` map.
    ///
    /// Anything other than a JSON object yields the defaults. Serde would
    /// otherwise read an array into the fields by position.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            debug!("Summary entry is not an object, using defaults");
            return Self::default();
        }

        match DocumentSummary::deserialize(value) {
            Ok(summary) => summary,
            Err(e) => {
                debug!(error = %e, "Summary entry could not be read, using defaults");
                Self::default()
            }
        }
    }
}

// === E-utilities Response Types ===

#[derive(Debug, Default, Deserialize)]
struct ESearchResponse {
    #[serde(default)]
    esearchresult: ESearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct ESearchResult {
    #[serde(default, deserialize_with = "lenient_string_list")]
    idlist: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ESummaryResponse {
    #[serde(default)]
    result: HashMap<String, Value>,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Free text field: strings pass through, numbers are kept as their text.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// E-utilities client
pub struct PubmedClient {
    client: Client,
    options: ClientOptions,
}

impl PubmedClient {
    /// Create a new client with the given options.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(options.user_agent.clone())
            .timeout(options.timeout)
            .build()
            .map_err(|e| PubmedError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, options })
    }

    /// Search PubMed and return at most `retmax` PMIDs, in upstream order.
    ///
    /// Returns an empty list when the request fails.
    pub async fn search(&self, term: &str) -> Vec<String> {
        if term.trim().is_empty() {
            warn!("Empty search term, skipping PubMed search");
            return Vec::new();
        }

        match self.do_search(term).await {
            Ok(ids) => {
                info!(count = ids.len(), "Fetched {} papers.", ids.len());
                ids
            }
            Err(e) => {
                warn!(error = %e, "Error fetching data from PubMed");
                Vec::new()
            }
        }
    }

    async fn do_search(&self, term: &str) -> Result<Vec<String>> {
        let retmax = self.options.retmax.to_string();
        debug!(term = term, retmax = %retmax, "Sending esearch request");

        let response = self
            .client
            .get(self.options.endpoint(ESEARCH))
            .query(&[
                ("db", DATABASE),
                ("term", term),
                ("retmode", "json"),
                ("retmax", retmax.as_str()),
            ])
            .send()
            .await?;

        let body = checked_body(response, "esearch").await?;
        let data: ESearchResponse = serde_json::from_str(&body)
            .map_err(|e| PubmedError::Parse(format!("Failed to parse esearch response: {}", e)))?;

        Ok(data.esearchresult.idlist)
    }

    /// Fetch document summaries for `ids` in one batched request.
    ///
    /// The result keeps the order of `ids`. Ids missing from the response
    /// are skipped. No request is made for an empty slice.
    pub async fn fetch_summaries(&self, ids: &[String]) -> Vec<(String, DocumentSummary)> {
        if ids.is_empty() {
            warn!("No PubMed IDs found for the given query.");
            return Vec::new();
        }

        match self.do_fetch_summaries(ids).await {
            Ok(result) => ids
                .iter()
                .filter_map(|id| {
                    result
                        .get(id)
                        .map(|value| (id.clone(), DocumentSummary::from_value(value)))
                })
                .collect(),
            Err(e) => {
                warn!(error = %e, "Error fetching paper details from PubMed");
                Vec::new()
            }
        }
    }

    async fn do_fetch_summaries(&self, ids: &[String]) -> Result<HashMap<String, Value>> {
        let joined = ids.join(",");
        debug!(count = ids.len(), ids = %joined, "Sending esummary request");

        let response = self
            .client
            .get(self.options.endpoint(ESUMMARY))
            .query(&[("db", DATABASE), ("id", joined.as_str()), ("retmode", "json")])
            .send()
            .await?;

        let body = checked_body(response, "esummary").await?;
        let data: ESummaryResponse = serde_json::from_str(&body)
            .map_err(|e| PubmedError::Parse(format!("Failed to parse esummary response: {}", e)))?;

        Ok(data.result)
    }
}

/// Read the body of a successful response, or turn the status into an error.
async fn checked_body(response: reqwest::Response, endpoint: &str) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(PubmedError::Api {
            code: status.as_u16(),
            message: format!("{} error: {} - {}", endpoint, status, error_text),
        });
    }

    Ok(response.text().await?)
}
