//! Output record for one PubMed article.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for missing title, date or email
pub const NOT_AVAILABLE: &str = "N/A";

/// CSV header, in column order
pub const CSV_HEADER: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// One retrieved article with its derived affiliation fields.
///
/// Field order matches [`CSV_HEADER`]; serde renames produce the header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "PubmedID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    /// Comma-joined flagged affiliations, `None` when nothing matched
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: Option<String>,
    /// Same list as `non_academic_authors`
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: Option<String>,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {}: {} | {}: {} | {}: {} | {}: {} | {}: {}",
            CSV_HEADER[0],
            self.id,
            CSV_HEADER[1],
            self.title,
            CSV_HEADER[2],
            self.publication_date,
            CSV_HEADER[3],
            self.non_academic_authors.as_deref().unwrap_or("None"),
            CSV_HEADER[4],
            self.company_affiliations.as_deref().unwrap_or("None"),
            CSV_HEADER[5],
            self.corresponding_email,
        )
    }
}
