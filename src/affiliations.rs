//! Keyword heuristic for industry affiliations.
//!
//! An affiliation is flagged when its lowercase form contains any of
//! [`COMPANY_KEYWORDS`]. The same flagged list is reported both as
//! non-academic authors and as company affiliations.

use crate::pubmed::DocumentSummary;
use crate::record::NOT_AVAILABLE;

/// Substrings marking an affiliation as non-academic
pub const COMPANY_KEYWORDS: [&str; 6] = ["pharma", "biotech", "inc.", "ltd.", "corporation", "gmbh"];

/// Classifier output for one summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affiliations {
    pub non_academic_authors: Option<String>,
    pub company_affiliations: Option<String>,
    pub corresponding_email: String,
}

/// True when the affiliation matches a company keyword (case-insensitive)
pub fn is_non_academic(affiliation: &str) -> bool {
    let lower = affiliation.to_lowercase();
    COMPANY_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Classify the affiliations of one summary and pick its email.
pub fn extract_affiliations(summary: &DocumentSummary) -> Affiliations {
    let flagged: Vec<&str> = summary
        .affiliations
        .iter()
        .map(String::as_str)
        .filter(|aff| is_non_academic(aff))
        .collect();

    let non_academic_authors = join_or_none(&flagged);
    let company_affiliations = join_or_none(&flagged);

    let corresponding_email = summary
        .author_email
        .clone()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Affiliations {
        non_academic_authors,
        company_affiliations,
        corresponding_email,
    }
}

/// Empty list maps to `None`, never to an empty string
fn join_or_none(items: &[&str]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(affiliations: &[&str], email: Option<&str>) -> DocumentSummary {
        DocumentSummary {
            affiliations: affiliations.iter().map(|s| s.to_string()).collect(),
            author_email: email.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert!(is_non_academic("NOVARTIS PHARMA AG"));
        assert!(is_non_academic("Genentech Biotech"));
        assert!(is_non_academic("Widgets Inc."));
        assert!(is_non_academic("Foo Ltd., London"));
        assert!(is_non_academic("Big Corporation"));
        assert!(is_non_academic("Roche Diagnostics GmbH"));
        assert!(!is_non_academic("Harvard Medical School"));
        // "inc" without the dot is not a keyword
        assert!(!is_non_academic("Lincoln University"));
    }

    #[test]
    fn test_flagged_lists_equal_and_in_order() {
        let s = summary(
            &[
                "Beta Biotech Ltd.",
                "Dept of Medicine, University of Oslo",
                "Acme Pharma Inc.",
            ],
            None,
        );
        let result = extract_affiliations(&s);

        assert_eq!(
            result.non_academic_authors.as_deref(),
            Some("Beta Biotech Ltd., Acme Pharma Inc.")
        );
        assert_eq!(result.non_academic_authors, result.company_affiliations);
    }

    #[test]
    fn test_no_match_is_none_not_empty() {
        let s = summary(&["Stanford University", "Karolinska Institutet"], None);
        let result = extract_affiliations(&s);

        assert_eq!(result.non_academic_authors, None);
        assert_eq!(result.company_affiliations, None);
    }

    #[test]
    fn test_no_affiliations_at_all() {
        let result = extract_affiliations(&DocumentSummary::default());
        assert_eq!(result.non_academic_authors, None);
        assert_eq!(result.corresponding_email, "N/A");
    }

    #[test]
    fn test_email_present() {
        let s = summary(&["Dept of Oncology, Acme Pharma Inc."], Some("a@x.org"));
        let result = extract_affiliations(&s);

        assert_eq!(result.corresponding_email, "a@x.org");
        assert_eq!(
            result.company_affiliations.as_deref(),
            Some("Dept of Oncology, Acme Pharma Inc.")
        );
    }
}
