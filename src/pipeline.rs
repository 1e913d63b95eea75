//! Search -> summary -> classify -> sink.
//!
//! Every step is awaited in sequence. A failed stage hands an empty list
//! to the next one, so a network error and a query with no hits end up
//! looking the same: zero records.

use crate::affiliations::extract_affiliations;
use crate::config::RunConfig;
use crate::error::Result;
use crate::output;
use crate::pubmed::{DocumentSummary, PubmedClient};
use crate::record::{Record, NOT_AVAILABLE};
use std::io::Write;
use tracing::{debug, info};

/// Search PubMed for `query` and build one record per summarised article.
pub async fn fetch_papers(client: &PubmedClient, query: &str) -> Vec<Record> {
    let ids = client.search(query).await;
    let summaries = client.fetch_summaries(&ids).await;

    let papers: Vec<Record> = summaries
        .into_iter()
        .map(|(id, summary)| build_record(id, &summary))
        .collect();

    info!(count = papers.len(), "Retrieved details for {} papers.", papers.len());
    papers
}

/// Classify one summary into an output record.
pub fn build_record(id: String, summary: &DocumentSummary) -> Record {
    let affiliations = extract_affiliations(summary);
    debug!(
        pmid = %id,
        affiliations = summary.affiliations.len(),
        flagged = affiliations.non_academic_authors.is_some(),
        "Classified affiliations"
    );

    Record {
        id,
        title: summary
            .title
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        publication_date: summary
            .pubdate
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        non_academic_authors: affiliations.non_academic_authors,
        company_affiliations: affiliations.company_affiliations,
        corresponding_email: affiliations.corresponding_email,
    }
}

/// Run one invocation: fetch, then print to `out` or write the CSV file.
pub async fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<Vec<Record>> {
    let client = PubmedClient::new(config.client.clone())?;
    let papers = fetch_papers(&client, &config.query).await;

    match &config.output {
        Some(path) => {
            if output::write_csv(&papers, path)? {
                writeln!(out, "Results saved to {}", path.display())?;
            }
        }
        None => output::print_records(&papers, out)?,
    }

    Ok(papers)
}
