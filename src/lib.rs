//! # pubmed-affiliations
//!
//! Searches PubMed and flags articles with non-academic (industry) author
//! affiliations.
//!
//! ## Modules
//!
//! - [`pubmed`] - E-utilities client (esearch + esummary)
//! - [`affiliations`] - Company keyword classifier
//! - [`record`] - Output record type
//! - [`output`] - Console and CSV sinks
//! - [`pipeline`] - End-to-end driver
//! - [`config`] - Runtime configuration
//! - [`logging`] - Tracing setup
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pubmed_affiliations::{pipeline, ClientOptions, PubmedClient};
//!
//! #[tokio::main]
//! async fn main() -> pubmed_affiliations::Result<()> {
//!     let client = PubmedClient::new(ClientOptions::default())?;
//!     let papers = pipeline::fetch_papers(&client, "cancer therapy").await;
//!     println!("Found {} papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod affiliations;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod pubmed;
pub mod record;

pub use config::{ClientOptions, RunConfig};
pub use error::{PubmedError, Result};
pub use pubmed::PubmedClient;
pub use record::Record;
