//! companieshouse-rs: resolve company names to registry profiles.
//!
//! A lookup runs two paced requests against the registry: the search page,
//! where the first link whose normalized text equals the normalized query is
//! taken, and the linked detail page, where labeled fields are read by
//! structural sibling traversal.
//!
//! ```no_run
//! # async fn run() -> Result<(), companieshouse_rs::ChError> {
//! let client = companieshouse_rs::ChClient::default();
//! let profile = companieshouse_rs::resolve_company(&client, "PT. Buka Bumi Konstruksi").await?;
//! println!("{}", profile.get("Registered name").unwrap_or_default());
//! # Ok(()) }
//! ```

mod core;
pub mod normalize;
pub mod profile;
pub mod resolve;
pub mod search;

#[cfg(feature = "server")]
pub mod server;

pub use crate::core::{ChClient, ChClientBuilder, ChError, FailureKind, Pacing};
pub use normalize::{NormalizedName, normalize};
pub use profile::{
    CompanyProfile, DetailFieldSet, ExtractionConfig, Field, FieldValue, TARGET_FIELDS,
    fetch_detail,
};
pub use resolve::resolve_company;
pub use search::{SearchCandidate, resolve_detail_url};
