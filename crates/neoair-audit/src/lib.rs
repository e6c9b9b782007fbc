//! Offline content-uniqueness auditor for the programmatic page generator.
//!
//! A run crawls the sitemap, fetches each page's rendered text, computes
//! pairwise similarity, and writes JSON report artifacts. Nothing here is
//! long-lived: every run is a fresh computation over freshly fetched data.

pub mod error;
pub mod fetch;
pub mod report;
pub mod similarity;
pub mod sitemap;
pub mod types;

pub use error::AuditError;
pub use fetch::PageFetcher;
pub use report::{write_reports, ReportBuilder, RunParameters, SummaryReport};
pub use similarity::{ComparisonResults, SimilarityEngine};
pub use sitemap::SitemapFetcher;
pub use types::{PageFilter, PageRecord, SimilarPage, SimilarityRecord};
