//! Report aggregation and JSON artifact output.
//!
//! Derives per-page and per-facet uniqueness statistics from a comparison
//! pass and writes the summary (and optionally the full per-pair data) to
//! the configured output directory.
//!
//! Facet extraction is positional over the generator's URL shapes
//! (`/services/{category}/{system}/{service-type}/{item}/{location}` and
//! `/locations/{location}`) and runs only for filtered audits; the path
//! parser and the sitemap filter must agree on those shapes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AuditError;
use crate::similarity::ComparisonResults;
use crate::sitemap::path_segments;
use crate::types::{PageFilter, SimilarityRecord};

/// How many entries the least-unique and most-similar leaderboards carry.
const TOP_N: usize = 10;

/// Parameters echoed into the report so a run is reproducible from its
/// artifact alone.
#[derive(Debug, Clone, Serialize)]
pub struct RunParameters {
    pub sitemap_url: String,
    pub filter: PageFilter,
    pub sample: Option<usize>,
    pub similarity_threshold: f64,
    pub min_word_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub run: RunParameters,
    pub summary: SummaryStats,
    pub least_unique_pages: Vec<PageSummary>,
    pub most_similar_pairs: Vec<PairSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_breakdown: Option<Vec<FacetSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_breakdown: Option<Vec<FacetSummary>>,
}

#[derive(Debug, Serialize)]
pub struct SummaryStats {
    /// Every URL fetched, including pages dropped for thin content.
    pub total_pages: usize,
    /// Pages that met the word-count minimum and entered comparison.
    pub valid_pages: usize,
    pub average_uniqueness_percent: f64,
    /// Pages with at least one suspicious partner.
    pub flagged_pages: usize,
    pub suspicious_pairs: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
    pub url: String,
    /// `(1 − average pairwise similarity) × 100`. Intentionally a different
    /// formula than `uniqueness_score`; both are published.
    pub uniqueness_percent: f64,
    pub average_similarity: f64,
    pub suspicious_partners: usize,
    /// The engine's collision-count score, `1 − partners / total`.
    pub uniqueness_score: f64,
}

#[derive(Debug, Serialize)]
pub struct PairSummary {
    pub page_a: String,
    pub page_b: String,
    pub similarity: f64,
    /// Human-readable comparison label; "same service and same location"
    /// collisions are the most critical kind.
    pub comparison: String,
}

#[derive(Debug, Serialize)]
pub struct FacetSummary {
    pub facet: String,
    pub page_count: usize,
    pub average_uniqueness_percent: f64,
}

/// Facets positionally extracted from a service-detail URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceFacets {
    pub category: String,
    pub system: String,
    pub service_type: String,
    pub item: String,
    pub location: String,
}

pub struct ReportBuilder {
    filter: PageFilter,
}

impl ReportBuilder {
    #[must_use]
    pub fn new(filter: PageFilter) -> Self {
        Self { filter }
    }

    /// Aggregate a comparison pass into a summary report.
    ///
    /// `total_pages` is the count of all fetched URLs, including pages that
    /// were dropped before comparison for thin content.
    #[must_use]
    pub fn build(
        &self,
        results: &ComparisonResults,
        run: RunParameters,
        total_pages: usize,
    ) -> SummaryReport {
        let page_summaries = per_page_summaries(results);

        let average_uniqueness_percent = mean(
            page_summaries
                .iter()
                .map(|p| p.uniqueness_percent),
        );
        let flagged_pages = page_summaries
            .iter()
            .filter(|p| p.suspicious_partners > 0)
            .count();
        let suspicious_pairs = results
            .similarities
            .iter()
            .filter(|s| s.is_suspicious)
            .count();

        let mut least_unique = page_summaries.clone();
        least_unique.sort_by(|a, b| a.uniqueness_percent.total_cmp(&b.uniqueness_percent));
        least_unique.truncate(TOP_N);

        let mut ranked_pairs: Vec<&SimilarityRecord> = results.similarities.iter().collect();
        ranked_pairs.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        let most_similar_pairs = ranked_pairs
            .into_iter()
            .take(TOP_N)
            .map(|rec| PairSummary {
                page_a: rec.page_a.clone(),
                page_b: rec.page_b.clone(),
                similarity: rec.similarity,
                comparison: self.pair_label(&rec.page_a, &rec.page_b),
            })
            .collect();

        let (category_breakdown, location_breakdown) = self.facet_breakdowns(&page_summaries);

        SummaryReport {
            generated_at: Utc::now(),
            run,
            summary: SummaryStats {
                total_pages,
                valid_pages: results.pages.len(),
                average_uniqueness_percent,
                flagged_pages,
                suspicious_pairs,
            },
            least_unique_pages: least_unique,
            most_similar_pairs,
            category_breakdown,
            location_breakdown,
        }
    }

    /// Label a pair for the leaderboard. Facet-aware only in the filtered
    /// modes; elsewhere the URLs speak for themselves.
    fn pair_label(&self, url_a: &str, url_b: &str) -> String {
        match self.filter {
            PageFilter::ServiceDetailsOnly => {
                match (parse_service_facets(url_a), parse_service_facets(url_b)) {
                    (Some(a), Some(b)) => service_pair_label(&a, &b),
                    _ => "unrecognized service-detail path".to_string(),
                }
            }
            PageFilter::LocationsOnly => {
                match (parse_location_facet(url_a), parse_location_facet(url_b)) {
                    (Some(a), Some(b)) => format!("location pages: {a} vs {b}"),
                    _ => "unrecognized location path".to_string(),
                }
            }
            PageFilter::All => "unfiltered pages".to_string(),
        }
    }

    fn facet_breakdowns(
        &self,
        pages: &[PageSummary],
    ) -> (Option<Vec<FacetSummary>>, Option<Vec<FacetSummary>>) {
        match self.filter {
            PageFilter::ServiceDetailsOnly => {
                let mut by_category: BTreeMap<String, Vec<f64>> = BTreeMap::new();
                let mut by_location: BTreeMap<String, Vec<f64>> = BTreeMap::new();
                for page in pages {
                    if let Some(facets) = parse_service_facets(&page.url) {
                        by_category
                            .entry(facets.category)
                            .or_default()
                            .push(page.uniqueness_percent);
                        by_location
                            .entry(facets.location)
                            .or_default()
                            .push(page.uniqueness_percent);
                    }
                }
                (
                    Some(facet_summaries(by_category)),
                    Some(facet_summaries(by_location)),
                )
            }
            PageFilter::LocationsOnly => {
                let mut by_location: BTreeMap<String, Vec<f64>> = BTreeMap::new();
                for page in pages {
                    if let Some(location) = parse_location_facet(&page.url) {
                        by_location
                            .entry(location)
                            .or_default()
                            .push(page.uniqueness_percent);
                    }
                }
                (None, Some(facet_summaries(by_location)))
            }
            PageFilter::All => (None, None),
        }
    }
}

/// Per-page average similarity across all of a page's pairings, and the
/// derived percentage-scale uniqueness.
fn per_page_summaries(results: &ComparisonResults) -> Vec<PageSummary> {
    let mut stats: BTreeMap<&str, (f64, usize, usize)> = BTreeMap::new();
    for page in &results.pages {
        stats.insert(page.url.as_str(), (0.0, 0, 0));
    }
    for rec in &results.similarities {
        for url in [rec.page_a.as_str(), rec.page_b.as_str()] {
            if let Some((sum, count, suspicious)) = stats.get_mut(url) {
                *sum += rec.similarity;
                *count += 1;
                if rec.is_suspicious {
                    *suspicious += 1;
                }
            }
        }
    }

    results
        .pages
        .iter()
        .map(|page| {
            let (sum, count, suspicious) = stats
                .get(page.url.as_str())
                .copied()
                .unwrap_or((0.0, 0, 0));
            #[allow(clippy::cast_precision_loss)]
            let average_similarity = if count == 0 { 0.0 } else { sum / count as f64 };
            PageSummary {
                url: page.url.clone(),
                uniqueness_percent: (1.0 - average_similarity) * 100.0,
                average_similarity,
                suspicious_partners: suspicious,
                uniqueness_score: page.uniqueness_score,
            }
        })
        .collect()
}

fn service_pair_label(a: &ServiceFacets, b: &ServiceFacets) -> String {
    let same_service =
        a.category == b.category && a.service_type == b.service_type && a.item == b.item;
    let same_location = a.location == b.location;
    match (same_service, same_location) {
        (true, true) => "same service and same location: critical duplicate".to_string(),
        (true, false) => format!(
            "same service ({} {}) across locations {} and {}",
            a.item, a.service_type, a.location, b.location
        ),
        (false, true) => format!("different services in {}", a.location),
        (false, false) => "different service and location".to_string(),
    }
}

fn facet_summaries(groups: BTreeMap<String, Vec<f64>>) -> Vec<FacetSummary> {
    groups
        .into_iter()
        .map(|(facet, scores)| FacetSummary {
            facet,
            page_count: scores.len(),
            average_uniqueness_percent: mean(scores.iter().copied()),
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Positional facet extraction for a service-detail URL. Returns `None` when
/// the path does not match the generator's six-segment shape.
pub(crate) fn parse_service_facets(url: &str) -> Option<ServiceFacets> {
    let segments = path_segments(url);
    if segments.len() != 6 || segments[0] != "services" {
        return None;
    }
    Some(ServiceFacets {
        category: segments[1].to_string(),
        system: segments[2].to_string(),
        service_type: segments[3].to_string(),
        item: segments[4].to_string(),
        location: segments[5].to_string(),
    })
}

/// The location slug of a `/locations/{slug}` URL.
pub(crate) fn parse_location_facet(url: &str) -> Option<String> {
    let segments = path_segments(url);
    if segments.len() == 2 && segments[0] == "locations" {
        Some(segments[1].to_string())
    } else {
        None
    }
}

/// Payload of the `--detailed` artifact: the full per-pair data alongside
/// the populated page records.
#[derive(Debug, Serialize)]
struct DetailedReport<'a> {
    generated_at: DateTime<Utc>,
    pages: &'a [crate::types::PageRecord],
    similarities: &'a [SimilarityRecord],
}

/// Write the summary artifact (and, when `detailed` is set, the per-pair
/// artifact) to `output_dir`, creating the directory if needed.
///
/// Returns the paths written.
///
/// # Errors
///
/// Returns [`AuditError::Io`] on filesystem failures and
/// [`AuditError::Json`] if serialization fails.
pub fn write_reports(
    output_dir: &Path,
    report: &SummaryReport,
    detailed: Option<&ComparisonResults>,
) -> Result<Vec<PathBuf>, AuditError> {
    fs::create_dir_all(output_dir).map_err(|e| AuditError::Io {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let mut written = Vec::new();

    let summary_path = output_dir.join("uniqueness-summary.json");
    let summary_json = serde_json::to_string_pretty(report)?;
    fs::write(&summary_path, summary_json).map_err(|e| AuditError::Io {
        path: summary_path.display().to_string(),
        source: e,
    })?;
    written.push(summary_path);

    if let Some(results) = detailed {
        let detailed_path = output_dir.join("uniqueness-detailed.json");
        let payload = DetailedReport {
            generated_at: report.generated_at,
            pages: &results.pages,
            similarities: &results.similarities,
        };
        let detailed_json = serde_json::to_string_pretty(&payload)?;
        fs::write(&detailed_path, detailed_json).map_err(|e| AuditError::Io {
            path: detailed_path.display().to_string(),
            source: e,
        })?;
        written.push(detailed_path);
    }

    Ok(written)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
