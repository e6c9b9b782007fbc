use serde::Serialize;

/// Which slice of the sitemap an audit run should examine.
///
/// The two narrowed modes are mutually exclusive by construction; a run
/// carries exactly one filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageFilter {
    /// All pages except the standing exclusion blocklist.
    All,
    /// Only `/locations/{slug}` pages.
    LocationsOnly,
    /// Only `/services/...` detail pages.
    ServiceDetailsOnly,
}

/// One fetched page. `similar_pages` and `uniqueness_score` are populated by
/// the comparison pass; the record lives only for the duration of one run.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub url: String,
    /// Normalized plain text of the primary content region.
    pub content: String,
    pub word_count: usize,
    pub title: String,
    pub meta_description: String,
    pub similar_pages: Vec<SimilarPage>,
    /// `1 − suspicious partners / total pages`; see the comparison engine.
    pub uniqueness_score: f64,
}

impl PageRecord {
    /// Zero-content placeholder recorded when a page fetch fails, so one bad
    /// page never aborts the batch.
    #[must_use]
    pub fn placeholder(url: &str) -> Self {
        PageRecord {
            url: url.to_string(),
            content: String::new(),
            word_count: 0,
            title: String::new(),
            meta_description: String::new(),
            similar_pages: Vec::new(),
            uniqueness_score: 1.0,
        }
    }

    /// A page enters similarity comparison only with enough extracted text.
    #[must_use]
    pub fn is_valid(&self, min_word_count: usize) -> bool {
        self.word_count >= min_word_count
    }
}

/// A suspicious partner entry on a page's `similar_pages` list.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarPage {
    pub url: String,
    pub similarity: f64,
}

/// Scores for one unordered page pair.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityRecord {
    pub page_a: String,
    pub page_b: String,
    /// Weighted overall score in [0, 1].
    pub similarity: f64,
    pub content_similarity: f64,
    pub title_similarity: f64,
    pub meta_similarity: f64,
    pub is_suspicious: bool,
}
