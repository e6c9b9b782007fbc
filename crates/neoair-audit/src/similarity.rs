//! Pairwise page similarity.
//!
//! Every unordered pair of valid pages gets three Sørensen–Dice bigram
//! scores (content, title, meta description) combined with fixed policy
//! weights. O(n²) string comparisons: acceptable for an offline batch tool
//! run against a few hundred to low-thousands of pages, not a live service.

use strsim::sorensen_dice;

use crate::types::{PageRecord, SimilarPage, SimilarityRecord};

/// Fixed policy weights for the overall score. Not derived from anything;
/// changing them invalidates historical report comparisons.
pub const CONTENT_WEIGHT: f64 = 0.7;
pub const TITLE_WEIGHT: f64 = 0.15;
pub const META_WEIGHT: f64 = 0.15;

/// Default overall-similarity threshold above which a pair is suspicious.
pub const DEFAULT_SUSPICION_THRESHOLD: f64 = 0.8;

/// Output of a comparison pass: the input pages with `similar_pages` and
/// `uniqueness_score` populated, plus one record per unordered pair.
#[derive(Debug)]
pub struct ComparisonResults {
    pub pages: Vec<PageRecord>,
    pub similarities: Vec<SimilarityRecord>,
}

pub struct SimilarityEngine {
    threshold: f64,
}

impl SimilarityEngine {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Compare every unordered pair of `pages`.
    ///
    /// A pair is suspicious iff its weighted overall score strictly exceeds
    /// the threshold; suspicious partners are recorded symmetrically on both
    /// pages. Each page's `uniqueness_score` is
    /// `1 − suspicious partners / total pages`, a crude collision-count
    /// proxy, kept exactly as-is because downstream consumers depend on it
    /// (the report derives a second, average-similarity-based score; the two
    /// are intentionally distinct).
    #[must_use]
    pub fn compare_all(&self, mut pages: Vec<PageRecord>) -> ComparisonResults {
        let total = pages.len();
        let mut similarities = Vec::with_capacity(total.saturating_mul(total.saturating_sub(1)) / 2);

        for i in 0..total {
            for j in (i + 1)..total {
                let record = compare_pair(&pages[i], &pages[j], self.threshold);
                if record.is_suspicious {
                    pages[i].similar_pages.push(SimilarPage {
                        url: record.page_b.clone(),
                        similarity: record.similarity,
                    });
                    pages[j].similar_pages.push(SimilarPage {
                        url: record.page_a.clone(),
                        similarity: record.similarity,
                    });
                }
                similarities.push(record);
            }
        }

        for page in &mut pages {
            #[allow(clippy::cast_precision_loss)]
            let fraction = if total == 0 {
                0.0
            } else {
                page.similar_pages.len() as f64 / total as f64
            };
            page.uniqueness_score = 1.0 - fraction;
        }

        ComparisonResults {
            pages,
            similarities,
        }
    }
}

/// Score one pair. All components and the overall score are in [0, 1] and
/// symmetric in their arguments.
fn compare_pair(a: &PageRecord, b: &PageRecord, threshold: f64) -> SimilarityRecord {
    let content_similarity = sorensen_dice(&a.content, &b.content);
    let title_similarity = sorensen_dice(&a.title, &b.title);
    let meta_similarity = sorensen_dice(&a.meta_description, &b.meta_description);

    let similarity = CONTENT_WEIGHT * content_similarity
        + TITLE_WEIGHT * title_similarity
        + META_WEIGHT * meta_similarity;

    SimilarityRecord {
        page_a: a.url.clone(),
        page_b: b.url.clone(),
        similarity,
        content_similarity,
        title_similarity,
        meta_similarity,
        is_suspicious: similarity > threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, content: &str, title: &str, meta: &str) -> PageRecord {
        PageRecord {
            url: url.to_string(),
            content: content.to_string(),
            word_count: content.split_whitespace().count(),
            title: title.to_string(),
            meta_description: meta.to_string(),
            similar_pages: Vec::new(),
            uniqueness_score: 1.0,
        }
    }

    #[test]
    fn identical_pages_score_one_and_are_suspicious() {
        let a = page(
            "https://example.com/a",
            "furnace repair for all major brands in summit county",
            "Furnace Repair",
            "Fast furnace repair.",
        );
        let mut b = a.clone();
        b.url = "https://example.com/b".to_string();

        let results =
            SimilarityEngine::new(DEFAULT_SUSPICION_THRESHOLD).compare_all(vec![a, b]);

        assert_eq!(results.similarities.len(), 1);
        let rec = &results.similarities[0];
        assert!((rec.similarity - 1.0).abs() < 1e-12);
        assert!(rec.is_suspicious);
    }

    #[test]
    fn suspicious_pairs_are_recorded_symmetrically() {
        let a = page(
            "https://example.com/a",
            "identical body text about air conditioning installation",
            "AC Install",
            "AC installation.",
        );
        let mut b = a.clone();
        b.url = "https://example.com/b".to_string();
        let c = page(
            "https://example.com/c",
            "completely different topic covering thermostat wiring diagrams and zone dampers",
            "Thermostat Wiring",
            "Wiring guides.",
        );

        let results = SimilarityEngine::new(0.8).compare_all(vec![a, b, c]);

        let a_rec = &results.pages[0];
        let b_rec = &results.pages[1];
        assert_eq!(a_rec.similar_pages.len(), 1);
        assert_eq!(b_rec.similar_pages.len(), 1);
        assert_eq!(a_rec.similar_pages[0].url, "https://example.com/b");
        assert_eq!(b_rec.similar_pages[0].url, "https://example.com/a");
        assert!(results.pages[2].similar_pages.is_empty());
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = page("u1", "the quick brown fox jumps over the lazy dog", "t1", "m1");
        let b = page("u2", "the quick brown fox naps beside the lazy dog", "t2", "m2");

        let forward = compare_pair(&a, &b, 0.8);
        let backward = compare_pair(&b, &a, 0.8);
        assert!((forward.similarity - backward.similarity).abs() < 1e-12);
        assert!((forward.content_similarity - backward.content_similarity).abs() < 1e-12);
    }

    #[test]
    fn all_scores_bounded_to_unit_interval() {
        let pages = vec![
            page("u1", "alpha beta gamma delta", "one", "first"),
            page("u2", "epsilon zeta eta theta", "two", "second"),
            page("u3", "alpha beta gamma delta", "one", "first"),
            page("u4", "", "", ""),
        ];
        let results = SimilarityEngine::new(0.8).compare_all(pages);

        for rec in &results.similarities {
            assert!((0.0..=1.0).contains(&rec.similarity), "{rec:?}");
            assert!((0.0..=1.0).contains(&rec.content_similarity));
            assert!((0.0..=1.0).contains(&rec.title_similarity));
            assert!((0.0..=1.0).contains(&rec.meta_similarity));
        }
        for p in &results.pages {
            assert!(
                (0.0..=1.0).contains(&p.uniqueness_score),
                "uniqueness out of bounds for {}",
                p.url
            );
        }
    }

    #[test]
    fn uniqueness_uses_total_page_count() {
        let a = page("u1", "duplicate landing page copy block", "t", "m");
        let mut b = a.clone();
        b.url = "u2".to_string();
        let mut c = a.clone();
        c.url = "u3".to_string();
        let d = page(
            "u4",
            "entirely unrelated maintenance checklist with seasonal tune up guidance",
            "other",
            "different",
        );

        let results = SimilarityEngine::new(0.8).compare_all(vec![a, b, c, d]);

        // u1 collides with u2 and u3: 1 − 2/4.
        assert!((results.pages[0].uniqueness_score - 0.5).abs() < 1e-12);
        // u4 collides with nothing.
        assert!((results.pages[3].uniqueness_score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_produces_empty_results() {
        let results = SimilarityEngine::new(0.8).compare_all(Vec::new());
        assert!(results.pages.is_empty());
        assert!(results.similarities.is_empty());
    }

    #[test]
    fn threshold_is_strict_greater_than() {
        let a = page("u1", "x", "y", "z");
        let mut b = a.clone();
        b.url = "u2".to_string();
        // Identical pages: similarity exactly 1.0 > 1.0 is false.
        let rec = compare_pair(&a, &b, 1.0);
        assert!(!rec.is_suspicious);
    }
}
