use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide configuration for the auditor and CLI.
///
/// The location resolver itself is configuration-free: its catalogs are
/// compiled-in static data.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Sitemap the auditor crawls to discover candidate pages.
    pub sitemap_url: String,
    /// Directory the JSON report artifacts are written to.
    pub output_dir: PathBuf,
    pub audit_request_timeout_secs: u64,
    pub audit_user_agent: String,
    /// Number of pages fetched per concurrent batch.
    pub audit_fetch_concurrency: usize,
    /// Fixed pause between batches, in milliseconds.
    pub audit_batch_delay_ms: u64,
    /// Pages below this word count are excluded from similarity comparison.
    pub audit_min_word_count: usize,
    /// Overall-similarity threshold above which a pair is flagged suspicious.
    pub audit_similarity_threshold: f64,
    /// CSS selector for the primary content region of a page.
    pub audit_content_selector: String,
}
