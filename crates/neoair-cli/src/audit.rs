//! The `audit` command: sitemap → fetch → compare → report.
//!
//! Per-page failures are logged and degraded inside the library; the only
//! fatal conditions here are an empty candidate list and report I/O.

use anyhow::bail;
use neoair_audit::{
    write_reports, PageFetcher, PageFilter, ReportBuilder, RunParameters, SimilarityEngine,
    SitemapFetcher,
};
use neoair_core::AppConfig;

use crate::AuditArgs;

pub(crate) async fn run(config: &AppConfig, args: &AuditArgs) -> anyhow::Result<()> {
    let filter = if args.locations {
        PageFilter::LocationsOnly
    } else if args.service_details {
        PageFilter::ServiceDetailsOnly
    } else {
        PageFilter::All
    };

    let sitemap = SitemapFetcher::new(
        &config.sitemap_url,
        config.audit_request_timeout_secs,
        &config.audit_user_agent,
    )?;
    let urls = sitemap.fetch(filter, args.sample).await;
    if urls.is_empty() {
        bail!(
            "sitemap at {} produced no candidate URLs for filter {filter:?}",
            config.sitemap_url
        );
    }
    tracing::info!(candidates = urls.len(), ?filter, "sitemap fetched");

    let fetcher = PageFetcher::new(
        config.audit_request_timeout_secs,
        &config.audit_user_agent,
        &config.audit_content_selector,
        config.audit_fetch_concurrency,
        config.audit_batch_delay_ms,
    )?;
    let records = fetcher.fetch_batch(&urls).await;

    let total_pages = records.len();
    let valid: Vec<_> = records
        .into_iter()
        .filter(|r| r.is_valid(config.audit_min_word_count))
        .collect();
    let dropped = total_pages - valid.len();
    if dropped > 0 {
        tracing::warn!(
            dropped,
            min_word_count = config.audit_min_word_count,
            "thin or failed pages excluded from comparison"
        );
    }

    let results = SimilarityEngine::new(config.audit_similarity_threshold).compare_all(valid);

    let run = RunParameters {
        sitemap_url: config.sitemap_url.clone(),
        filter,
        sample: args.sample,
        similarity_threshold: config.audit_similarity_threshold,
        min_word_count: config.audit_min_word_count,
    };
    let report = ReportBuilder::new(filter).build(&results, run, total_pages);

    let detailed = args.detailed.then_some(&results);
    let written = write_reports(&config.output_dir, &report, detailed)?;

    println!("content uniqueness audit");
    println!("  pages fetched:        {}", report.summary.total_pages);
    println!("  pages compared:       {}", report.summary.valid_pages);
    println!(
        "  average uniqueness:   {:.1}%",
        report.summary.average_uniqueness_percent
    );
    println!("  flagged pages:        {}", report.summary.flagged_pages);
    println!("  suspicious pairs:     {}", report.summary.suspicious_pairs);
    for pair in report.most_similar_pairs.iter().take(3) {
        println!(
            "  {:.3}  {}  ({})",
            pair.similarity, pair.page_b, pair.comparison
        );
    }
    for path in &written {
        println!("  wrote {}", path.display());
    }

    Ok(())
}
