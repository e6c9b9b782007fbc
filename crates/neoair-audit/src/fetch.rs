//! Batched page fetching and text extraction.
//!
//! URLs are processed in fixed-size concurrent batches with a fixed pause
//! between batches, a politeness throttle against the production site, not
//! an adaptive backpressure mechanism. Per-URL failures yield zero-content
//! placeholder records so one bad page never blocks the run.

use std::time::Duration;

use futures::future::join_all;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::AuditError;
use crate::types::PageRecord;

pub struct PageFetcher {
    client: Client,
    /// CSS selector for the primary content region.
    content_selector: String,
    /// Pages fetched per concurrent batch.
    concurrency: usize,
    /// Fixed pause between batches, in milliseconds.
    batch_delay_ms: u64,
}

impl PageFetcher {
    /// Creates a fetcher with configured timeout and `User-Agent`.
    ///
    /// The selector is validated eagerly so a typo fails the run up front
    /// instead of silently falling back to `<body>` on every page.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidSelector`] for an unparseable selector,
    /// or [`AuditError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        content_selector: &str,
        concurrency: usize,
        batch_delay_ms: u64,
    ) -> Result<Self, AuditError> {
        if Selector::parse(content_selector).is_err() {
            return Err(AuditError::InvalidSelector {
                selector: content_selector.to_string(),
            });
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            content_selector: content_selector.to_string(),
            concurrency: concurrency.max(1),
            batch_delay_ms,
        })
    }

    /// Fetch all `urls`, returning one [`PageRecord`] per URL in input order.
    ///
    /// Failed fetches are logged and recorded as placeholders; the result
    /// length always equals the input length.
    pub async fn fetch_batch(&self, urls: &[String]) -> Vec<PageRecord> {
        let mut records = Vec::with_capacity(urls.len());
        let mut is_first_batch = true;

        for batch in urls.chunks(self.concurrency) {
            if !is_first_batch && self.batch_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.batch_delay_ms)).await;
            }
            is_first_batch = false;

            let results = join_all(batch.iter().map(|url| self.fetch_page(url))).await;
            records.extend(results);
            tracing::debug!(
                fetched = records.len(),
                total = urls.len(),
                "page batch complete"
            );
        }

        records
    }

    async fn fetch_page(&self, url: &str) -> PageRecord {
        match self.try_fetch_page(url).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "page fetch failed, recording placeholder");
                PageRecord::placeholder(url)
            }
        }
    }

    async fn try_fetch_page(&self, url: &str) -> Result<PageRecord, AuditError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let html = response.text().await?;
        // Parsing is confined to a sync helper so the DOM never lives across
        // an await point.
        Ok(extract_page(url, &html, &self.content_selector))
    }
}

/// Extract normalized text, title, and meta description from a page.
///
/// Takes text from the first element matching `content_selector`, falling
/// back to `<body>` when the selector matches nothing. Whitespace and
/// newlines are collapsed to single spaces; word count splits on whitespace.
fn extract_page(url: &str, html: &str, content_selector: &str) -> PageRecord {
    let document = Html::parse_document(html);

    let title = select_text(&document, "title");
    let meta_description = Selector::parse(r#"meta[name="description"]"#)
        .ok()
        .and_then(|sel| {
            document
                .select(&sel)
                .next()
                .and_then(|el| el.value().attr("content"))
                .map(normalize_whitespace)
        })
        .unwrap_or_default();

    let content = {
        let primary = Selector::parse(content_selector)
            .ok()
            .and_then(|sel| document.select(&sel).next())
            .map(|el| el.text().collect::<String>());
        match primary {
            Some(text) => normalize_whitespace(&text),
            None => select_text(&document, "body"),
        }
    };

    let word_count = content.split_whitespace().count();

    PageRecord {
        url: url.to_string(),
        content,
        word_count,
        title,
        meta_description,
        similar_pages: Vec::new(),
        uniqueness_score: 1.0,
    }
}

/// Normalized text of the first element matching `selector`, or empty.
fn select_text(document: &Html, selector: &str) -> String {
    Selector::parse(selector)
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;
