//! Sitemap retrieval and URL candidate selection.
//!
//! Fetches one remote sitemap XML document, extracts every `<url><loc>`
//! entry, and narrows the list with either the standing exclusion blocklist
//! or a single inclusion filter. Any network or parse failure degrades to an
//! empty list with a logged error; the caller decides whether an empty
//! candidate set is fatal.

use std::time::Duration;

use quick_xml::events::Event;
use quick_xml::Reader;
use rand::seq::SliceRandom;
use reqwest::Client;

use crate::error::AuditError;
use crate::types::PageFilter;

/// Path substrings excluded from every run: utility pages that are expected
/// to be boilerplate and would only add noise to the similarity pass.
const EXCLUDED_PATH_SUBSTRINGS: &[&str] = &[
    "/privacy",
    "/terms",
    "/thank-you",
    "/contact",
    "/sitemap",
    "/404",
];

pub struct SitemapFetcher {
    client: Client,
    sitemap_url: String,
}

impl SitemapFetcher {
    /// Creates a fetcher with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        sitemap_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, AuditError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            sitemap_url: sitemap_url.to_string(),
        })
    }

    /// Fetch the candidate URL list for a run.
    ///
    /// Applies `filter`, then optionally samples down to `sample` URLs
    /// without replacement. Never fails: errors are logged and produce an
    /// empty list.
    pub async fn fetch(&self, filter: PageFilter, sample: Option<usize>) -> Vec<String> {
        let urls = match self.try_fetch().await {
            Ok(urls) => urls,
            Err(e) => {
                tracing::error!(sitemap_url = %self.sitemap_url, error = %e, "sitemap fetch failed");
                return Vec::new();
            }
        };

        let mut filtered = apply_filter(urls, filter);
        if let Some(n) = sample {
            if n < filtered.len() {
                filtered.shuffle(&mut rand::rng());
                filtered.truncate(n);
            }
        }
        filtered
    }

    async fn try_fetch(&self) -> Result<Vec<String>, AuditError> {
        let response = self.client.get(&self.sitemap_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.sitemap_url.clone(),
            });
        }
        let body = response.text().await?;
        parse_sitemap(&body)
    }
}

/// Extract every `<url><loc>` value from a sitemap document.
///
/// Streaming event parse: one `<url>` entry or thousands come out the same
/// way, so the single-vs-array shape distinction of DOM-style parsers never
/// arises.
pub(crate) fn parse_sitemap(xml: &str) -> Result<Vec<String>, AuditError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut in_url = false;
    let mut in_loc = false;
    let mut current = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                if name == "url" {
                    in_url = true;
                    current.clear();
                } else if name == "loc" && in_url {
                    in_loc = true;
                }
            }
            Ok(Event::End(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                if name == "loc" {
                    in_loc = false;
                } else if name == "url" {
                    in_url = false;
                    let loc = current.trim();
                    if !loc.is_empty() {
                        urls.push(loc.to_string());
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if in_loc {
                    current.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::CData(e)) => {
                if in_loc {
                    current.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(AuditError::Xml(e)),
            _ => {}
        }
    }

    Ok(urls)
}

/// Narrow the URL list per the run's filter.
fn apply_filter(urls: Vec<String>, filter: PageFilter) -> Vec<String> {
    match filter {
        PageFilter::All => urls
            .into_iter()
            .filter(|u| {
                let path = url_path(u).to_lowercase();
                !EXCLUDED_PATH_SUBSTRINGS.iter().any(|ex| path.contains(ex))
            })
            .collect(),
        PageFilter::LocationsOnly => urls
            .into_iter()
            .filter(|u| is_location_page(u))
            .collect(),
        PageFilter::ServiceDetailsOnly => urls
            .into_iter()
            .filter(|u| is_service_detail_page(u))
            .collect(),
    }
}

/// Location pages are exactly `/locations/{slug}`.
pub(crate) fn is_location_page(url: &str) -> bool {
    let segments = path_segments(url);
    segments.len() == 2 && segments[0] == "locations"
}

/// Service detail pages follow the generator's routing shape
/// `/services/{category}/{system}/{service-type}/{item}/{location}`.
pub(crate) fn is_service_detail_page(url: &str) -> bool {
    let segments = path_segments(url);
    segments.len() == 6 && segments[0] == "services"
}

/// The path portion of a URL, without scheme, host, or query.
fn url_path(url: &str) -> &str {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let path_start = without_scheme.find('/').map_or(without_scheme.len(), |i| i);
    let path = &without_scheme[path_start..];
    path.split('?').next().unwrap_or(path)
}

/// Non-empty path segments of a URL.
pub(crate) fn path_segments(url: &str) -> Vec<&str> {
    url_path(url)
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "sitemap_test.rs"]
mod tests;
