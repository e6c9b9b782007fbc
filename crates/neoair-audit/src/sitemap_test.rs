use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

const SITEMAP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://www.neoairhvac.com/</loc></url>
  <url><loc>https://www.neoairhvac.com/locations/akron-oh</loc></url>
  <url><loc>https://www.neoairhvac.com/locations/kent-oh</loc></url>
  <url><loc>https://www.neoairhvac.com/services/heating/furnace/repair/gas-furnace/akron-oh</loc></url>
  <url><loc>https://www.neoairhvac.com/services/cooling/central-ac/installation/condenser/kent-oh</loc></url>
  <url><loc>https://www.neoairhvac.com/services/heating</loc></url>
  <url><loc>https://www.neoairhvac.com/privacy-policy</loc></url>
  <url><loc>https://www.neoairhvac.com/contact</loc></url>
</urlset>"#;

#[test]
fn parse_extracts_all_loc_entries() {
    let urls = parse_sitemap(SITEMAP_XML).unwrap();
    assert_eq!(urls.len(), 8);
    assert_eq!(urls[0], "https://www.neoairhvac.com/");
}

#[test]
fn parse_single_entry_sitemap() {
    let xml = "<urlset><url><loc>https://example.com/a</loc></url></urlset>";
    let urls = parse_sitemap(xml).unwrap();
    assert_eq!(urls, vec!["https://example.com/a"]);
}

#[test]
fn parse_cdata_loc() {
    let xml = "<urlset><url><loc><![CDATA[https://example.com/b]]></loc></url></urlset>";
    let urls = parse_sitemap(xml).unwrap();
    assert_eq!(urls, vec!["https://example.com/b"]);
}

#[test]
fn parse_ignores_loc_outside_url_entries() {
    // Sitemap-index documents nest <loc> under <sitemap>, not <url>.
    let xml = "<sitemapindex><sitemap><loc>https://example.com/sitemap-1.xml</loc></sitemap></sitemapindex>";
    let urls = parse_sitemap(xml).unwrap();
    assert!(urls.is_empty());
}

#[test]
fn parse_non_xml_body_yields_no_urls() {
    let urls = parse_sitemap("this is not a sitemap").unwrap();
    assert!(urls.is_empty());
}

#[test]
fn all_filter_applies_exclusion_blocklist() {
    let urls = parse_sitemap(SITEMAP_XML).unwrap();
    let filtered = apply_filter(urls, PageFilter::All);
    assert_eq!(filtered.len(), 6);
    assert!(filtered.iter().all(|u| !u.contains("/privacy")));
    assert!(filtered.iter().all(|u| !u.contains("/contact")));
}

#[test]
fn locations_filter_keeps_only_location_pages() {
    let urls = parse_sitemap(SITEMAP_XML).unwrap();
    let filtered = apply_filter(urls, PageFilter::LocationsOnly);
    assert_eq!(
        filtered,
        vec![
            "https://www.neoairhvac.com/locations/akron-oh",
            "https://www.neoairhvac.com/locations/kent-oh",
        ]
    );
}

#[test]
fn service_details_filter_requires_full_path_depth() {
    let urls = parse_sitemap(SITEMAP_XML).unwrap();
    let filtered = apply_filter(urls, PageFilter::ServiceDetailsOnly);
    // The `/services/heating` hub page lacks the detail-page depth.
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|u| u.contains("/services/")));
}

#[test]
fn path_helpers_handle_query_strings_and_bare_hosts() {
    assert!(is_location_page(
        "https://www.neoairhvac.com/locations/akron-oh?utm_source=ad"
    ));
    assert!(!is_location_page("https://www.neoairhvac.com"));
    assert!(!is_service_detail_page("https://www.neoairhvac.com/services"));
}

#[tokio::test]
async fn fetch_returns_filtered_urls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SITEMAP_XML))
        .mount(&server)
        .await;

    let fetcher = SitemapFetcher::new(&format!("{}/sitemap.xml", server.uri()), 5, "test-agent")
        .expect("client should build");
    let urls = fetcher.fetch(PageFilter::LocationsOnly, None).await;
    assert_eq!(urls.len(), 2);
}

#[tokio::test]
async fn fetch_samples_without_replacement() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SITEMAP_XML))
        .mount(&server)
        .await;

    let fetcher =
        SitemapFetcher::new(&format!("{}/sitemap.xml", server.uri()), 5, "test-agent").unwrap();
    let urls = fetcher.fetch(PageFilter::All, Some(3)).await;
    assert_eq!(urls.len(), 3);

    let mut deduped = urls.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 3, "sampling must not repeat URLs");
}

#[tokio::test]
async fn fetch_error_degrades_to_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher =
        SitemapFetcher::new(&format!("{}/sitemap.xml", server.uri()), 5, "test-agent").unwrap();
    let urls = fetcher.fetch(PageFilter::All, None).await;
    assert!(urls.is_empty());
}
