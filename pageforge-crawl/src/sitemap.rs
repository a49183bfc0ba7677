//! Sitemap retrieval and parsing.
//!
//! Standard `<urlset>` sitemaps only; sitemap index files are treated as
//! empty and the caller falls back to link crawling.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{CrawlError, Result};
use crate::rules::{is_same_domain, is_static_asset, normalize_url, url_host};

const SITEMAP_PATH: &str = "/sitemap.xml";
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct Urlset {
    #[serde(rename = "url", default)]
    entries: Vec<SitemapEntry>,
}

#[derive(Debug, Deserialize)]
struct SitemapEntry {
    loc: String,
}

/// Fetches `/sitemap.xml` from a site and extracts its page URLs.
#[derive(Debug)]
pub struct SitemapReader {
    client: reqwest::Client,
}

impl Default for SitemapReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SitemapReader {
    pub fn new() -> Self {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// Fetch the sitemap for the site hosting `base` and return its URLs,
    /// normalized and filtered to the base URL's domain with static assets
    /// removed.
    ///
    /// A missing or unparsable sitemap is an error; an empty `<urlset>` is
    /// an empty Vec. Callers treat both as "use BFS instead".
    pub async fn read(&self, base: &Url) -> Result<Vec<String>> {
        let sitemap_url = base
            .join(SITEMAP_PATH)
            .map_err(|e| CrawlError::InvalidUrl(e.to_string()))?;
        let domain = url_host(base)
            .ok_or_else(|| CrawlError::InvalidUrl(format!("no host in {base}")))?;

        debug!(url = %sitemap_url, "Fetching sitemap");
        let response = self.client.get(sitemap_url.as_str()).send().await?;
        if !response.status().is_success() {
            return Err(CrawlError::Sitemap(format!(
                "{} returned {}",
                sitemap_url,
                response.status()
            )));
        }

        let body = response.text().await?;
        let urls = parse_sitemap(&body)?;
        debug!(count = urls.len(), "Sitemap entries parsed");

        Ok(urls
            .into_iter()
            .map(|u| normalize_url(&u))
            .filter(|u| is_same_domain(u, &domain))
            .filter(|u| !is_static_asset(u))
            .collect())
    }
}

/// Parse sitemap XML into its raw `<loc>` values.
fn parse_sitemap(xml: &str) -> Result<Vec<String>> {
    let urlset: Urlset = quick_xml::de::from_str(xml)?;
    Ok(urlset
        .entries
        .into_iter()
        .map(|e| e.loc.trim().to_string())
        .filter(|loc| !loc.is_empty())
        .collect())
}
