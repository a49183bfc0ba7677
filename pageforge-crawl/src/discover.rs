//! Page discovery orchestration: sitemap first, BFS link crawl as fallback.

use std::time::Duration;

use pageforge_core::Fetcher;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CrawlError, Result};
use crate::frontier::Frontier;
use crate::links::extract_links;
use crate::rules::{is_same_domain, is_static_asset, normalize_url, url_host};
use crate::sitemap::SitemapReader;

const DEFAULT_MAX_PAGES: usize = 100;

/// Discovers the set of pages on a site, starting from a base URL.
///
/// The sitemap is tried first because it is one request and usually
/// complete. When the sitemap is missing, broken, or empty, discovery falls
/// back to a breadth-first crawl of same-domain links.
#[derive(Debug)]
pub struct Discoverer {
    max_pages: usize,
    sitemap: SitemapReader,
}

impl Default for Discoverer {
    fn default() -> Self {
        Self::new()
    }
}

impl Discoverer {
    pub fn new() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            sitemap: SitemapReader::new(),
        }
    }

    /// Cap the breadth-first crawl's visited set. Sitemap results are not
    /// capped. Zero means the default cap.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = if max_pages == 0 {
            DEFAULT_MAX_PAGES
        } else {
            max_pages
        };
        self
    }

    /// Override the sitemap fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.sitemap = SitemapReader::with_timeout(timeout);
        self
    }

    /// Discover the page URLs for the site hosting `base_url`.
    ///
    /// The returned list is deduplicated, normalized, same-domain only, and
    /// always includes the base URL first when BFS is used. In BFS mode the
    /// result is everything the frontier accepted, including links queued
    /// when the cap was reached.
    pub async fn discover_all(&self, base_url: &str, fetcher: &dyn Fetcher) -> Result<Vec<String>> {
        let base =
            Url::parse(base_url).map_err(|e| CrawlError::InvalidUrl(format!("{base_url}: {e}")))?;
        url_host(&base).ok_or_else(|| CrawlError::InvalidUrl(format!("no host in {base_url}")))?;

        match self.sitemap.read(&base).await {
            Ok(urls) if !urls.is_empty() => {
                info!(count = urls.len(), "Using sitemap for discovery");
                Ok(urls)
            }
            Ok(_) => {
                info!("Sitemap is empty, falling back to link crawl");
                self.crawl(&base, fetcher).await
            }
            Err(e) => {
                info!(error = %e, "Sitemap unavailable, falling back to link crawl");
                self.crawl(&base, fetcher).await
            }
        }
    }

    /// Breadth-first crawl of same-domain links starting at `base`.
    async fn crawl(&self, base: &Url, fetcher: &dyn Fetcher) -> Result<Vec<String>> {
        // Checked by discover_all.
        let domain = url_host(base)
            .ok_or_else(|| CrawlError::InvalidUrl(format!("no host in {base}")))?;

        let mut frontier = Frontier::new();
        frontier.add(normalize_url(base.as_str()));

        while frontier.has_next() && frontier.visited_count() < self.max_pages {
            let Some(url) = frontier.next() else {
                break;
            };

            let result = match fetcher.fetch(&url).await {
                Ok(result) => result,
                Err(e) => {
                    // The URL keeps its slot; we just cannot follow its links.
                    warn!(url = %url, error = %e, "Fetch failed during crawl");
                    continue;
                }
            };

            let Ok(page_url) = Url::parse(&url) else {
                continue;
            };
            let links = extract_links(&result.html, &page_url);
            debug!(url = %url, found = links.len(), "Extracted links");

            for link in links {
                if is_same_domain(&link, &domain) && !is_static_asset(&link) {
                    frontier.add(link);
                }
            }
        }

        info!(count = frontier.all().len(), "Link crawl complete");
        Ok(frontier.all().to_vec())
    }
}
