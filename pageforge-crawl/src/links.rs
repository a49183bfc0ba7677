//! Extraction of crawlable links from an HTML document.

use scraper::{Html, Selector};
use url::Url;

use crate::rules::normalize_url;

/// Pull every followable `<a href>` out of `html`, resolved against `base`.
///
/// Skips anchors, mailto:, javascript:, and tel: targets. Relative hrefs are
/// resolved against the base URL; anything that fails to resolve is dropped.
/// Returned URLs are normalized but not deduplicated or domain-filtered;
/// callers apply their own policy.
pub fn extract_links(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(anchors) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for element in document.select(&anchors) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if href.is_empty()
            || href.starts_with('#')
            || href.starts_with("mailto:")
            || href.starts_with("javascript:")
            || href.starts_with("tel:")
        {
            continue;
        }

        let Ok(resolved) = base.join(href) else {
            continue;
        };
        links.push(normalize_url(resolved.as_str()));
    }
    links
}
