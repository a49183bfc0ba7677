use crate::error::{CoreError, Result};
use scraper::{Html, Selector};

/// Elements removed before extraction; they contribute no meaningful content.
const NOISE_SELECTOR: &str = "script, style, noscript, \
     nav, footer, header, \
     img, picture, figure, figcaption, \
     iframe, video, audio, \
     svg, canvas, \
     form, button, input, select, textarea, \
     .sidebar, .menu, .navigation, .ads, .advertisement";

/// Strips noise from HTML and returns the main content fragment.
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Take raw HTML and return a cleaned HTML fragment containing only the
    /// main content. The best container is picked in priority order:
    /// `<main>` is the most semantically precise, then `<article>`, then
    /// `<body>`.
    pub fn extract(&self, html: &str) -> Result<String> {
        let mut document = Html::parse_document(html);

        let noise = Selector::parse(NOISE_SELECTOR)
            .map_err(|e| CoreError::ParseError(format!("noise selector: {e}")))?;

        // Collect first, then detach; detaching while iterating would
        // invalidate the selection.
        let noise_ids: Vec<_> = document.select(&noise).map(|el| el.id()).collect();
        for id in noise_ids {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }

        for tag in ["main", "article", "body"] {
            let selector = Selector::parse(tag)
                .map_err(|e| CoreError::ParseError(format!("container selector: {e}")))?;
            if let Some(container) = document.select(&selector).next() {
                return Ok(container.html());
            }
        }

        Err(CoreError::ParseError(
            "no content container found in HTML".to_string(),
        ))
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}
