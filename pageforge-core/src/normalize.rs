use crate::error::{CoreError, Result};
use htmd::HtmlToMarkdown;

/// Converts cleaned HTML into Markdown, the canonical intermediate format
/// for every downstream renderer.
pub struct MarkdownNormalizer {
    converter: HtmlToMarkdown,
}

impl MarkdownNormalizer {
    pub fn new() -> Self {
        let converter = HtmlToMarkdown::builder()
            .skip_tags(vec!["script", "style"])
            .build();
        Self { converter }
    }

    /// Convert a cleaned HTML fragment into Markdown.
    pub fn normalize(&self, html: &str) -> Result<String> {
        self.converter
            .convert(html)
            .map_err(|e| CoreError::ParseError(format!("converting HTML to markdown: {e}")))
    }
}

impl Default for MarkdownNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
