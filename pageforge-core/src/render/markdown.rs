use crate::error::Result;
use crate::model::PageMetadata;
use crate::render::Renderer;
use async_trait::async_trait;

/// Writes Markdown as-is. The simplest renderer, since Markdown is already
/// the canonical pipeline format.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Renderer for MarkdownRenderer {
    async fn render(&self, markdown: &str, _meta: &PageMetadata) -> Result<Vec<u8>> {
        Ok(markdown.as_bytes().to_vec())
    }

    fn extension(&self) -> &'static str {
        ".md"
    }
}
