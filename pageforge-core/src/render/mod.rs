use crate::error::Result;
use crate::model::PageMetadata;
use async_trait::async_trait;

mod embeddings;
mod json;
mod markdown;
mod pdf;

pub use embeddings::EmbeddingsRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use pdf::PdfRenderer;

/// Converts Markdown (and metadata) into a final output format.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, markdown: &str, meta: &PageMetadata) -> Result<Vec<u8>>;

    /// File extension for this renderer's output (e.g. ".md", ".pdf").
    fn extension(&self) -> &'static str;
}
