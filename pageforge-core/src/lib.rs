pub mod chunk;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod model;
pub mod normalize;
pub mod output;
pub mod render;

pub use chunk::Chunker;
pub use error::{CoreError, Result};
pub use extract::HtmlExtractor;
pub use fetch::{Fetcher, HttpFetcher};
pub use model::{FetchResult, PageJson, PageMetadata};
pub use normalize::MarkdownNormalizer;
pub use output::Writer;
pub use render::{EmbeddingsRenderer, JsonRenderer, MarkdownRenderer, PdfRenderer, Renderer};
