// Tests for the output renderers

use pageforge_core::model::PageJson;
use pageforge_core::{
    HtmlExtractor, JsonRenderer, MarkdownNormalizer, MarkdownRenderer, PageMetadata, PdfRenderer,
    Renderer,
};

fn sample_meta() -> PageMetadata {
    let html = r#"<html lang="en"><head><title>Sample</title></head><body></body></html>"#;
    PageMetadata::from_page("https://example.com/docs/intro", html)
}

// ============================================================================
// Markdown Renderer
// ============================================================================

#[tokio::test]
async fn test_markdown_renderer_is_passthrough() {
    let renderer = MarkdownRenderer::new();
    let markdown = "# Title\n\nbody text\n";
    let bytes = renderer.render(markdown, &sample_meta()).await.unwrap();
    assert_eq!(bytes, markdown.as_bytes());
    assert_eq!(renderer.extension(), ".md");
}

// ============================================================================
// JSON Renderer
// ============================================================================

#[tokio::test]
async fn test_json_renderer_structure() {
    let renderer = JsonRenderer::new();
    let markdown = "# Intro\n\nHello [world](https://example.com).\n\n\
## Usage\n\n- one\n- two\n\n```rust\nfn main() {}\n```\n";

    let bytes = renderer.render(markdown, &sample_meta()).await.unwrap();
    let page: PageJson = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(page.metadata.url, "https://example.com/docs/intro");
    assert_eq!(page.metadata.title, "Sample");
    assert_eq!(page.content.markdown, markdown);
    assert_eq!(page.structure.headings.len(), 2);
    assert_eq!(page.structure.links.len(), 1);
    assert_eq!(page.structure.code_blocks, 1);
    assert_eq!(page.structure.lists, 2);
    assert_eq!(page.content.sections.len(), 2);
    assert_eq!(renderer.extension(), ".json");
}

#[tokio::test]
async fn test_json_renderer_empty_markdown() {
    let renderer = JsonRenderer::new();
    let bytes = renderer.render("", &sample_meta()).await.unwrap();
    let page: PageJson = serde_json::from_slice(&bytes).unwrap();

    assert!(page.structure.headings.is_empty());
    assert!(page.content.sections.is_empty());
    assert_eq!(page.content.text, "");
}

// ============================================================================
// PDF Renderer
// ============================================================================

#[tokio::test]
async fn test_pdf_renderer_produces_pdf_bytes() {
    let renderer = PdfRenderer::new();
    let markdown = "# Title\n\nA paragraph.\n\n- item one\n- item two\n\n```\ncode line\n```\n";

    let bytes = renderer.render(markdown, &sample_meta()).await.unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(renderer.extension(), ".pdf");
}

#[tokio::test]
async fn test_pdf_renderer_long_document_paginates() {
    let renderer = PdfRenderer::new();
    let markdown = "line of body text\n\n".repeat(200);

    let bytes = renderer.render(&markdown, &sample_meta()).await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

// ============================================================================
// Extract + Normalize chain
// ============================================================================

#[test]
fn test_extract_then_normalize() {
    let html = r#"<html><body>
        <nav>skip this</nav>
        <main><h1>Guide</h1><p>Read <a href="https://example.com">this</a>.</p></main>
    </body></html>"#;

    let content = HtmlExtractor::new().extract(html).unwrap();
    let markdown = MarkdownNormalizer::new().normalize(&content).unwrap();

    assert!(markdown.contains("# Guide"));
    assert!(markdown.contains("[this](https://example.com)"));
    assert!(!markdown.contains("skip this"));
}
