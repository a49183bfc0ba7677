use crate::chunk::Chunker;
use crate::error::{CoreError, Result};
use crate::model::PageMetadata;
use crate::render::Renderer;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Duration;
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
const EMBEDDING_TIMEOUT_SECS: u64 = 60;

/// Generates embeddings from Markdown by chunking the text and calling an
/// Ollama-compatible embedding API for each chunk. Output is a
/// human-readable `.embeddings.txt` file.
pub struct EmbeddingsRenderer {
    model: String,
    chunk_size: usize,
    endpoint: String,
    client: Client,
}

#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct OllamaResponse {
    embedding: Vec<f64>,
}

impl EmbeddingsRenderer {
    pub fn new(model: impl Into<String>, chunk_size: usize) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(EMBEDDING_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            model: model.into(),
            chunk_size,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client,
        }
    }

    /// Point the renderer at a different Ollama-compatible API base.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn embed(&self, text: &str) -> Result<Vec<f64>> {
        let request = OllamaRequest {
            model: &self.model,
            prompt: text,
        };

        let response = self
            .client
            .post(format!("{}/api/embeddings", self.endpoint))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CoreError::RenderError(format!(
                "embedding API returned {status}: {body}"
            )));
        }

        let parsed: OllamaResponse = response.json().await?;
        Ok(parsed.embedding)
    }
}

#[async_trait]
impl Renderer for EmbeddingsRenderer {
    async fn render(&self, markdown: &str, meta: &PageMetadata) -> Result<Vec<u8>> {
        let chunker = Chunker::new(self.chunk_size);
        let chunks = chunker.chunk(markdown);

        if chunks.is_empty() {
            return Err(CoreError::RenderError("no content to embed".to_string()));
        }

        let mut out = String::new();
        let _ = writeln!(out, "# source: {}", meta.url);
        let _ = writeln!(out, "# model: {}", self.model);
        let _ = writeln!(out, "# chunk_size: {}\n", self.chunk_size);

        for (i, chunk) in chunks.iter().enumerate() {
            debug!("Embedding chunk {}/{}", i + 1, chunks.len());
            let embedding = self.embed(chunk).await.map_err(|e| {
                CoreError::RenderError(format!("embedding chunk {}: {e}", i + 1))
            })?;

            let vector = embedding
                .iter()
                .map(|v| format!("{v:.4}"))
                .collect::<Vec<_>>()
                .join(", ");

            let _ = writeln!(out, "--- chunk {} ---", i + 1);
            let _ = writeln!(out, "TEXT:\n{chunk}\n");
            let _ = writeln!(out, "VECTOR:\n[{vector}]\n");
        }

        Ok(out.into_bytes())
    }

    fn extension(&self) -> &'static str {
        ".embeddings.txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn meta() -> PageMetadata {
        PageMetadata::from_page("https://example.com/doc", "<html></html>")
    }

    #[tokio::test]
    async fn test_render_against_stub_api() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "embedding": [0.1234, -0.5, 2.0] })),
            )
            .mount(&mock_server)
            .await;

        let renderer =
            EmbeddingsRenderer::new("test-model", 4).with_endpoint(mock_server.uri());
        let bytes = renderer
            .render("alpha beta gamma delta epsilon", &meta())
            .await
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("# model: test-model"));
        assert!(text.contains("--- chunk 1 ---"));
        assert!(text.contains("--- chunk 2 ---"));
        assert!(text.contains("[0.1234, -0.5000, 2.0000]"));
    }

    #[tokio::test]
    async fn test_empty_markdown_is_error() {
        let renderer = EmbeddingsRenderer::new("test-model", 4);
        let err = renderer.render("  ", &meta()).await.unwrap_err();
        assert!(matches!(err, CoreError::RenderError(_)));
    }

    #[tokio::test]
    async fn test_api_failure_propagates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let renderer =
            EmbeddingsRenderer::new("test-model", 4).with_endpoint(mock_server.uri());
        let err = renderer.render("some words here", &meta()).await.unwrap_err();
        assert!(matches!(err, CoreError::RenderError(_)));
    }
}
