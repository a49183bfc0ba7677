use chrono::Utc;
use serde::{Deserialize, Serialize};
use url::Url;

/// Raw HTML and response metadata from a single fetch.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub url: String,
    pub status_code: u16,
    pub html: String,
}

/// Metadata extracted from the page and its URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMetadata {
    pub url: String,
    pub domain: String,
    pub path: String,
    pub title: String,
    pub language: String,
    /// RFC 3339 timestamp of the fetch.
    pub fetched_at: String,
}

impl PageMetadata {
    /// Build metadata from the page URL and its raw HTML.
    pub fn from_page(url: &str, html: &str) -> Self {
        let parsed = Url::parse(url).ok();
        let domain = parsed
            .as_ref()
            .and_then(|u| u.host_str())
            .unwrap_or_default()
            .to_string();
        let path = parsed
            .as_ref()
            .map(|u| u.path().to_string())
            .unwrap_or_default();

        Self {
            url: url.to_string(),
            domain,
            path,
            title: extract_title(html),
            language: extract_lang(html),
            fetched_at: Utc::now().to_rfc3339(),
        }
    }
}

/// A heading-delimited section of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub level: u32,
    pub text: String,
}

/// A single heading found in the content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heading {
    pub level: u32,
    pub text: String,
}

/// A hyperlink found in the content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// Text and structured content of a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    pub text: String,
    pub markdown: String,
    pub sections: Vec<Section>,
}

/// Structural metadata parsed from the content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageStructure {
    pub headings: Vec<Heading>,
    pub links: Vec<Link>,
    pub code_blocks: usize,
    pub tables: usize,
    pub lists: usize,
}

/// Complete JSON output for a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageJson {
    pub metadata: PageMetadata,
    pub content: PageContent,
    pub structure: PageStructure,
}

/// Pull the `<title>` content from raw HTML.
fn extract_title(html: &str) -> String {
    let Some(start) = html.find("<title>") else {
        return String::new();
    };
    let after = &html[start + "<title>".len()..];
    match after.find("</title>") {
        Some(end) => after[..end].trim().to_string(),
        None => String::new(),
    }
}

/// Pull the lang attribute from the `<html>` tag, defaulting to "en".
fn extract_lang(html: &str) -> String {
    let Some(idx) = html.find("lang=\"") else {
        return "en".to_string();
    };
    let after = &html[idx + "lang=\"".len()..];
    match after.find('"') {
        Some(end) => after[..end].to_string(),
        None => "en".to_string(),
    }
}
