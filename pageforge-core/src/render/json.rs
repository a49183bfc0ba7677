use crate::error::Result;
use crate::model::{Heading, Link, PageContent, PageJson, PageMetadata, PageStructure, Section};
use crate::render::Renderer;
use async_trait::async_trait;
use pulldown_cmark::{Event, Options, Parser, Tag};

/// Produces structured JSON output from Markdown.
///
/// A single pulldown-cmark pass extracts structural information (headings,
/// links, code blocks, tables, lists) without inferring any business-specific
/// fields.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Renderer for JsonRenderer {
    async fn render(&self, markdown: &str, meta: &PageMetadata) -> Result<Vec<u8>> {
        let analysis = analyze(markdown);

        let page = PageJson {
            metadata: meta.clone(),
            content: PageContent {
                text: analysis.text,
                markdown: markdown.to_string(),
                sections: analysis.sections,
            },
            structure: PageStructure {
                headings: analysis.headings,
                links: analysis.links,
                code_blocks: analysis.code_blocks,
                tables: analysis.tables,
                lists: analysis.lists,
            },
        };

        Ok(serde_json::to_vec_pretty(&page)?)
    }

    fn extension(&self) -> &'static str {
        ".json"
    }
}

#[derive(Default)]
struct Analysis {
    text: String,
    headings: Vec<Heading>,
    links: Vec<Link>,
    sections: Vec<Section>,
    code_blocks: usize,
    tables: usize,
    lists: usize,
}

/// Walk the Markdown event stream once, collecting plain text, headings,
/// links, heading-delimited sections, and element counts.
fn analyze(markdown: &str) -> Analysis {
    let mut out = Analysis::default();

    let mut heading_buf: Option<(u32, String)> = None;
    let mut link_buf: Option<(String, String)> = None;
    let mut current_section: Option<Section> = None;

    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);

    for event in parser {
        match event {
            Event::Start(Tag::Heading(level, _, _)) => {
                heading_buf = Some((level as u32, String::new()));
            }
            Event::End(Tag::Heading(..)) => {
                if let Some((level, text)) = heading_buf.take() {
                    // Flush the previous section before opening the next.
                    if let Some(mut section) = current_section.take() {
                        section.text = section.text.trim().to_string();
                        out.sections.push(section);
                    }
                    current_section = Some(Section {
                        heading: text.clone(),
                        level,
                        text: String::new(),
                    });
                    out.headings.push(Heading { level, text });
                }
            }
            Event::Start(Tag::Link(_, dest, _)) => {
                link_buf = Some((String::new(), dest.to_string()));
            }
            Event::End(Tag::Link(..)) => {
                if let Some((text, href)) = link_buf.take() {
                    out.links.push(Link { text, href });
                }
            }
            Event::Start(Tag::CodeBlock(_)) => out.code_blocks += 1,
            Event::Start(Tag::Table(_)) => out.tables += 1,
            Event::Start(Tag::Item) => out.lists += 1,
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = heading_buf.as_mut() {
                    buf.push_str(&text);
                } else {
                    if let Some((link_text, _)) = link_buf.as_mut() {
                        link_text.push_str(&text);
                    }
                    if let Some(section) = current_section.as_mut() {
                        section.text.push_str(&text);
                        section.text.push(' ');
                    }
                }
                out.text.push_str(&text);
                out.text.push(' ');
            }
            Event::SoftBreak | Event::HardBreak => {
                out.text.push('\n');
                if let Some(section) = current_section.as_mut() {
                    section.text.push('\n');
                }
            }
            Event::End(Tag::Paragraph) => {
                out.text.push('\n');
            }
            _ => {}
        }
    }

    if let Some(mut section) = current_section.take() {
        section.text = section.text.trim().to_string();
        out.sections.push(section);
    }

    out.text = out.text.trim().to_string();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Intro\n\nHello [world](https://example.com).\n\n\
## Usage\n\n- one\n- two\n\n```rust\nfn main() {}\n```\n";

    #[test]
    fn test_headings_collected() {
        let analysis = analyze(SAMPLE);
        assert_eq!(analysis.headings.len(), 2);
        assert_eq!(analysis.headings[0].level, 1);
        assert_eq!(analysis.headings[0].text, "Intro");
        assert_eq!(analysis.headings[1].level, 2);
    }

    #[test]
    fn test_links_collected() {
        let analysis = analyze(SAMPLE);
        assert_eq!(analysis.links.len(), 1);
        assert_eq!(analysis.links[0].href, "https://example.com");
        assert_eq!(analysis.links[0].text, "world");
    }

    #[test]
    fn test_counts() {
        let analysis = analyze(SAMPLE);
        assert_eq!(analysis.code_blocks, 1);
        assert_eq!(analysis.lists, 2);
        assert_eq!(analysis.tables, 0);
    }

    #[test]
    fn test_sections_follow_headings() {
        let analysis = analyze(SAMPLE);
        assert_eq!(analysis.sections.len(), 2);
        assert_eq!(analysis.sections[0].heading, "Intro");
        assert!(analysis.sections[0].text.contains("Hello"));
        assert_eq!(analysis.sections[1].heading, "Usage");
    }

    #[test]
    fn test_plain_text_has_no_markup() {
        let analysis = analyze("Some **bold** and `code` text.");
        assert!(!analysis.text.contains("**"));
        assert!(!analysis.text.contains('`'));
        assert!(analysis.text.contains("bold"));
    }
}
