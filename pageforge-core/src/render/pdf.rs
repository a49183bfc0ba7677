use crate::error::{CoreError, Result};
use crate::model::PageMetadata;
use crate::render::Renderer;
use async_trait::async_trait;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfPageIndex, Rgb,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;

/// Renders Markdown content as a PDF document.
///
/// Handles headings (variable font sizes), paragraphs, code blocks, and
/// lists. Images are intentionally not rendered.
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Renderer for PdfRenderer {
    async fn render(&self, markdown: &str, meta: &PageMetadata) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            if meta.title.is_empty() {
                "pageforge"
            } else {
                &meta.title
            },
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "content",
        );

        let helvetica = builtin(&doc, BuiltinFont::Helvetica)?;
        let helvetica_bold = builtin(&doc, BuiltinFont::HelveticaBold)?;
        let helvetica_oblique = builtin(&doc, BuiltinFont::HelveticaOblique)?;
        let courier = builtin(&doc, BuiltinFont::Courier)?;

        let mut cursor = Cursor::new(&doc, page, layer);

        // Title and source header.
        if !meta.title.is_empty() {
            cursor.write_wrapped(&meta.title, &helvetica_bold, 18.0, 8.0);
            cursor.advance(4.0);
        }
        cursor.set_gray();
        cursor.write_wrapped(&format!("Source: {}", meta.url), &helvetica_oblique, 9.0, 5.0);
        cursor.set_black();
        cursor.advance(6.0);

        let mut in_code_block = false;

        for line in markdown.lines() {
            let trimmed = line.trim();

            if trimmed.starts_with("```") {
                in_code_block = !in_code_block;
                cursor.advance(2.0);
                continue;
            }

            if in_code_block {
                cursor.write_raw(line, &courier, 9.0, 4.5);
                continue;
            }

            if trimmed.is_empty() {
                cursor.advance(3.0);
                continue;
            }

            if let Some(level) = heading_level(line) {
                let size = heading_size(level);
                let text = clean_inline_markdown(line.trim_start_matches('#').trim());
                cursor.advance(4.0);
                cursor.write_wrapped(&text, &helvetica_bold, size, size * 0.6);
                cursor.advance(2.0);
                continue;
            }

            if let Some(item) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
                let text = format!("\u{2022} {}", clean_inline_markdown(item.trim()));
                cursor.write_wrapped(&text, &helvetica, 10.0, 5.0);
                continue;
            }

            if is_numbered_item(trimmed) {
                cursor.write_wrapped(&clean_inline_markdown(trimmed), &helvetica, 10.0, 5.0);
                continue;
            }

            cursor.write_wrapped(&clean_inline_markdown(line), &helvetica, 10.0, 5.0);
        }

        drop(cursor);
        let bytes = doc
            .save_to_bytes()
            .map_err(|e| CoreError::RenderError(format!("saving PDF: {e}")))?;
        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        ".pdf"
    }
}

fn builtin(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| CoreError::RenderError(format!("loading builtin font: {e}")))
}

/// Tracks the write position across pages, adding pages as content runs past
/// the bottom margin.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    page: PdfPageIndex,
    layer: PdfLayerIndex,
    y: f32,
    gray: bool,
}

impl<'a> Cursor<'a> {
    fn new(doc: &'a PdfDocumentReference, page: PdfPageIndex, layer: PdfLayerIndex) -> Self {
        Self {
            doc,
            page,
            layer,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
            gray: false,
        }
    }

    fn advance(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y - needed_mm < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.page = page;
            self.layer = layer;
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    fn set_gray(&mut self) {
        self.gray = true;
    }

    fn set_black(&mut self) {
        self.gray = false;
    }

    /// Write a single pre-wrapped line at the cursor.
    fn write_raw(&mut self, text: &str, font: &IndirectFontRef, size_pt: f32, line_mm: f32) {
        self.ensure_room(line_mm);
        let layer = self.doc.get_page(self.page).get_layer(self.layer);
        let shade = if self.gray { 0.4 } else { 0.0 };
        layer.set_fill_color(Color::Rgb(Rgb::new(shade, shade, shade, None)));
        layer.use_text(text, size_pt, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= line_mm;
    }

    /// Word-wrap `text` to the printable width and write each line.
    fn write_wrapped(&mut self, text: &str, font: &IndirectFontRef, size_pt: f32, line_mm: f32) {
        for line in wrap_text(text, max_chars_for(size_pt)) {
            self.write_raw(&line, font, size_pt, line_mm);
        }
    }
}

/// Approximate characters per line for the printable width at a font size.
/// Helvetica averages about half an em per glyph.
fn max_chars_for(size_pt: f32) -> usize {
    let usable_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    let char_mm = size_pt * 0.3528 * 0.5;
    (usable_mm / char_mm).floor().max(16.0) as usize
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn heading_level(line: &str) -> Option<usize> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes >= 1 && hashes <= 6 && line.chars().nth(hashes) == Some(' ') {
        Some(hashes)
    } else {
        None
    }
}

fn heading_size(level: usize) -> f32 {
    match level {
        1 => 18.0,
        2 => 15.0,
        3 => 13.0,
        4 => 12.0,
        5 => 11.0,
        _ => 10.0,
    }
}

fn is_numbered_item(line: &str) -> bool {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && line[digits..].starts_with(". ")
}

/// Strip inline Markdown formatting, keeping link text but not URLs.
fn clean_inline_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' | '_' | '`' => {}
            '[' => {
                // [text](url) -> text
                let mut link_text = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == ']' {
                        closed = true;
                        break;
                    }
                    link_text.push(inner);
                }
                if closed && chars.peek() == Some(&'(') {
                    for inner in chars.by_ref() {
                        if inner == ')' {
                            break;
                        }
                    }
                    out.push_str(&link_text);
                } else {
                    out.push('[');
                    out.push_str(&link_text);
                    if closed {
                        out.push(']');
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out.trim().to_string()
}
