use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pageforge_core::{
    EmbeddingsRenderer, Fetcher, HtmlExtractor, HttpFetcher, JsonRenderer, MarkdownNormalizer,
    MarkdownRenderer, PageMetadata, PdfRenderer, Renderer, Writer,
};
use pageforge_crawl::Discoverer;
use std::time::Duration;
use url::Url;

/// Which renderer the user picked on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
    Pdf,
    Embeddings,
}

impl OutputFormat {
    /// Read the format from the convert flags. clap requires exactly one of
    /// them.
    pub fn from_flags(matches: &ArgMatches) -> Self {
        if matches.get_flag("json") {
            OutputFormat::Json
        } else if matches.get_flag("pdf") {
            OutputFormat::Pdf
        } else if matches.get_flag("embeddings") {
            OutputFormat::Embeddings
        } else {
            OutputFormat::Markdown
        }
    }

    pub fn renderer(self, model: &str, chunk_size: usize) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Markdown => Box::new(MarkdownRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
            OutputFormat::Pdf => Box::new(PdfRenderer::new()),
            OutputFormat::Embeddings => Box::new(EmbeddingsRenderer::new(model, chunk_size)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Embeddings => "embeddings",
        }
    }
}

pub async fn handle_convert(sub_matches: &ArgMatches, quiet: bool) {
    tracing_subscriber::fmt::init();

    let url = sub_matches.get_one::<Url>("url").unwrap();
    let all = sub_matches.get_flag("all");
    // Required alongside --embeddings; absent otherwise.
    let model = sub_matches
        .get_one::<String>("model")
        .map(String::as_str)
        .unwrap_or_default();
    let chunk_size = sub_matches.get_one::<usize>("chunk-size").unwrap();
    let output_dir = sub_matches.get_one::<String>("output-dir");
    let max_pages = sub_matches.get_one::<usize>("max-pages").unwrap();

    let format = OutputFormat::from_flags(sub_matches);
    let renderer = format.renderer(model, *chunk_size);

    let writer = match Writer::new(output_dir.map(String::as_str)) {
        Ok(writer) => writer,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), format!("Cannot create output directory: {e}").red());
            std::process::exit(1);
        }
    };

    if !quiet {
        println!("\n📄 Converting {}", url.as_str().bold());
        println!("Format: {}", format.label());
        println!("Output: {}\n", writer.output_dir().display());
    }

    let fetcher = HttpFetcher::new();

    if !all {
        match convert_page(url.as_str(), &fetcher, renderer.as_ref()).await {
            Ok(data) => match writer.write_flat(url.as_str(), &data, renderer.extension()) {
                Ok(path) => {
                    if !quiet {
                        println!("{} {}", "✓".green(), path.display());
                    }
                }
                Err(e) => {
                    eprintln!("{} {}", "✗".red(), e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("{} Conversion failed: {}", "✗".red(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Whole-site mode: discover first, then convert page by page.
    let discoverer = Discoverer::new().with_max_pages(*max_pages);
    let pages = match discoverer.discover_all(url.as_str(), &fetcher).await {
        Ok(pages) => pages,
        Err(e) => {
            eprintln!("{} Discovery failed: {}", "✗".red(), e);
            std::process::exit(1);
        }
    };
    if !quiet {
        println!("Discovered {} pages\n", pages.len());
    }

    let bar = ProgressBar::new(pages.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    bar.enable_steady_tick(Duration::from_millis(100));

    let mut converted = 0usize;
    let mut failed = 0usize;

    for page in &pages {
        bar.set_message(page.clone());

        let outcome = match convert_page(page, &fetcher, renderer.as_ref()).await {
            Ok(data) => writer
                .write_mirrored(page, &data, renderer.extension())
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(path) => {
                converted += 1;
                if !quiet {
                    bar.println(format!("{} {}", "✓".green(), path.display()));
                }
            }
            Err(e) => {
                failed += 1;
                if !quiet {
                    bar.println(format!("{} {} ({})", "✗".red(), page, e));
                }
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!("\n{}", "Conversion complete".bold());
    println!("  {} converted", converted.to_string().green());
    if failed > 0 {
        println!("  {} failed", failed.to_string().red());
    }
}

/// Run one page through the fetch → extract → normalize → render pipeline.
async fn convert_page(
    url: &str,
    fetcher: &dyn Fetcher,
    renderer: &dyn Renderer,
) -> pageforge_core::Result<Vec<u8>> {
    let fetched = fetcher.fetch(url).await?;
    let content = HtmlExtractor::new().extract(&fetched.html)?;
    let markdown = MarkdownNormalizer::new().normalize(&content)?;
    let meta = PageMetadata::from_page(url, &fetched.html);
    renderer.render(&markdown, &meta).await
}
