use clap::{ArgGroup, arg, command};
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("pageforge")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("pageforge")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("convert")
                .about(
                    "Convert a single page (default) or a whole website to Markdown, JSON, \
                PDF, or embeddings",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The URL to convert")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(--"only")
                        .required(false)
                        .help("Convert only the given page (the default mode)")
                        .action(clap::ArgAction::SetTrue)
                        .conflicts_with("all"),
                )
                .arg(
                    arg!(--"all")
                        .required(false)
                        .help("Discover and convert every page of the site")
                        .action(clap::ArgAction::SetTrue)
                        .conflicts_with("only"),
                )
                .arg(
                    arg!(--"markdown")
                        .required(false)
                        .help("Output Markdown files")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"json")
                        .required(false)
                        .help("Output structured JSON with metadata and document analysis")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"pdf")
                        .required(false)
                        .help("Output PDF documents")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"embeddings")
                        .required(false)
                        .help("Output embedding vectors generated via a local Ollama instance")
                        .action(clap::ArgAction::SetTrue)
                        .requires("model"),
                )
                .group(
                    ArgGroup::new("format")
                        .args(["markdown", "json", "pdf", "embeddings"])
                        .required(true),
                )
                .arg(
                    arg!(-m --"model" <MODEL>)
                        .required(false)
                        .help("Embedding model name (required with --embeddings)"),
                )
                .arg(
                    arg!(--"chunk-size" <WORDS>)
                        .required(false)
                        .help("Words per chunk when generating embeddings")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("512"),
                )
                .arg(
                    arg!(-o --"output-dir" <PATH>)
                        .required(false)
                        .help("Directory to write converted files into (default: current dir)"),
                )
                .arg(
                    arg!(--"max-pages" <NUM>)
                        .required(false)
                        .help("Maximum number of pages to discover with --all")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("100"),
                ),
        )
}
