use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Sitemap error: {0}")]
    Sitemap(String),

    #[error("Sitemap XML error: {0}")]
    XmlError(#[from] quick_xml::DeError),
}

pub type Result<T> = std::result::Result<T, CrawlError>;
