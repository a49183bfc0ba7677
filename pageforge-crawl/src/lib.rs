pub mod discover;
pub mod error;
pub mod frontier;
pub mod links;
pub mod rules;
pub mod sitemap;

pub use discover::Discoverer;
pub use error::{CrawlError, Result};
pub use frontier::Frontier;
pub use links::extract_links;
pub use rules::{is_same_domain, is_static_asset, normalize_url, url_host};
pub use sitemap::SitemapReader;
