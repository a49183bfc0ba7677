use crate::error::{CoreError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Writes rendered output to disk.
///
/// Single-page mode uses a flat filename derived from the whole URL
/// (`example_com_docs_intro.md`); site mode mirrors the URL path structure
/// under the output directory (`/docs/intro` becomes `docs/intro.md`).
pub struct Writer {
    output_dir: PathBuf,
}

impl Writer {
    /// Create a Writer targeting `output_dir`, defaulting to the current
    /// working directory. The directory is created eagerly.
    pub fn new(output_dir: Option<&str>) -> Result<Self> {
        let output_dir = match output_dir {
            Some(dir) if !dir.is_empty() => {
                PathBuf::from(shellexpand::tilde(dir).into_owned())
            }
            _ => std::env::current_dir()?,
        };

        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write output under a flat, URL-derived filename.
    pub fn write_flat(&self, url: &str, data: &[u8], ext: &str) -> Result<PathBuf> {
        let name = filename_from_url(url);
        let path = self.output_dir.join(format!("{name}{ext}"));
        fs::write(&path, data)?;
        Ok(path)
    }

    /// Write output mirroring the URL path structure.
    pub fn write_mirrored(&self, url: &str, data: &[u8], ext: &str) -> Result<PathBuf> {
        let parsed =
            Url::parse(url).map_err(|e| CoreError::InvalidUrl(format!("{url}: {e}")))?;

        let mut url_path = parsed.path().trim_end_matches('/').to_string();
        if url_path.is_empty() {
            url_path = "index".to_string();
        }
        let url_path = url_path.trim_start_matches('/');

        let path = self.output_dir.join(format!("{url_path}{ext}"));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, data)?;
        Ok(path)
    }
}

/// Convert a URL into a flat filename: host and path segments joined by
/// underscores, non-alphanumerics replaced.
fn filename_from_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return sanitize(url);
    };

    let mut parts = vec![sanitize(parsed.host_str().unwrap_or_default())];
    for segment in parsed.path().trim_matches('/').split('/') {
        if !segment.is_empty() {
            parts.push(sanitize(segment));
        }
    }
    parts.join("_")
}

fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://example.com/docs/intro"),
            "example_com_docs_intro"
        );
        assert_eq!(filename_from_url("https://example.com/"), "example_com");
    }

    #[test]
    fn test_filename_from_invalid_url() {
        assert_eq!(filename_from_url("not a url"), "not_a_url");
    }
}
