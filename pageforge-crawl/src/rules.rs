//! URL filtering rules: normalization, domain matching, and static-asset
//! classification. All pure functions, no state.

use url::Url;

/// File extensions skipped during discovery: images, stylesheets, scripts,
/// fonts, media, archives, office/PDF documents.
const STATIC_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "svg", "webp", "ico", "bmp", // images
    "css", "js", "mjs", // styles and scripts
    "woff", "woff2", "ttf", "eot", // fonts
    "mp4", "webm", "mp3", "wav", // media
    "zip", "tar", "gz", // archives
    "pdf", "doc", "docx", "xls", "xlsx", // documents
];

/// Strip fragments and trailing slashes for deduplication.
///
/// Normalization is best-effort: unparsable input is returned unchanged so a
/// bad URL never blocks the pipeline. The result is idempotent.
pub fn normalize_url(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    parsed.set_fragment(None);

    if parsed.path() != "/" {
        if let Some(stripped) = parsed.path().strip_suffix('/') {
            let stripped = stripped.to_string();
            parsed.set_path(&stripped);
        }
    }

    parsed.to_string()
}

/// Check whether `raw` belongs to `domain`.
///
/// Comparison is exact host equality, with an explicit port kept as part of
/// the host string. No scheme normalization and no subdomain matching.
pub fn is_same_domain(raw: &str, domain: &str) -> bool {
    let Ok(parsed) = Url::parse(raw) else {
        return false;
    };
    match url_host(&parsed) {
        Some(host) => host == domain,
        None => false,
    }
}

/// Check whether a URL points at a static asset (image, CSS, JS, etc.).
///
/// The extension is taken after the last `.` of the path component only;
/// query strings are ignored and matching is case-insensitive.
pub fn is_static_asset(raw: &str) -> bool {
    let Ok(parsed) = Url::parse(raw) else {
        return false;
    };

    let path = parsed.path();
    let file = path.rsplit('/').next().unwrap_or(path);
    let Some((_, ext)) = file.rsplit_once('.') else {
        return false;
    };

    let ext = ext.to_lowercase();
    STATIC_EXTENSIONS.contains(&ext.as_str())
}

/// The host of a URL with any explicit port attached, matching how the URL
/// renders its authority. Used as the "domain" of a crawl.
pub fn url_host(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_fragment() {
        assert_eq!(
            normalize_url("https://example.com/page#section"),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_url("https://example.com/docs/"),
            "https://example.com/docs"
        );
    }

    #[test]
    fn test_normalize_keeps_root_slash() {
        assert_eq!(normalize_url("https://example.com/"), "https://example.com/");
    }

    #[test]
    fn test_normalize_unparsable_passes_through() {
        assert_eq!(normalize_url("not a url"), "not a url");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [
            "https://example.com/docs/#frag",
            "https://example.com/",
            "https://example.com/a?q=1#frag",
            "not a url",
        ] {
            let once = normalize_url(raw);
            assert_eq!(normalize_url(&once), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn test_same_domain_exact_match() {
        assert!(is_same_domain("https://x.com/p", "x.com"));
        assert!(!is_same_domain("https://y.com/p", "x.com"));
        assert!(!is_same_domain("not a url", "x.com"));
    }

    #[test]
    fn test_same_domain_no_subdomain_match() {
        assert!(!is_same_domain("https://docs.x.com/p", "x.com"));
    }

    #[test]
    fn test_same_domain_with_port() {
        assert!(is_same_domain("http://127.0.0.1:8080/p", "127.0.0.1:8080"));
        assert!(!is_same_domain("http://127.0.0.1:8080/p", "127.0.0.1"));
    }

    #[test]
    fn test_static_asset_case_insensitive() {
        assert!(is_static_asset("https://x.com/a.JPG"));
        assert!(is_static_asset("https://x.com/style.css"));
        assert!(!is_static_asset("https://x.com/a.html"));
        assert!(!is_static_asset("https://x.com/page"));
    }

    #[test]
    fn test_static_asset_ignores_query() {
        assert!(is_static_asset("https://x.com/a.png?v=2"));
        assert!(!is_static_asset("https://x.com/page?file=a.png"));
    }

    #[test]
    fn test_static_asset_unparsable_is_false() {
        assert!(!is_static_asset("not a url"));
    }
}
