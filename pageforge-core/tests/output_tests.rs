// Tests for output file naming and writing

use pageforge_core::Writer;
use tempfile::TempDir;

// ============================================================================
// Flat Naming (single-page mode)
// ============================================================================

#[test]
fn test_write_flat_derives_name_from_url() {
    let dir = TempDir::new().unwrap();
    let writer = Writer::new(dir.path().to_str()).unwrap();

    let path = writer
        .write_flat("https://example.com/docs/intro", b"content", ".md")
        .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "example_com_docs_intro.md"
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
}

#[test]
fn test_write_flat_root_url() {
    let dir = TempDir::new().unwrap();
    let writer = Writer::new(dir.path().to_str()).unwrap();

    let path = writer
        .write_flat("https://example.com/", b"x", ".json")
        .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "example_com.json"
    );
}

// ============================================================================
// Mirrored Naming (site mode)
// ============================================================================

#[test]
fn test_write_mirrored_follows_url_path() {
    let dir = TempDir::new().unwrap();
    let writer = Writer::new(dir.path().to_str()).unwrap();

    let path = writer
        .write_mirrored("https://example.com/docs/intro", b"content", ".md")
        .unwrap();

    assert_eq!(path, dir.path().join("docs/intro.md"));
    assert!(path.exists());
}

#[test]
fn test_write_mirrored_root_becomes_index() {
    let dir = TempDir::new().unwrap();
    let writer = Writer::new(dir.path().to_str()).unwrap();

    let path = writer
        .write_mirrored("https://example.com/", b"home", ".md")
        .unwrap();

    assert_eq!(path, dir.path().join("index.md"));
}

#[test]
fn test_write_mirrored_strips_trailing_slash() {
    let dir = TempDir::new().unwrap();
    let writer = Writer::new(dir.path().to_str()).unwrap();

    let path = writer
        .write_mirrored("https://example.com/guide/", b"g", ".md")
        .unwrap();

    assert_eq!(path, dir.path().join("guide.md"));
}

#[test]
fn test_write_mirrored_creates_nested_dirs() {
    let dir = TempDir::new().unwrap();
    let writer = Writer::new(dir.path().to_str()).unwrap();

    let path = writer
        .write_mirrored("https://example.com/a/b/c/page", b"deep", ".md")
        .unwrap();

    assert!(path.exists());
    assert!(dir.path().join("a/b/c").is_dir());
}

#[test]
fn test_write_mirrored_invalid_url_is_error() {
    let dir = TempDir::new().unwrap();
    let writer = Writer::new(dir.path().to_str()).unwrap();

    assert!(writer.write_mirrored("not a url", b"x", ".md").is_err());
}

// ============================================================================
// Output Directory Handling
// ============================================================================

#[test]
fn test_writer_creates_output_dir() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("out/nested");
    let writer = Writer::new(target.to_str()).unwrap();

    assert!(target.is_dir());
    assert_eq!(writer.output_dir(), target.as_path());
}
