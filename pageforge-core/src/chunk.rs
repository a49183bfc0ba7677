//! Splits Markdown text into token-sized chunks for embedding.
//! Uses a whitespace tokenizer (words approximate tokens); no overlap.

const DEFAULT_CHUNK_SIZE: usize = 512;

/// Splits text into fixed-size word chunks.
pub struct Chunker {
    chunk_size: usize,
}

impl Chunker {
    /// Create a Chunker; sizes of zero fall back to the 512-word default.
    pub fn new(chunk_size: usize) -> Self {
        let chunk_size = if chunk_size == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            chunk_size
        };
        Self { chunk_size }
    }

    /// Split the input into contiguous blocks of at most `chunk_size` words.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        words
            .chunks(self.chunk_size)
            .map(|chunk| chunk.join(" "))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(Chunker::new(4).chunk("   ").is_empty());
    }

    #[test]
    fn test_exact_boundary() {
        let chunks = Chunker::new(2).chunk("a b c d");
        assert_eq!(chunks, vec!["a b", "c d"]);
    }

    #[test]
    fn test_trailing_partial_chunk() {
        let chunks = Chunker::new(2).chunk("a b c");
        assert_eq!(chunks, vec!["a b", "c"]);
    }

    #[test]
    fn test_zero_size_uses_default() {
        let text = "word ".repeat(600);
        let chunks = Chunker::new(0).chunk(&text);
        assert_eq!(chunks.len(), 2);
    }
}
