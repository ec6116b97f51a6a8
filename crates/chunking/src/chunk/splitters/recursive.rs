//! Recursive character splitter.

use super::ChunkSplitter;
use crate::chunk::{merging::merge_pieces, select_separator, split_on_separator, Span};
use crate::config::ChunkerConfig;
use rechunk_core::AppResult;

/// Splits text on a prioritized list of literal separators.
///
/// The size limit is soft: once a piece is too large and no finer separator
/// is left to try, it is emitted as it is.
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    chunk_size: usize,
    separators: Vec<String>,
}

impl RecursiveSplitter {
    /// Create a splitter, rejecting a chunk size below 1.
    pub fn new(chunk_size: usize, separators: Vec<String>) -> AppResult<Self> {
        Self::from_config(&ChunkerConfig {
            chunk_size,
            separators,
        })
    }

    /// Create a splitter from a chunker configuration.
    pub fn from_config(config: &ChunkerConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            chunk_size: config.chunk_size,
            separators: config.separators.clone(),
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Split `text` into borrowed fragments.
    pub fn split_text<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.split_spans(text)
            .into_iter()
            .map(|span| span.as_str(text))
            .collect()
    }
}

impl ChunkSplitter for RecursiveSplitter {
    fn split_spans(&self, text: &str) -> Vec<Span> {
        let mut fragments = Vec::new();
        if text.is_empty() {
            return fragments;
        }

        split_span(
            text,
            Span::full(text),
            &self.separators,
            self.chunk_size,
            &mut fragments,
        );

        tracing::debug!(
            "Recursive splitter created {} fragments from {} bytes",
            fragments.len(),
            text.len()
        );

        fragments
    }

    fn name(&self) -> &'static str {
        "recursive"
    }
}

/// Split `span` with the first matching separator, recursing with the
/// separators after it into every fragment still over `chunk_size`.
fn split_span(
    text: &str,
    span: Span,
    separators: &[String],
    chunk_size: usize,
    out: &mut Vec<Span>,
) {
    let choice = select_separator(span.as_str(text), separators);
    let pieces = split_on_separator(text, span, choice.separator);
    let separator_len = choice.separator.chars().count();

    for fragment in merge_pieces(&pieces, separator_len, chunk_size) {
        if fragment.char_len <= chunk_size {
            out.push(fragment);
        } else if choice.remaining.is_empty() {
            tracing::trace!(
                "Separators exhausted, keeping {} char fragment over limit {}",
                fragment.char_len,
                chunk_size
            );
            out.push(fragment);
        } else {
            split_span(text, fragment, choice.remaining, chunk_size, out);
        }
    }
}

/// Split `text` into fragments of at most `chunk_size` characters, preferring
/// the earliest separators in `separators`.
///
/// # Example
/// ```
/// use rechunk_chunking::split_text;
///
/// let separators = vec![". ".to_string(), " ".to_string(), String::new()];
/// let fragments = split_text("The quick brown fox. Jumps over the lazy dog.", 20, &separators)?;
/// assert_eq!(fragments, vec!["The quick brown fox", "Jumps over the lazy", "dog."]);
/// # Ok::<(), rechunk_core::AppError>(())
/// ```
pub fn split_text<'a>(
    text: &'a str,
    chunk_size: usize,
    separators: &[String],
) -> AppResult<Vec<&'a str>> {
    let splitter = RecursiveSplitter::new(chunk_size, separators.to_vec())?;
    Ok(splitter.split_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rechunk_core::AppError;

    fn splitter(chunk_size: usize, separators: &[&str]) -> RecursiveSplitter {
        RecursiveSplitter::new(
            chunk_size,
            separators.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_sentence_then_word_fallback() {
        let splitter = splitter(20, &[". ", " ", ""]);
        let fragments = splitter.split_text("The quick brown fox. Jumps over the lazy dog.");
        assert_eq!(
            fragments,
            vec!["The quick brown fox", "Jumps over the lazy", "dog."]
        );
    }

    #[test]
    fn test_separator_priority() {
        let splitter = splitter(5, &["\n\n", "\n", " "]);
        let fragments = splitter.split_text("ab cd\nef gh\n\nij");
        assert_eq!(fragments, vec!["ab cd", "ef gh", "ij"]);
    }

    #[test]
    fn test_priority_descends_to_words() {
        let splitter = splitter(5, &["\n\n", "\n", " "]);
        let fragments = splitter.split_text("ab cd ef\n\nij");
        assert_eq!(fragments, vec!["ab cd", "ef", "ij"]);
    }

    #[test]
    fn test_empty_text() {
        let splitter = splitter(10, &["\n", " "]);
        assert!(splitter.split_text("").is_empty());
        assert!(splitter.split_spans("").is_empty());
    }

    #[test]
    fn test_short_text_single_fragment() {
        let splitter = splitter(100, &["\n\n", "\n", " "]);
        assert_eq!(splitter.split_text("Hello world"), vec!["Hello world"]);
    }

    #[test]
    fn test_size_one_no_usable_separator() {
        let splitter = splitter(1, &["\n\n", "\n"]);
        assert_eq!(splitter.split_text("abc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_only_empty_separator() {
        let splitter = splitter(4, &[""]);
        assert_eq!(
            splitter.split_text("abcdefghij"),
            vec!["abcd", "efgh", "ij"]
        );
    }

    #[test]
    fn test_empty_separator_list_is_char_level() {
        let splitter = splitter(3, &[]);
        assert_eq!(splitter.split_text("abcdefg"), vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_soft_cap_when_separators_exhausted() {
        let splitter = splitter(5, &["\n", " "]);
        let fragments = splitter.split_text("ab\nabcdefghij klm");
        assert_eq!(fragments, vec!["ab", "abcdefghij", "klm"]);
    }

    #[test]
    fn test_unmatched_remaining_separators_fall_back_to_chars() {
        let splitter = splitter(4, &["\n", ","]);
        let fragments = splitter.split_text("ab\nabcdefghij");
        assert_eq!(fragments, vec!["ab", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_unicode_sizes_are_chars() {
        let splitter = splitter(3, &[""]);
        assert_eq!(splitter.split_text("ção🎮ü"), vec!["ção", "🎮ü"]);
    }

    #[test]
    fn test_cjk_separators() {
        let splitter = splitter(7, &["。", "，", ""]);
        let fragments = splitter.split_text("今天天气很好。我们去公园散步，然后回家。");
        assert_eq!(
            fragments,
            vec!["今天天气很好", "我们去公园散步", "然后回家", "。"]
        );
    }

    #[test]
    fn test_separator_runs_do_not_overflow_fragments() {
        assert_eq!(splitter(2, &["\n"]).split_text("ab\n"), vec!["ab", "\n"]);
        assert_eq!(
            splitter(1, &["\n"]).split_text("a\n\nb"),
            vec!["a", "\n", "b"]
        );
    }

    #[test]
    fn test_separator_runs_do_not_cut_words() {
        let splitter = splitter(3, &["\n\n", " "]);
        assert_eq!(
            splitter.split_text("abc\n\n\n\ndef"),
            vec!["abc", "\n\n", "def"]
        );
    }

    #[test]
    fn test_long_separator_run_is_split_further() {
        let splitter = splitter(1, &["\n\n", "\n"]);
        assert_eq!(
            splitter.split_text("a\n\n\n\nb"),
            vec!["a", "\n", "\n", "b"]
        );
    }

    #[test]
    fn test_from_config() {
        let config = ChunkerConfig::default();
        let splitter = RecursiveSplitter::from_config(&config).unwrap();
        assert_eq!(splitter.chunk_size(), 500);
        assert_eq!(splitter.separators(), config.separators.as_slice());
        assert_eq!(splitter.name(), "recursive");
    }

    #[test]
    fn test_rejects_zero_chunk_size() {
        let result = RecursiveSplitter::new(0, vec![" ".to_string()]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_split_text_fn_validates() {
        assert!(split_text("abc", 0, &[]).is_err());
        assert_eq!(split_text("a b", 1, &[" ".to_string()]).unwrap(), vec!["a", "b"]);
    }
}
