//! Recursive separator-driven chunking.
//!
//! Text is split on the coarsest separator that occurs in it, the pieces are
//! greedily packed up to the chunk size, and any fragment that is still too
//! large is split again with the finer separators that follow.

mod merging;
mod pipeline;
mod separator;
pub mod splitters;

pub use pipeline::ChunkPipeline;
pub use separator::{select_separator, split_on_separator, SeparatorChoice};
pub use splitters::{split_text, ChunkSplitter, RecursiveSplitter};

/// A contiguous region of a source text.
///
/// `start` and `end` are byte offsets into the text the span was cut from;
/// `char_len` is the number of Unicode code points between them, which is the
/// unit every size limit is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub char_len: usize,
}

impl Span {
    /// Span covering `text[start..end]`, measuring its length in chars.
    pub fn measure(text: &str, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            char_len: text[start..end].chars().count(),
        }
    }

    /// Span covering the whole of `text`.
    pub fn full(text: &str) -> Self {
        Self::measure(text, 0, text.len())
    }

    /// Borrow the spanned slice out of the text it was cut from.
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    /// Grow this span over a separator and the following `next` span.
    fn join(self, next: Span, separator_len: usize) -> Span {
        Span {
            start: self.start,
            end: next.end,
            char_len: self.char_len + separator_len + next.char_len,
        }
    }

    /// Grow this span over the separator that ends at byte `end`.
    fn through(self, end: usize, separator_len: usize) -> Span {
        Span {
            start: self.start,
            end,
            char_len: self.char_len + separator_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_measure_counts_chars() {
        let text = "héllo wörld";
        let span = Span::full(text);
        assert_eq!(span.char_len, 11);
        assert_eq!(span.end, text.len());
        assert_eq!(span.as_str(text), text);
    }

    #[test]
    fn test_span_join() {
        let text = "ab, cd";
        let left = Span::measure(text, 0, 2);
        let right = Span::measure(text, 4, 6);
        let joined = left.join(right, 2);
        assert_eq!(joined, Span::full(text));
    }

    #[test]
    fn test_span_through_separator() {
        let text = "ab, cd";
        let left = Span::measure(text, 0, 2);
        assert_eq!(left.through(4, 2), Span::measure(text, 0, 4));
    }
}
