//! Separator selection and splitting on a single separator.

use super::Span;

/// The separator picked for a span, together with the finer separators left
/// for recursing into pieces that are still too large.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorChoice<'s> {
    pub separator: &'s str,
    pub remaining: &'s [String],
}

impl SeparatorChoice<'_> {
    /// True when the span is cut between every character.
    pub fn is_char_level(&self) -> bool {
        self.separator.is_empty()
    }
}

/// Pick the first separator, in priority order, that literally occurs in `span`.
///
/// The empty string occurs in every span. When nothing in the list matches,
/// the choice falls back to character-level splitting with no separators left.
pub fn select_separator<'s>(span: &str, separators: &'s [String]) -> SeparatorChoice<'s> {
    separators
        .iter()
        .enumerate()
        .find(|(_, sep)| sep.is_empty() || span.contains(sep.as_str()))
        .map(|(i, sep)| SeparatorChoice {
            separator: sep.as_str(),
            remaining: &separators[i + 1..],
        })
        .unwrap_or(SeparatorChoice {
            separator: "",
            remaining: &[],
        })
}

/// Cut `span` of `text` at every occurrence of `separator`.
///
/// The separator itself is not part of any piece. Adjacent occurrences
/// produce empty pieces, which are kept. An empty separator yields one piece
/// per code point.
pub fn split_on_separator(text: &str, span: Span, separator: &str) -> Vec<Span> {
    let slice = span.as_str(text);

    if separator.is_empty() {
        return slice
            .char_indices()
            .map(|(i, c)| Span {
                start: span.start + i,
                end: span.start + i + c.len_utf8(),
                char_len: 1,
            })
            .collect();
    }

    let mut pieces = Vec::new();
    let mut cursor = 0;

    for (idx, _) in slice.match_indices(separator) {
        pieces.push(Span::measure(text, span.start + cursor, span.start + idx));
        cursor = idx + separator.len();
    }
    pieces.push(Span::measure(text, span.start + cursor, span.end));

    pieces
}
