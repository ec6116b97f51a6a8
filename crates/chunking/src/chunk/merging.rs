//! Greedy packing of separator-split pieces into fragments.

use super::Span;

/// Pack consecutive `pieces` into fragments of at most `chunk_size` chars.
///
/// Pieces are adjacent regions of the same text separated by exactly one
/// separator of `separator_len` chars, so a merged fragment is itself a
/// contiguous span with the separators between its pieces included.
///
/// A piece larger than `chunk_size` ends up alone in its fragment; the
/// caller decides whether to split it further. Empty pieces join a
/// neighbouring fragment only while it stays within `chunk_size`. Otherwise
/// the separator run they stand for becomes a fragment of its own, so real
/// content is never pushed over the limit by separator text.
pub fn merge_pieces(pieces: &[Span], separator_len: usize, chunk_size: usize) -> Vec<Span> {
    let mut merged = Vec::new();
    let mut current: Option<Running> = None;

    for &piece in pieces {
        let Some(running) = current else {
            current = Some(Running::start(piece));
            continue;
        };

        let prospective = running.span.char_len + separator_len + piece.char_len;
        current = Some(if prospective <= chunk_size {
            running.join(piece, separator_len)
        } else if !running.blank {
            merged.push(running.span);
            Running::start(piece)
        } else if !running.span.is_empty() {
            // Separator run that fits neither side
            merged.push(running.span);
            Running::start(piece)
        } else if piece.is_empty() {
            // A separator longer than the limit, between two empty pieces
            running.join(piece, separator_len)
        } else {
            merged.push(running.span.through(piece.start, separator_len));
            Running::start(piece)
        });
    }

    match current {
        Some(running) if !running.span.is_empty() => merged.push(running.span),
        Some(trailing) => {
            if let Some(&last) = merged.last() {
                merged.push(Span {
                    start: last.end,
                    end: trailing.span.end,
                    char_len: separator_len,
                });
            }
        }
        None => {}
    }

    merged
}

/// The fragment being packed, and whether it holds only empty pieces.
#[derive(Clone, Copy)]
struct Running {
    span: Span,
    blank: bool,
}

impl Running {
    fn start(piece: Span) -> Self {
        Self {
            span: piece,
            blank: piece.is_empty(),
        }
    }

    fn join(self, piece: Span, separator_len: usize) -> Self {
        Self {
            span: self.span.join(piece, separator_len),
            blank: self.blank && piece.is_empty(),
        }
    }
}
