//! Splitter implementations wrapper module.

mod recursive;

pub use recursive::{split_text, RecursiveSplitter};

use super::Span;

/// Trait for text splitters.
///
/// Splitting a validated configuration never fails, so splitters hand back
/// spans directly.
pub trait ChunkSplitter: Send + Sync {
    /// Split `text` into ordered, non-overlapping fragment spans.
    fn split_spans(&self, text: &str) -> Vec<Span>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
