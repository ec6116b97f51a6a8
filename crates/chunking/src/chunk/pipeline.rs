//! Chunking pipeline: splitter output to chunk records.

use super::splitters::{ChunkSplitter, RecursiveSplitter};
use crate::config::ChunkerConfig;
use crate::types::Chunk;
use rechunk_core::AppResult;

/// Turns document text into numbered chunk records.
pub struct ChunkPipeline {
    splitter: Box<dyn ChunkSplitter>,
}

impl std::fmt::Debug for ChunkPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkPipeline")
            .field("splitter", &self.splitter.name())
            .finish()
    }
}

impl ChunkPipeline {
    /// Create a pipeline backed by a recursive splitter.
    ///
    /// The configuration is validated here, before any text is split.
    pub fn new(config: &ChunkerConfig) -> AppResult<Self> {
        Ok(Self::with_splitter(Box::new(RecursiveSplitter::from_config(
            config,
        )?)))
    }

    /// Create a pipeline around any splitter.
    pub fn with_splitter(splitter: Box<dyn ChunkSplitter>) -> Self {
        Self { splitter }
    }

    /// Split text and number the fragments from 0.
    pub fn process(&self, text: &str) -> Vec<Chunk> {
        let chunks: Vec<Chunk> = self
            .splitter
            .split_spans(text)
            .into_iter()
            .enumerate()
            .map(|(position, span)| Chunk::new(position, span.as_str(text)))
            .collect();

        tracing::debug!(
            "Chunking complete: {} chunks created from {} bytes ({} splitter)",
            chunks.len(),
            text.len(),
            self.splitter.name()
        );

        chunks
    }
}
