//! Recursive text chunking.
//!
//! Splits document text into size-bounded fragments for embedding, preferring
//! paragraph, line and word boundaries over arbitrary character cuts.

pub mod batch;
pub mod chunk;
pub mod config;
pub mod types;


// Re-export commonly used types
pub use batch::{chunk_documents, chunk_documents_parallel};
pub use chunk::{split_text, ChunkPipeline, ChunkSplitter, RecursiveSplitter, Span};
pub use config::{ChunkerConfig, ChunkerDescriptor};
pub use types::{BatchStats, Chunk, Document};
