//! Document and chunk records exchanged with the host application.

use serde::{Deserialize, Serialize};

fn new_document_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A source document and the chunks cut from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier (UUID v4 when not supplied)
    #[serde(default = "new_document_id")]
    pub id: String,

    /// Display title, usually the file name
    #[serde(default)]
    pub title: String,

    /// Full text content
    pub content: String,

    /// Chunks in source order; non-empty means already chunked
    #[serde(default)]
    pub chunks: Vec<Chunk>,
}

impl Document {
    /// Create an unchunked document with a fresh id.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: new_document_id(),
            title: title.into(),
            content: content.into(),
            chunks: Vec::new(),
        }
    }

    pub fn is_chunked(&self) -> bool {
        !self.chunks.is_empty()
    }
}

/// One fragment of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position in the document (0-indexed)
    pub chunk_id: usize,

    /// Fragment text
    pub content: String,

    /// Start offset; not computed by the splitter
    pub start_i: Option<usize>,

    /// End offset; not computed by the splitter
    pub end_i: Option<usize>,

    /// Fragment text without overlap (same as `content`, chunks never overlap)
    pub content_without_overlap: String,
}

impl Chunk {
    /// Create a chunk with placeholder offsets.
    pub fn new(chunk_id: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            chunk_id,
            content_without_overlap: content.clone(),
            content,
            start_i: None,
            end_i: None,
        }
    }
}

/// Statistics from a batch chunking run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Documents looked at
    pub documents_seen: usize,

    /// Documents that received chunks in this run
    pub documents_chunked: usize,

    /// Documents left alone because they were already chunked
    pub documents_skipped: usize,

    /// Chunks created in this run
    pub chunks_created: usize,
}
