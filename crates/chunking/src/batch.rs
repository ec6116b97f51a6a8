//! Batch chunking over document sets.
//!
//! Documents that already carry chunks are skipped, so running a batch twice
//! leaves the result of the first run untouched.

use crate::chunk::ChunkPipeline;
use crate::types::{BatchStats, Document};
use rayon::prelude::*;
use std::time::Instant;

/// What happened to one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Skipped,
    Chunked(usize),
}

fn chunk_document(document: &mut Document, pipeline: &ChunkPipeline) -> Outcome {
    if document.is_chunked() {
        tracing::debug!(
            "Skipping document '{}': already has {} chunks",
            document.id,
            document.chunks.len()
        );
        return Outcome::Skipped;
    }

    document.chunks = pipeline.process(&document.content);
    Outcome::Chunked(document.chunks.len())
}

fn tally(outcomes: impl IntoIterator<Item = Outcome>) -> BatchStats {
    outcomes
        .into_iter()
        .fold(BatchStats::default(), |mut stats, outcome| {
            stats.documents_seen += 1;
            match outcome {
                Outcome::Skipped => stats.documents_skipped += 1,
                Outcome::Chunked(count) => {
                    stats.documents_chunked += 1;
                    stats.chunks_created += count;
                }
            }
            stats
        })
}

/// Chunk every unchunked document in order.
pub fn chunk_documents(documents: &mut [Document], pipeline: &ChunkPipeline) -> BatchStats {
    let start = Instant::now();

    let stats = tally(
        documents
            .iter_mut()
            .map(|document| chunk_document(document, pipeline)),
    );

    log_stats(&stats, start);
    stats
}

/// Chunk every unchunked document, spreading documents over the rayon pool.
///
/// Produces the same chunks and stats as [`chunk_documents`].
pub fn chunk_documents_parallel(
    documents: &mut [Document],
    pipeline: &ChunkPipeline,
) -> BatchStats {
    let start = Instant::now();

    let outcomes: Vec<Outcome> = documents
        .par_iter_mut()
        .map(|document| chunk_document(document, pipeline))
        .collect();
    let stats = tally(outcomes);

    log_stats(&stats, start);
    stats
}

fn log_stats(stats: &BatchStats, start: Instant) {
    tracing::info!(
        "Chunked {} of {} documents ({} skipped, {} chunks) in {:.2}s",
        stats.documents_chunked,
        stats.documents_seen,
        stats.documents_skipped,
        stats.chunks_created,
        start.elapsed().as_secs_f64()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChunkerConfig;
    use crate::types::Chunk;

    fn pipeline(chunk_size: usize) -> ChunkPipeline {
        ChunkPipeline::new(&ChunkerConfig {
            chunk_size,
            separators: vec!["\n\n".into(), "\n".into(), " ".into(), "".into()],
        })
        .unwrap()
    }

    fn documents() -> Vec<Document> {
        vec![
            Document::new("a", "first paragraph\n\nsecond paragraph"),
            Document::new("b", "short"),
            Document::new("c", ""),
        ]
    }

    #[test]
    fn test_chunk_documents() {
        let mut docs = documents();
        let stats = chunk_documents(&mut docs, &pipeline(20));

        assert_eq!(stats.documents_seen, 3);
        assert_eq!(stats.documents_chunked, 3);
        assert_eq!(stats.documents_skipped, 0);
        assert_eq!(stats.chunks_created, 3);

        let first: Vec<&str> = docs[0].chunks.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(first, vec!["first paragraph", "second paragraph"]);
        assert_eq!(docs[0].chunks[1].chunk_id, 1);
        assert_eq!(docs[1].chunks, vec![Chunk::new(0, "short")]);
        assert!(docs[2].chunks.is_empty());
    }

    #[test]
    fn test_skips_already_chunked() {
        let mut docs = documents();
        docs[0].chunks.push(Chunk::new(0, "precomputed"));

        let stats = chunk_documents(&mut docs, &pipeline(20));
        assert_eq!(stats.documents_skipped, 1);
        assert_eq!(docs[0].chunks, vec![Chunk::new(0, "precomputed")]);
    }

    #[test]
    fn test_second_run_is_noop() {
        let mut docs = documents();
        let pipeline = pipeline(8);

        chunk_documents(&mut docs, &pipeline);
        let after_first = docs.clone();

        let stats = chunk_documents(&mut docs, &pipeline);
        assert_eq!(docs, after_first);
        assert_eq!(stats.chunks_created, 0);
        // An empty document yields no chunks, so it is chunked again (to nothing).
        assert_eq!(stats.documents_skipped, 2);
        assert_eq!(stats.documents_chunked, 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "lorem ipsum dolor sit amet\n".repeat(40);
        let mut sequential: Vec<Document> = (0..16)
            .map(|i| Document::new(format!("doc-{}", i), text.repeat(i % 4 + 1)))
            .collect();
        let mut parallel = sequential.clone();
        let pipeline = pipeline(64);

        let seq_stats = chunk_documents(&mut sequential, &pipeline);
        let par_stats = chunk_documents_parallel(&mut parallel, &pipeline);

        assert_eq!(seq_stats, par_stats);
        assert_eq!(sequential, parallel);
    }
}
