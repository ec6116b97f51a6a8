//! Batch command handler.
//!
//! Chunks a JSON array of documents or every file under a directory.

use clap::Args;
use rechunk_chunking::{chunk_documents, chunk_documents_parallel, ChunkPipeline, Document};
use rechunk_core::{config::AppConfig, AppError, AppResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{resolve_chunker_config, to_pretty_json};

/// Chunk a set of documents (JSON array or directory)
#[derive(Args, Debug)]
pub struct BatchCommand {
    /// JSON file holding an array of documents, or a directory of text files
    pub input: PathBuf,

    /// Write the chunked documents here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Chunk documents on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Print statistics as JSON (with --output)
    #[arg(long)]
    pub json: bool,
}

impl BatchCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let chunker = resolve_chunker_config(config)?;
        let pipeline = ChunkPipeline::new(&chunker)?;

        let input = self.input.clone();
        let parallel = self.parallel;

        let (documents, stats) = tokio::task::spawn_blocking(move || -> AppResult<_> {
            let mut documents = load_documents(&input)?;
            let stats = if parallel {
                chunk_documents_parallel(&mut documents, &pipeline)
            } else {
                chunk_documents(&mut documents, &pipeline)
            };
            Ok((documents, stats))
        })
        .await
        .map_err(worker_failed)??;

        let rendered = to_pretty_json(&documents)?;

        match &self.output {
            Some(path) => {
                tokio::fs::write(path, rendered).await?;
                if self.json {
                    println!("{}", to_pretty_json(&stats)?);
                } else {
                    println!(
                        "Chunked {} documents ({} skipped, {} chunks) into {}",
                        stats.documents_chunked,
                        stats.documents_skipped,
                        stats.chunks_created,
                        path.display()
                    );
                }
            }
            None => println!("{}", rendered),
        }

        Ok(())
    }
}

fn worker_failed(err: tokio::task::JoinError) -> AppError {
    AppError::Chunking(format!("Batch worker failed: {}", err))
}

/// Load documents from a JSON array file or a directory tree.
fn load_documents(input: &Path) -> AppResult<Vec<Document>> {
    if input.is_dir() {
        return load_directory(input);
    }

    let content = std::fs::read_to_string(input)?;
    let documents: Vec<Document> = serde_json::from_str(&content)?;
    tracing::debug!("Loaded {} documents from {:?}", documents.len(), input);
    Ok(documents)
}

/// Turn every UTF-8 file under `root` into a document titled by its relative path.
fn load_directory(root: &Path) -> AppResult<Vec<Document>> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Skipping {:?}: {}", path, e);
                continue;
            }
        };

        let title = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        documents.push(Document::new(title, content));
    }

    tracing::debug!("Loaded {} documents from {:?}", documents.len(), root);
    Ok(documents)
}
