//! Split command handler.
//!
//! Splits one file, or stdin, and prints the chunks.

use clap::Args;
use rechunk_chunking::ChunkPipeline;
use rechunk_core::{config::AppConfig, AppResult};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

use super::{resolve_chunker_config, to_pretty_json};

/// Split a single file (or stdin) into chunks
#[derive(Args, Debug)]
pub struct SplitCommand {
    /// File to split; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Output chunks as JSON
    #[arg(long)]
    pub json: bool,
}

impl SplitCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let chunker = resolve_chunker_config(config)?;
        let pipeline = ChunkPipeline::new(&chunker)?;

        let text = self.read_input().await?;
        tracing::info!(
            "Splitting {} chars with chunk size {}",
            text.chars().count(),
            chunker.chunk_size
        );

        let chunks = pipeline.process(&text);

        if self.json {
            println!("{}", to_pretty_json(&chunks)?);
        } else {
            for chunk in &chunks {
                println!(
                    "--- chunk {} ({} chars) ---",
                    chunk.chunk_id,
                    chunk.content.chars().count()
                );
                println!("{}", chunk.content);
            }
        }

        Ok(())
    }

    async fn read_input(&self) -> AppResult<String> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => {
                tracing::debug!("Reading {:?}", path);
                Ok(tokio::fs::read_to_string(path).await?)
            }
            _ => {
                tracing::debug!("Reading stdin");
                let mut text = String::new();
                tokio::io::stdin().read_to_string(&mut text).await?;
                Ok(text)
            }
        }
    }
}
