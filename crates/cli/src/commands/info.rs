//! Info command handler.

use clap::Args;
use rechunk_chunking::config::{describe, get_config_path};
use rechunk_core::{config::AppConfig, AppResult};

use super::{resolve_chunker_config, to_pretty_json};

/// Show the chunker description and effective options
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl InfoCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let chunker = resolve_chunker_config(config)?;
        let descriptor = describe(&chunker);

        if self.json {
            println!("{}", to_pretty_json(&descriptor)?);
            return Ok(());
        }

        println!("Chunker: {}", descriptor.name);
        println!("  {}", descriptor.description);
        println!("  Chunk size: {}", chunker.chunk_size);
        println!("  Separators (coarsest first):");
        for separator in &chunker.separators {
            println!("    {:?}", separator);
        }
        println!("  Config file: {}", get_config_path(&config.workspace).display());

        Ok(())
    }
}
