//! Init command handler.

use clap::Args;
use rechunk_chunking::config::{get_config_path, save_config};
use rechunk_core::{config::AppConfig, AppError, AppResult};

use super::resolve_chunker_config;

/// Write the effective chunker options to .rechunk/chunker.yaml
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Overwrite an existing chunker.yaml
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let path = get_config_path(&config.workspace);
        if path.exists() && !self.force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let chunker = resolve_chunker_config(config)?;
        save_config(&config.workspace, &chunker)?;

        println!("Wrote chunker config to {}", path.display());
        Ok(())
    }
}
