//! Rechunk CLI
//!
//! Main entry point for the rechunk command-line tool.
//! Splits documents into size-bounded chunks for embedding pipelines.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BatchCommand, InfoCommand, InitCommand, SplitCommand};
use rechunk_core::{config::AppConfig, logging, logging::LogFormat, AppResult};
use std::path::PathBuf;

/// Rechunk - recursive separator-driven text chunking
#[derive(Parser, Debug)]
#[command(name = "rechunk")]
#[command(about = "Split documents into size-bounded chunks", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "RECHUNK_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "RECHUNK_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// Maximum chunk size in characters
    #[arg(long, global = true, env = "RECHUNK_CHUNK_SIZE")]
    chunk_size: Option<u64>,

    /// Separator to split on, coarsest first; repeat for more ("\n", "。", "")
    #[arg(
        short,
        long = "separator",
        global = true,
        allow_hyphen_values = true,
        value_parser = commands::parse_separator
    )]
    separators: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a single file (or stdin) into chunks
    Split(SplitCommand),

    /// Chunk a set of documents (JSON array or directory)
    Batch(BatchCommand),

    /// Show the chunker description and effective options
    Info(InfoCommand),

    /// Write the effective chunker options to .rechunk/chunker.yaml
    Init(InitCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load configuration from environment and config file
    let config = AppConfig::load_with(cli.workspace, cli.config)?;

    // Apply CLI overrides
    let separators = (!cli.separators.is_empty()).then_some(cli.separators);
    let config = config.with_overrides(
        cli.log_level,
        cli.log_format,
        cli.verbose,
        cli.no_color,
        cli.chunk_size,
        separators,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color, config.log_format)?;

    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Chunker options: {:?}", config.chunker_options);

    // Emit command span
    let command_name = match &cli.command {
        Commands::Split(_) => "split",
        Commands::Batch(_) => "batch",
        Commands::Info(_) => "info",
        Commands::Init(_) => "init",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Split(cmd) => cmd.execute(&config).await,
        Commands::Batch(cmd) => cmd.execute(&config).await,
        Commands::Info(cmd) => cmd.execute(&config).await,
        Commands::Init(cmd) => cmd.execute(&config).await,
    };

    // Log completion
    match &result {
        Ok(_) => tracing::debug!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
