//! Chunker configuration management.

use rechunk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Option key holding the chunk size.
pub const CHUNK_SIZE_KEY: &str = "chunkSize";

/// Option key holding the separator list.
pub const SEPARATORS_KEY: &str = "separators";

/// Chunk size used when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Separators used when none are configured, coarsest first.
///
/// Besides paragraph, line and word breaks this covers zero-width spaces and
/// the fullwidth/ideographic punctuation used in CJK text, ending with the
/// character-level fallback.
pub const DEFAULT_SEPARATORS: &[&str] = &[
    "\n\n", "\n", " ", ".", ",", "\u{200b}", "\u{ff0c}", "\u{3001}", "\u{ff0e}", "\u{3002}", "",
];

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

/// The default separator list as owned strings.
pub fn default_separators() -> Vec<String> {
    DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect()
}

/// Configuration for the recursive chunker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkerConfig {
    /// Maximum fragment length in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Candidate separators, coarsest first; `""` means split between characters
    #[serde(default = "default_separators")]
    pub separators: Vec<String>,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            separators: default_separators(),
        }
    }
}

impl ChunkerConfig {
    /// Build a config from an option map, filling gaps with defaults.
    pub fn from_options(options: &Map<String, Value>) -> AppResult<Self> {
        Self::default().with_options(options)
    }

    /// Overlay recognized keys of an option map onto this config.
    ///
    /// `chunkSize` accepts a positive integer or a string holding one.
    /// `separators` must be a list of strings. A `null` value leaves the
    /// current setting alone; unknown keys are ignored with a warning.
    pub fn with_options(mut self, options: &Map<String, Value>) -> AppResult<Self> {
        for (key, value) in options {
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                CHUNK_SIZE_KEY => self.chunk_size = parse_chunk_size(value)?,
                SEPARATORS_KEY => self.separators = parse_separators(value)?,
                other => tracing::warn!("Ignoring unknown chunker option '{}'", other),
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Check the config before any splitting happens.
    pub fn validate(&self) -> AppResult<()> {
        if self.chunk_size == 0 {
            return Err(AppError::Config(
                "chunkSize must be a positive integer, got 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_chunk_size(value: &Value) -> AppResult<usize> {
    let parsed = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    match parsed.and_then(|n| usize::try_from(n).ok()) {
        Some(size) if size > 0 => Ok(size),
        _ => Err(AppError::Config(format!(
            "{} must be a positive integer, got {}",
            CHUNK_SIZE_KEY, value
        ))),
    }
}

fn parse_separators(value: &Value) -> AppResult<Vec<String>> {
    let entries = value.as_array().ok_or_else(|| {
        AppError::Config(format!(
            "{} must be a list of strings, got {}",
            SEPARATORS_KEY, value
        ))
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry.as_str().map(str::to_string).ok_or_else(|| {
                AppError::Config(format!(
                    "{}[{}] must be a string, got {}",
                    SEPARATORS_KEY, i, entry
                ))
            })
        })
        .collect()
}

/// Load the chunker configuration of a workspace.
///
/// Reads `.rechunk/chunker.yaml` if it exists, otherwise returns defaults.
pub fn load_config(workspace: &Path) -> AppResult<ChunkerConfig> {
    let config_path = get_config_path(workspace);

    if !config_path.exists() {
        tracing::debug!("Using default chunker config (no file at {:?})", config_path);
        return Ok(ChunkerConfig::default());
    }

    let content = fs::read_to_string(&config_path).map_err(|e| {
        AppError::Config(format!("Failed to read config at {:?}: {}", config_path, e))
    })?;

    let config: ChunkerConfig = serde_yaml::from_str(&content).map_err(|e| {
        AppError::Config(format!("Failed to parse config at {:?}: {}", config_path, e))
    })?;
    config.validate()?;

    tracing::debug!("Loaded chunker config from {:?}", config_path);
    Ok(config)
}

/// Save the chunker configuration of a workspace.
pub fn save_config(workspace: &Path, config: &ChunkerConfig) -> AppResult<()> {
    config.validate()?;
    let config_path = get_config_path(workspace);

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let yaml = serde_yaml::to_string(config)?;
    fs::write(&config_path, yaml)?;

    tracing::debug!("Saved chunker config to {:?}", config_path);
    Ok(())
}

/// Get the path to a workspace's chunker config file.
pub fn get_config_path(workspace: &Path) -> PathBuf {
    workspace.join(".rechunk").join("chunker.yaml")
}

/// Kind of a user-facing chunker option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// A single number
    Number,
    /// Any subset of `values`, in order
    Multi,
}

/// A user-facing chunker option, as shown by hosts that list chunkers.
#[derive(Debug, Clone, Serialize)]
pub struct OptionSchema {
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub value: Value,
    pub description: String,
    pub values: Vec<String>,
}

/// Name, description and option schema of the recursive chunker.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkerDescriptor {
    pub name: String,
    pub description: String,
    pub config: BTreeMap<String, OptionSchema>,
}

/// Describe the recursive chunker with `config` as the current option values.
pub fn describe(config: &ChunkerConfig) -> ChunkerDescriptor {
    let mut options = BTreeMap::new();
    options.insert(
        "Chunk Size".to_string(),
        OptionSchema {
            kind: OptionKind::Number,
            value: Value::from(config.chunk_size),
            description: "Maximum number of characters per chunk".to_string(),
            values: Vec::new(),
        },
    );
    options.insert(
        "Separators".to_string(),
        OptionSchema {
            kind: OptionKind::Multi,
            value: Value::from(config.separators.clone()),
            description: "Separators to split on, coarsest first".to_string(),
            values: default_separators(),
        },
    );

    ChunkerDescriptor {
        name: "Recursive".to_string(),
        description: "Split documents on a prioritized list of separators, recursing into oversized pieces".to_string(),
        config: options,
    }
}
