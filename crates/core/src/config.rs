//! Configuration management for rechunk.
//!
//! Configuration is merged from several sources, later ones winning:
//! - Built-in defaults
//! - Environment variables
//! - Config file (`.rechunk/config.yaml`)
//! - Command-line flags
//!
//! The chunker options are kept as a raw option map here; the chunking crate
//! validates them into a typed config before any splitting starts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::logging::LogFormat;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the workspace root (contains .rechunk/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Log line format
    pub log_format: LogFormat,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Chunker option map (`chunkSize`, `separators`)
    pub chunker_options: Map<String, Value>,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    workspace: Option<WorkspaceConfig>,
    logging: Option<LoggingConfig>,
    chunker: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkspaceConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
    format: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            log_level: None,
            log_format: LogFormat::Text,
            verbose: false,
            no_color: false,
            chunker_options: Map::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, environment variables and the config file.
    ///
    /// An explicit `workspace` or `config_file` (usually from CLI flags) takes
    /// precedence over the environment:
    /// - `RECHUNK_WORKSPACE`: Override workspace path
    /// - `RECHUNK_CONFIG`: Path to config file
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use rechunk_core::config::AppConfig;
    ///
    /// let config = AppConfig::load_with(None, None).expect("Failed to load config");
    /// println!("Workspace: {:?}", config.workspace);
    /// ```
    pub fn load_with(workspace: Option<PathBuf>, config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(workspace) = workspace
            .or_else(|| std::env::var("RECHUNK_WORKSPACE").ok().map(PathBuf::from))
        {
            config.workspace = workspace;
        }

        config.config_file =
            config_file.or_else(|| std::env::var("RECHUNK_CONFIG").ok().map(PathBuf::from));

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = config
            .config_file
            .clone()
            .unwrap_or_else(|| config.workspace.join(".rechunk/config.yaml"));

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        } else if config.config_file.is_some() {
            return Err(AppError::Config(format!(
                "Config file not found: {:?}",
                config_path
            )));
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into a copy of this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
        };

        let mut result = self.clone();

        if let Some(path) = config_file.workspace.and_then(|ws| ws.path) {
            result.workspace = PathBuf::from(path);
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
            if let Some(format) = logging.format {
                result.log_format = format.parse()?;
            }
        }

        if let Some(chunker) = config_file.chunker {
            result.chunker_options.extend(chunker);
        }

        tracing::debug!("Merged config file {:?}", path);

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over the config file and environment.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        log_format: Option<LogFormat>,
        verbose: bool,
        no_color: bool,
        chunk_size: Option<u64>,
        separators: Option<Vec<String>>,
    ) -> Self {
        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if let Some(log_format) = log_format {
            self.log_format = log_format;
        }

        if verbose {
            self.verbose = true;
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        if let Some(chunk_size) = chunk_size {
            self.chunker_options
                .insert("chunkSize".to_string(), Value::from(chunk_size));
        }

        if let Some(separators) = separators {
            self.chunker_options
                .insert("separators".to_string(), Value::from(separators));
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(!config.verbose);
        assert!(!config.no_color);
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.chunker_options.is_empty());
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default().with_overrides(
            None,
            Some(LogFormat::Json),
            true,
            false,
            Some(200),
            Some(vec!["\n".to_string(), String::new()]),
        );

        assert!(config.verbose);
        assert_eq!(config.log_level, Some("debug".to_string()));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.chunker_options["chunkSize"], Value::from(200));
        assert_eq!(
            config.chunker_options["separators"],
            serde_json::json!(["\n", ""])
        );
    }

    #[test]
    fn test_load_with_explicit_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yaml");
        std::fs::write(&path, "chunker:\n  chunkSize: 42\n").unwrap();

        let config =
            AppConfig::load_with(Some(temp.path().to_path_buf()), Some(path.clone())).unwrap();
        assert_eq!(config.workspace, temp.path());
        assert_eq!(config.config_file, Some(path));
        assert_eq!(config.chunker_options["chunkSize"], Value::from(42));
    }

    #[test]
    fn test_load_with_missing_config_file() {
        let temp = TempDir::new().unwrap();
        let result = AppConfig::load_with(
            Some(temp.path().to_path_buf()),
            Some(temp.path().join("missing.yaml")),
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_merge_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(
            &path,
            "logging:\n  level: warn\n  color: false\n  format: json\nchunker:\n  chunkSize: 300\n  separators: [\"\\n\\n\", \" \"]\n",
        )
        .unwrap();

        let merged = AppConfig::default().merge_yaml(&path).unwrap();
        assert_eq!(merged.log_level, Some("warn".to_string()));
        assert!(merged.no_color);
        assert_eq!(merged.log_format, LogFormat::Json);
        assert_eq!(merged.chunker_options["chunkSize"], Value::from(300));
        assert_eq!(
            merged.chunker_options["separators"],
            serde_json::json!(["\n\n", " "])
        );
    }

    #[test]
    fn test_merge_empty_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "").unwrap();

        let merged = AppConfig::default().merge_yaml(&path).unwrap();
        assert!(merged.chunker_options.is_empty());
    }

    #[test]
    fn test_merge_invalid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "logging: [unclosed").unwrap();

        let result = AppConfig::default().merge_yaml(&path);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
