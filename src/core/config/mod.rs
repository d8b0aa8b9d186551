//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! acyclic has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: `acyclic.toml` in the working directory
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$ACYCLIC_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/acyclic/config.toml`
//! 3. `~/.acyclic/config.toml`
//!
//! `config set` writes to the first of these that loading would read, falling
//! back to `~/.acyclic/config.toml`.
//!
//! # Example
//!
//! ```no_run
//! use acyclic::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/project"))).unwrap();
//! println!("strict: {}", config.strict());
//! ```

pub mod schema;

pub use schema::{ConfigFile, LoadDefaults, RenderDefaults, KEYS};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the project-scoped config.
pub const PROJECT_FILE: &str = "acyclic.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unknown config key '{0}'")]
    UnknownKey(String),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence automatically: project overrides global.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: ConfigFile,
    /// Project configuration (if present)
    pub project: Option<ConfigFile>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also loads `acyclic.toml` from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(project_dir: Option<&Path>) -> Result<Config, ConfigError> {
        let global_path = Self::find_global();
        Self::load_from(global_path.as_deref(), project_dir)
    }

    /// Load configuration from an explicit global file and project directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<Config, ConfigError> {
        let (global, global_path) = match global_path {
            Some(path) if path.exists() => (Self::read_config(path)?, Some(path.to_path_buf())),
            _ => (ConfigFile::default(), None),
        };

        let (project, project_path) = match project_dir.map(|dir| dir.join(PROJECT_FILE)) {
            Some(path) if path.exists() => (Some(Self::read_config(&path)?), Some(path)),
            _ => (None, None),
        };

        Ok(Config {
            global,
            project,
            global_path,
            project_path,
        })
    }

    /// Locate the global config file, if one exists.
    fn find_global() -> Option<PathBuf> {
        // 1. Check $ACYCLIC_CONFIG
        if let Ok(path) = std::env::var("ACYCLIC_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/acyclic/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("acyclic/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.acyclic/config.toml
        let path = dirs::home_dir()?.join(".acyclic/config.toml");
        path.exists().then_some(path)
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the path `config set` writes to.
    ///
    /// This is the file loading would read: `$ACYCLIC_CONFIG` if set, then an
    /// existing `$XDG_CONFIG_HOME/acyclic/config.toml`, otherwise
    /// `~/.acyclic/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var("ACYCLIC_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("acyclic/config.toml");
            if path.exists() {
                return Ok(path);
            }
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".acyclic/config.toml"))
    }

    /// Write a config file atomically.
    ///
    /// Creates parent directories if needed, writes to a temp file in the
    /// same directory, then renames over the target.
    pub fn write_atomic(path: &Path, config: &ConfigFile) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Resolve a dotted key across scopes.
    ///
    /// Returns `None` when neither scope sets it.
    pub fn get(&self, key: &str) -> Result<Option<bool>, ConfigError> {
        if let Some(project) = &self.project {
            if let Some(value) = project.get(key)? {
                return Ok(Some(value));
            }
        }
        self.global.get(key)
    }

    /// Whether rendering expands shared subtrees every time.
    ///
    /// Defaults to `false` if not configured.
    pub fn include_repeats(&self) -> bool {
        self.get("render.include_repeats")
            .ok()
            .flatten()
            .unwrap_or(false)
    }

    /// Whether loading aborts on the first rejected statement.
    ///
    /// Defaults to `false` if not configured.
    pub fn strict(&self) -> bool {
        self.get("load.strict").ok().flatten().unwrap_or(false)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
