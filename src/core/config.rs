//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.zerohero/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ZeroHeroConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub syntax_theme: Option<String>,
    pub code_language: Option<String>,
    pub code_label: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "zerohero.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";
pub const DEFAULT_CODE_LANGUAGE: &str = "js";
pub const DEFAULT_CODE_LABEL: &str = "JavaScript";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means the bundled catalog.
    pub catalog: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub syntax_theme: String,
    pub code_language: String,
    pub code_label: String,
}

/// Settings that arrive as command-line flags.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog: Option<PathBuf>,
    pub verbose: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.zerohero/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".zerohero").join("config.toml"))
}

/// Where the config came from.
///
/// Config is read before the logger starts (the log file path is a config
/// setting), so loading records its outcome here and the caller logs it
/// once logging is up.
#[derive(Debug)]
pub enum ConfigSource {
    /// Read from an existing file.
    File(PathBuf),
    /// No file existed; a commented default was written.
    Generated(PathBuf),
    /// No file existed and writing the default failed.
    GenerateFailed { path: PathBuf, error: std::io::Error },
    /// No home directory, so no config file at all.
    NoHomeDir,
}

impl ConfigSource {
    /// Log the outcome. Call after the logger is initialized.
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed { path, error } => warn!(
                "No config file found, failed to write default at {}: {}",
                path.display(),
                error
            ),
            ConfigSource::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `~/.zerohero/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ZeroHeroConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<(ZeroHeroConfig, ConfigSource), ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok((ZeroHeroConfig::default(), ConfigSource::NoHomeDir)),
    }
}

fn load_config_from(path: &Path) -> Result<(ZeroHeroConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        let source = match generate_default_config(path) {
            Ok(()) => ConfigSource::Generated(path.to_path_buf()),
            Err(error) => ConfigSource::GenerateFailed {
                path: path.to_path_buf(),
                error,
            },
        };
        return Ok((ZeroHeroConfig::default(), source));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ZeroHeroConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# zerohero configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog = "/path/to/catalog.toml"  # Or .json; omit for the bundled course
# log_file = "zerohero.log"
# log_level = "info"                 # "error", "warn", "info", "debug", "trace"

# [display]
# syntax_theme = "base16-ocean.dark" # Any syntect default theme
# code_language = "js"               # Syntax used to highlight code samples
# code_label = "JavaScript"          # Label shown on the code panel
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ZeroHeroConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Catalog: CLI → env → config → bundled
    let catalog = cli
        .catalog
        .clone()
        .or_else(|| std::env::var_os("ZEROHERO_CATALOG").map(PathBuf::from))
        .or_else(|| config.general.catalog.clone());

    // Log level: --verbose → config → default
    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config
            .general
            .log_level
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    };

    // Theme: env → config → default
    let syntax_theme = std::env::var("ZEROHERO_THEME")
        .ok()
        .or_else(|| config.display.syntax_theme.clone())
        .unwrap_or_else(|| DEFAULT_SYNTAX_THEME.to_string());

    ResolvedConfig {
        catalog,
        log_file: config
            .general
            .log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        log_level,
        syntax_theme,
        code_language: config
            .display
            .code_language
            .clone()
            .unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_string()),
        code_label: config
            .display
            .code_label
            .clone()
            .unwrap_or_else(|| DEFAULT_CODE_LABEL.to_string()),
    }
}
