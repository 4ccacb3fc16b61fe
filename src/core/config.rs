//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atlas/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";
pub const DEFAULT_LOG_FILE: &str = "atlas.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Startup Notes
// ============================================================================

/// Log lines produced while loading config, before the logger exists.
/// `main` replays them once the file logger is installed.
#[derive(Debug, Default)]
pub struct StartupNotes {
    entries: Vec<(Level, String)>,
}

impl StartupNotes {
    fn push(&mut self, level: Level, message: String) {
        self.entries.push((level, message));
    }

    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Emit every collected line through the installed logger, in order.
    pub fn replay(self) {
        for (level, message) in self.entries {
            log::log!(level, "{}", message);
        }
    }
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

/// Returns the path to `~/.atlas/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atlas").join("config.toml"))
}

/// Load config from `~/.atlas/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtlasConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notes: &mut StartupNotes) -> Result<AtlasConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            notes.push(
                Level::Warn,
                "Could not determine home directory, using default config".to_string(),
            );
            return Ok(AtlasConfig::default());
        }
    };

    if !path.exists() {
        notes.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(&path, notes);
        return Ok(AtlasConfig::default());
    }

    load_config_from(&path, notes)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path, notes: &mut StartupNotes) -> Result<AtlasConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AtlasConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notes.push(Level::Info, format!("Loaded config from {}", path.display()));
    notes.push(Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notes: &mut StartupNotes) {
    let default_content = r#"# Atlas Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [source]
# endpoint = "https://restcountries.com/v3.1/all"   # Or set ATLAS_ENDPOINT

# [logging]
# file = "atlas.log"
# level = "debug"                                    # Or set ATLAS_LOG_LEVEL
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        notes.push(Level::Warn, format!("Failed to create config directory: {e}"));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        notes.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AtlasConfig, cli: &CliOverrides, notes: &mut StartupNotes) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok(), notes)
}

/// `resolve` with an injectable environment lookup.
fn resolve_with_env(
    config: &AtlasConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    notes: &mut StartupNotes,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env("ATLAS_ENDPOINT"))
        .or_else(|| config.source.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: env → config → default
    let log_level = env("ATLAS_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .and_then(|level| parse_level(&level, notes))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        endpoint,
        log_file,
        log_level,
    }
}

fn parse_level(level: &str, notes: &mut StartupNotes) -> Option<LevelFilter> {
    match level.parse() {
        Ok(filter) => Some(filter),
        Err(_) => {
            notes.push(Level::Warn, format!("Unknown log level '{level}', using default"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = AtlasConfig::default();
        assert!(config.source.endpoint.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&AtlasConfig::default(), &CliOverrides::default(), no_env, &mut StartupNotes::default());
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AtlasConfig {
            source: SourceConfig {
                endpoint: Some("http://localhost:8080/all".to_string()),
            },
            logging: LoggingConfig {
                file: Some("/tmp/atlas-test.log".to_string()),
                level: Some("warn".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env, &mut StartupNotes::default());
        assert_eq!(resolved.endpoint, "http://localhost:8080/all");
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/atlas-test.log"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = AtlasConfig {
            source: SourceConfig {
                endpoint: Some("http://from-config".to_string()),
            },
            logging: LoggingConfig {
                file: None,
                level: Some("warn".to_string()),
            },
        };
        let env = |key: &str| match key {
            "ATLAS_ENDPOINT" => Some("http://from-env".to_string()),
            "ATLAS_LOG_LEVEL" => Some("trace".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env, &mut StartupNotes::default());
        assert_eq!(resolved.endpoint, "http://from-env");
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_cli_endpoint_wins() {
        let cli = CliOverrides {
            endpoint: Some("http://from-cli".to_string()),
            log_file: Some(PathBuf::from("cli.log")),
        };
        let env = |key: &str| (key == "ATLAS_ENDPOINT").then(|| "http://from-env".to_string());
        let resolved = resolve_with_env(&AtlasConfig::default(), &cli, env, &mut StartupNotes::default());
        assert_eq!(resolved.endpoint, "http://from-cli");
        assert_eq!(resolved.log_file, PathBuf::from("cli.log"));
    }

    #[test]
    fn test_unknown_level_falls_back_to_default() {
        let config = AtlasConfig {
            logging: LoggingConfig {
                file: None,
                level: Some("loud".to_string()),
            },
            ..Default::default()
        };
        let mut notes = StartupNotes::default();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env, &mut notes);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        // Held back until the logger is installed
        assert_eq!(notes.entries().len(), 1);
        let (level, message) = &notes.entries()[0];
        assert_eq!(*level, Level::Warn);
        assert!(message.contains("'loud'"));
    }

    #[test]
    fn test_loading_a_file_records_startup_notes() {
        let path = std::env::temp_dir().join(format!("atlas-good-config-{}.toml", std::process::id()));
        fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();
        let mut notes = StartupNotes::default();
        let result = load_config_from(&path, &mut notes);
        let _ = fs::remove_file(&path);

        assert_eq!(result.unwrap().logging.level.as_deref(), Some("info"));
        assert!(
            notes
                .entries()
                .iter()
                .any(|(level, message)| *level == Level::Info && message.starts_with("Loaded config from"))
        );
    }

    #[test]
    fn test_generate_default_config_failure_is_noted() {
        // A regular file as the parent makes the directory creation fail
        let blocker = std::env::temp_dir().join(format!("atlas-blocker-{}", std::process::id()));
        fs::write(&blocker, "").unwrap();
        let mut notes = StartupNotes::default();
        generate_default_config(&blocker.join("config.toml"), &mut notes);
        let _ = fs::remove_file(&blocker);

        assert_eq!(notes.entries().len(), 1);
        assert_eq!(notes.entries()[0].0, Level::Warn);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[source]
endpoint = "http://127.0.0.1:9000/countries"
"#;
        let config: AtlasConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.source.endpoint.as_deref(),
            Some("http://127.0.0.1:9000/countries")
        );
        assert!(config.logging.file.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let path = std::env::temp_dir().join(format!("atlas-bad-config-{}.toml", std::process::id()));
        fs::write(&path, "[source\nendpoint = ").unwrap();
        let result = load_config_from(&path, &mut StartupNotes::default());
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
