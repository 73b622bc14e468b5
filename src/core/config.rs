//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.post-search/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PostSearchConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub posts_url: String,
    pub log_level: LevelFilter,
}

/// Values supplied on the command line. `None` = flag not given.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub url: Option<&'a str>,
    pub log_level: Option<&'a str>,
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

/// Returns the path to `~/.post-search/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".post-search").join("config.toml"))
}

/// Load config from `~/.post-search/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PostSearchConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PostSearchConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PostSearchConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PostSearchConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<PostSearchConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PostSearchConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# post-search configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"               # "off", "error", "warn", "info", "debug", "trace"

# [source]
# url = "https://jsonplaceholder.typicode.com/posts"   # Or set POST_SEARCH_URL
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PostSearchConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &PostSearchConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // URL: CLI → env → config → default
    let posts_url = cli
        .url
        .map(|s| s.to_string())
        .or_else(|| env("POST_SEARCH_URL"))
        .or_else(|| config.source.url.clone())
        .unwrap_or_else(|| DEFAULT_POSTS_URL.to_string());

    // Log level: CLI → env → config → default. Unparseable values fall through.
    let log_level = cli
        .log_level
        .map(|s| s.to_string())
        .into_iter()
        .chain(env("POST_SEARCH_LOG_LEVEL"))
        .chain(config.general.log_level.clone())
        .find_map(|raw| parse_level(&raw))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        posts_url,
        log_level,
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level {:?}, ignoring", raw);
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
        let config = PostSearchConfig::default();
        assert!(config.source.url.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = PostSearchConfig::default();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.posts_url, DEFAULT_POSTS_URL);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PostSearchConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
            },
            source: SourceConfig {
                url: Some("http://localhost:3000/posts".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.posts_url, "http://localhost:3000/posts");
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = PostSearchConfig {
            source: SourceConfig {
                url: Some("http://from-config/posts".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "POST_SEARCH_URL" => Some("http://from-env/posts".to_string()),
            "POST_SEARCH_LOG_LEVEL" => Some("info".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.posts_url, "http://from-env/posts");
        assert_eq!(resolved.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = PostSearchConfig {
            source: SourceConfig {
                url: Some("http://from-config/posts".to_string()),
            },
            ..Default::default()
        };
        let env = |_: &str| Some("http://from-env/posts".to_string());
        let cli = CliOverrides {
            url: Some("http://from-cli/posts"),
            log_level: Some("error"),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.posts_url, "http://from-cli/posts");
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_bad_log_level_falls_through() {
        let config = PostSearchConfig {
            general: GeneralConfig {
                log_level: Some("trace".to_string()),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            log_level: Some("loud"),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, no_env);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
log_level = "info"

[source]
url = "http://127.0.0.1:8080/posts"
"#;
        let config: PostSearchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(
            config.source.url.as_deref(),
            Some("http://127.0.0.1:8080/posts")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[source]
url = "http://example.test/posts"
"#;
        let config: PostSearchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.source.url.as_deref(), Some("http://example.test/posts"));
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("post-search-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[source\nurl = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("post-search-does-not-exist/config.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
