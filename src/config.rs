//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8084".to_string(),
                "http://127.0.0.1:8084".to_string(),
            ],
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Simulated live feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Milliseconds between feed ticks
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// RNG seed for a reproducible feed; random when unset
    #[serde(default)]
    pub seed: Option<u64>,

    /// Disable to serve a static snapshot
    #[serde(default = "default_feed_enabled")]
    pub enabled: bool,
}

fn default_tick_ms() -> u64 {
    1000
}

fn default_feed_enabled() -> bool {
    true
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            seed: None,
            enabled: default_feed_enabled(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("courtvision").join("config.toml")),
            Some(PathBuf::from("/etc/courtvision/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        // Fall back to environment-only config
        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Server overrides
        if let Ok(host) = std::env::var("COURTVISION_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("COURTVISION_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Feed overrides
        if let Ok(tick) = std::env::var("COURTVISION_FEED_TICK_MS") {
            if let Ok(t) = tick.parse() {
                self.feed.tick_ms = t;
            }
        }
        if let Ok(seed) = std::env::var("COURTVISION_FEED_SEED") {
            if let Ok(s) = seed.parse() {
                self.feed.seed = Some(s);
            }
        }
        if let Ok(enabled) = std::env::var("COURTVISION_FEED_ENABLED") {
            self.feed.enabled = enabled.to_lowercase() != "false" && enabled != "0";
        }

        // Logging overrides
        if let Ok(level) = std::env::var("COURTVISION_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("COURTVISION_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# CourtVision Configuration
#
# Environment variables override these settings:
# - COURTVISION_HOST
# - COURTVISION_PORT
# - COURTVISION_FEED_TICK_MS
# - COURTVISION_FEED_SEED
# - COURTVISION_FEED_ENABLED
# - COURTVISION_LOG_LEVEL
# - COURTVISION_LOG_FORMAT

[server]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

# Request timeout in seconds
request_timeout_secs = 30

[feed]
# Milliseconds between simulated feed ticks
tick_ms = 1000

# Uncomment for a reproducible feed
# seed = 42

# Disable to serve a static snapshot
enabled = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/courtvision/courtvision.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8082);
        assert_eq!(config.server.addr(), "0.0.0.0:8082");
        assert_eq!(config.feed.tick_ms, 1000);
        assert!(config.feed.enabled);
        assert!(config.feed.seed.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[server]\nport = 9000\n\n[feed]\ntick_ms = 250\nseed = 7\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.feed.tick_ms, 250);
        assert_eq!(config.feed.seed, Some(7));
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[server\nport = ").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_generated_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8082);
        assert!(config.feed.enabled);
    }
}
