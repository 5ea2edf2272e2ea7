// src/core/config.rs
use crate::core::constants::{DEFAULT_FEEDBACK_MS, MAX_FEEDBACK_MS, MIN_FEEDBACK_MS};
use crate::core::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: Option<GeneralConfigToml>,
    #[serde(default)]
    language: Option<LanguageConfigToml>,
    #[serde(default)]
    server: Option<ServerConfigToml>,
    #[serde(default)]
    build: Option<BuildConfigToml>,
    #[serde(default)]
    preferences: Option<PreferencesConfigToml>,
    #[serde(default)]
    feedback: Option<FeedbackConfigToml>,
}

#[derive(Debug, Deserialize)]
struct GeneralConfigToml {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct LanguageConfigToml {
    #[serde(default = "default_language")]
    default: String,
}

#[derive(Debug, Deserialize, Clone)]
struct ServerConfigToml {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_workers")]
    workers: usize,
    #[serde(default = "default_shutdown_timeout")]
    shutdown_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
struct BuildConfigToml {
    #[serde(default = "default_output_dir")]
    output_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
struct PreferencesConfigToml {
    #[serde(default = "default_preferences_path")]
    path: String,
}

#[derive(Debug, Deserialize, Clone)]
struct FeedbackConfigToml {
    #[serde(default = "default_feedback_ms")]
    duration_ms: u64,
}

// Default Functions
fn default_log_level() -> String {
    "info".into()
}
fn default_language() -> String {
    Language::De.code().into()
}
fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    8080
}
fn default_workers() -> usize {
    1
}
fn default_shutdown_timeout() -> u64 {
    5
}
fn default_output_dir() -> String {
    "dist".into()
}
fn default_preferences_path() -> String {
    ".velocity/preferences.toml".into()
}
fn default_feedback_ms() -> u64 {
    DEFAULT_FEEDBACK_MS
}

// Main Configuration Structures
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub language: Language,
    pub server: ServerConfig,
    pub build: BuildConfig,
    pub preferences_path: PathBuf,
    pub feedback_duration: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub shutdown_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub output_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(default_output_dir()),
        }
    }
}

impl Config {
    /// Sucht eine vorhandene Config, legt sonst die Default-Datei an.
    pub async fn load() -> Result<Self> {
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => {
                        Self::log_startup(&config);
                        return Ok(config);
                    }
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        let path = crate::setup::setup_toml::ensure_config_exists().await?;
        let config = Self::from_file(&path).await?;
        Self::log_startup(&config);
        Ok(config)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path).await?;
        log::debug!("Config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        let log_level = file
            .general
            .map_or_else(default_log_level, |g| g.log_level);

        let language = match file.language {
            Some(l) => l.default.parse::<Language>().unwrap_or_else(|_| {
                log::warn!("Unknown default language '{}', using DE", l.default);
                Language::default()
            }),
            None => Language::default(),
        };

        let server = file.server.map_or_else(ServerConfig::default, |s| ServerConfig {
            host: s.host,
            port: s.port,
            workers: Self::clamp(s.workers as u64, 1, 64, 1) as usize,
            shutdown_timeout: s.shutdown_timeout,
        });

        let build = file.build.map_or_else(BuildConfig::default, |b| BuildConfig {
            output_dir: PathBuf::from(b.output_dir),
        });

        let preferences_path = PathBuf::from(
            file.preferences
                .map_or_else(default_preferences_path, |p| p.path),
        );

        let feedback_ms = file.feedback.map_or(DEFAULT_FEEDBACK_MS, |f| {
            Self::clamp(f.duration_ms, MIN_FEEDBACK_MS, MAX_FEEDBACK_MS, DEFAULT_FEEDBACK_MS)
        });

        Ok(Self {
            log_level,
            language,
            server,
            build,
            preferences_path,
            feedback_duration: Duration::from_millis(feedback_ms),
        })
    }

    // Helper methods
    fn clamp(value: u64, min: u64, max: u64, default: u64) -> u64 {
        if value < min || value > max {
            default
        } else {
            value
        }
    }

    fn log_startup(config: &Config) {
        log::info!(
            "{} landing v{}",
            crate::core::constants::APP_TITLE,
            crate::core::constants::VERSION
        );
        log::debug!(
            "Server {}:{} ({} workers), feedback {}ms, default language {}",
            config.server.host,
            config.server.port,
            config.server.workers,
            config.feedback_duration.as_millis(),
            config.language
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            language: Language::default(),
            server: ServerConfig::default(),
            build: BuildConfig::default(),
            preferences_path: PathBuf::from(default_preferences_path()),
            feedback_duration: Duration::from_millis(DEFAULT_FEEDBACK_MS),
        }
    }
}
