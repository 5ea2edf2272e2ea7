// src/setup/setup_toml.rs
use crate::core::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::core::prelude::*;
use std::path::PathBuf;
use tokio::fs;

const DEFAULT_CONFIG: &str = r#"[general]
# error | warn | info | debug | trace (RUST_LOG overrides)
log_level = "info"

[language]
# Sprache der Meldungen von CLI und Server: "de" oder "en"
default = "de"

[server]
host = "127.0.0.1"
port = 8080
workers = 1
shutdown_timeout = 5

[build]
output_dir = "dist"

[preferences]
# Datei für die gespeicherte Sprachwahl (velocityLang)
path = ".velocity/preferences.toml"

[feedback]
# Anzeigedauer der "Kopiert!"-Meldung (100-10000ms)
duration_ms = 2000
"#;

/// Creates `./.velocity/velocity.toml` with defaults unless it already exists.
pub async fn ensure_config_exists() -> Result<PathBuf> {
    let config_dir = std::env::current_dir()?.join(CONFIG_DIR_NAME);
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).await?;
        log::debug!(
            "{}",
            get_translation(
                "system.config.dir_created",
                &[&config_dir.display().to_string()]
            )
        );
    }

    let config_path = config_dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG).await?;
        log::info!(
            "{}",
            get_translation(
                "system.config.file_created",
                &[&config_path.display().to_string()]
            )
        );
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
        paths.push(cwd.join(CONFIG_FILE_NAME));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
            paths.push(base_dir.join(CONFIG_FILE_NAME));
        }
    }
    paths
}
