// src/ui/persistence.rs
use crate::core::constants::LANGUAGE_STORAGE_KEY;
use crate::core::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Load/save boundary for the one persisted value, the language preference.
///
/// Values are stored as given, including unsupported codes; interpreting
/// them is up to the caller.
pub trait LanguageStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, lang: &str) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    preferences: Preferences,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(rename = "velocityLang", default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

/// TOML preference file: `[preferences] velocityLang = "en"`.
#[derive(Debug, Clone)]
pub struct FileLanguageStore {
    path: PathBuf,
}

impl FileLanguageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<PreferenceFile> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => toml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", self.path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(PreferenceFile::default()),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

impl LanguageStore for FileLanguageStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.read()?.preferences.language)
    }

    fn save(&self, lang: &str) -> Result<()> {
        // Kaputte Datei wird überschrieben statt den Wechsel zu blockieren
        let mut file = self.read().unwrap_or_default();
        file.preferences.language = Some(lang.to_string());

        let content =
            toml::to_string_pretty(&file).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(AppError::Io)?;
        }
        std::fs::write(&self.path, content).map_err(AppError::Io)?;
        log::debug!("{} = {} -> {}", LANGUAGE_STORAGE_KEY, lang, self.path.display());
        Ok(())
    }
}

/// In-memory store, used per request by the server and in tests.
#[derive(Debug, Default)]
pub struct MemoryLanguageStore {
    value: Mutex<Option<String>>,
}

impl MemoryLanguageStore {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            value: Mutex::new(initial.map(str::to_string)),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LanguageStore for MemoryLanguageStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value())
    }

    fn save(&self, lang: &str) -> Result<()> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(lang.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_no_preference() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLanguageStore::new(dir.path().join("prefs.toml"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn saved_value_is_read_back_under_the_storage_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.toml");
        let store = FileLanguageStore::new(&path);

        store.save("en").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("en"));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("[preferences]"));
        assert!(raw.contains(r#"velocityLang = "en""#));

        store.save("fr").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("fr"));
    }

    #[test]
    fn corrupt_file_is_an_error_on_load_but_not_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "[preferences\n").unwrap();
        let store = FileLanguageStore::new(&path);

        assert!(matches!(store.load(), Err(AppError::Config(_))));
        store.save("de").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("de"));
    }

    #[test]
    fn memory_store_keeps_last_value() {
        let store = MemoryLanguageStore::new(None);
        store.save("de").unwrap();
        store.save("en").unwrap();
        assert_eq!(store.value().as_deref(), Some("en"));
    }
}
