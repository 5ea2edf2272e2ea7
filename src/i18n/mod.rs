// src/i18n/mod.rs - Meldungen der CLI / des Servers (nicht die Seiteninhalte)
use crate::core::prelude::*;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

mod error;
mod language;

pub use error::TranslationError;
pub use language::Language;

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;

#[derive(Debug, Clone)]
struct Entry {
    text: String,
}

impl Entry {
    /// Fills `{}` slots left to right. Parameter values are inserted
    /// verbatim, so a `{}` inside a value stays as it is.
    fn format(&self, params: &[&str]) -> String {
        let mut parts = self.text.split("{}");
        let mut out = parts.next().unwrap_or_default().to_string();
        let mut params = params.iter();
        for part in parts {
            out.push_str(params.next().copied().unwrap_or("{}"));
            out.push_str(part);
        }
        out
    }
}

struct I18nService {
    entries: HashMap<String, Entry>,
    fallback: HashMap<String, Entry>,
}

impl I18nService {
    fn new() -> Self {
        let mut service = Self {
            entries: HashMap::new(),
            fallback: HashMap::new(),
        };
        if let Err(e) = service.load_language(Language::default()) {
            log::error!("Failed to load default messages: {}", e);
        }
        service
    }

    fn load_language(&mut self, lang: Language) -> Result<()> {
        self.entries = Self::load_entries(lang)?;
        self.fallback = Self::load_entries(lang.other()).unwrap_or_default();
        Ok(())
    }

    fn load_entries(lang: Language) -> Result<HashMap<String, Entry>> {
        let filename = format!("{}.json", lang.code());
        let content = Langs::get(&filename).ok_or_else(|| {
            TranslationError::LoadError(format!("File not found: {}", filename))
        })?;

        let content_str = std::str::from_utf8(content.data.as_ref())
            .map_err(|e| TranslationError::LoadError(e.to_string()))?;

        let raw: HashMap<String, String> = serde_json::from_str(content_str)
            .map_err(|e| TranslationError::LoadError(e.to_string()))?;

        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_suffix(".text")
                    .map(|base| (base.to_string(), Entry { text: value }))
            })
            .collect())
    }

    fn get_translation(&self, key: &str, params: &[&str]) -> String {
        match self.entries.get(key).or_else(|| self.fallback.get(key)) {
            Some(entry) => entry.format(params),
            None => format!("Missing: {}", key),
        }
    }
}

static SERVICE: std::sync::LazyLock<RwLock<I18nService>> =
    std::sync::LazyLock::new(|| RwLock::new(I18nService::new()));

pub fn set_language(lang: Language) -> Result<()> {
    SERVICE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .load_language(lang)
}

pub fn get_translation(key: &str, params: &[&str]) -> String {
    SERVICE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get_translation(key, params)
}

pub fn has_translation(key: &str) -> bool {
    let service = SERVICE.read().unwrap_or_else(PoisonError::into_inner);
    service.entries.contains_key(key) || service.fallback.contains_key(key)
}

#[macro_export]
macro_rules! t {
    ($key:expr) => { $crate::i18n::get_translation($key, &[]) };
    ($key:expr, $($arg:expr),+) => { $crate::i18n::get_translation($key, &[$($arg),+]) };
}
