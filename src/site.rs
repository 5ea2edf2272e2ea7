// src/site.rs - statischer Build nach `build.output_dir`
use crate::core::prelude::*;
use crate::server::assets;
use crate::t;
use crate::ui::{LanguageStore, MemoryClipboard, UiController};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub language: Language,
    pub files: Vec<PathBuf>,
}

/// Renders the page with the stored language applied and writes
/// `index.html` plus all embedded assets below `out_dir`.
pub async fn build_site(out_dir: &Path, store: Arc<dyn LanguageStore>) -> Result<BuildReport> {
    log::info!("{}", t!("build.start", &out_dir.display().to_string()));

    let ui = UiController::new(
        crate::loader::render_page(),
        store,
        Arc::new(MemoryClipboard::new()),
    );
    let language = ui.restore_language();

    let mut files = Vec::new();
    files.push(write_file(&out_dir.join("index.html"), ui.html().as_bytes()).await?);

    for name in assets::files() {
        if let Some(data) = assets::get(&name) {
            files.push(write_file(&out_dir.join("assets").join(&name), &data).await?);
        }
    }

    log::info!(
        "{}",
        t!(
            "build.done",
            &files.len().to_string(),
            &out_dir.display().to_string()
        )
    );
    Ok(BuildReport { language, files })
}

async fn write_file(path: &Path, data: &[u8]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, data).await?;
    log::debug!(
        "{}",
        t!(
            "build.written",
            &path.display().to_string(),
            &data.len().to_string()
        )
    );
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MemoryLanguageStore;

    #[tokio::test]
    async fn writes_index_and_assets() {
        let dir = tempfile::tempdir().unwrap();
        let report = build_site(dir.path(), Arc::new(MemoryLanguageStore::default()))
            .await
            .unwrap();

        assert_eq!(report.language, Language::De);
        let index = tokio::fs::read_to_string(dir.path().join("index.html"))
            .await
            .unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert!(dir.path().join("assets").join("style.css").exists());
        assert_eq!(report.files.len(), 1 + assets::files().len());
    }

    #[tokio::test]
    async fn stored_english_preference_is_baked_in() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(MemoryLanguageStore::new(Some("en")));
        let report = build_site(dir.path(), store).await.unwrap();
        assert_eq!(report.language, Language::En);

        let index = tokio::fs::read_to_string(dir.path().join("index.html"))
            .await
            .unwrap();
        let doc = crate::dom::Document::parse(&index);
        let buttons = doc.query_class("nav-lang-btn");
        assert!(!doc.has_class(buttons[0], "active"));
        assert!(doc.has_class(buttons[1], "active"));
    }
}
