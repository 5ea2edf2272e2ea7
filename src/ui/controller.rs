// src/ui/controller.rs
use super::clipboard::{ClipboardHost, OffscreenTextarea};
use super::feedback::FeedbackTimers;
use super::persistence::LanguageStore;
use crate::core::constants::{BITCOIN_ADDRESS, DEFAULT_FEEDBACK_MS, MOBILE_BREAKPOINT_PX};
use crate::core::prelude::*;
use crate::dom::{Document, NodeId};
use crate::t;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const ACTIVE: &str = "active";

/// Interactive state of one rendered page.
///
/// All state lives in the document's class lists plus the current language
/// code. The document sits behind a mutex so feedback timers can clear the
/// `show` class later; the lock is never held across an await.
pub struct UiController {
    document: Arc<Mutex<Document>>,
    store: Arc<dyn LanguageStore>,
    clipboard: Arc<dyn ClipboardHost>,
    feedback: FeedbackTimers,
    feedback_duration: Duration,
    language: Mutex<String>,
}

impl UiController {
    pub fn new(
        document: Document,
        store: Arc<dyn LanguageStore>,
        clipboard: Arc<dyn ClipboardHost>,
    ) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
            store,
            clipboard,
            feedback: FeedbackTimers::new(),
            feedback_duration: Duration::from_millis(DEFAULT_FEEDBACK_MS),
            language: Mutex::new(Language::default().code().to_string()),
        }
    }

    pub fn with_feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback_duration = duration;
        self
    }

    pub fn document(&self) -> Arc<Mutex<Document>> {
        Arc::clone(&self.document)
    }

    fn doc(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn html(&self) -> String {
        self.doc().to_html()
    }

    /// Raw code of the last switch, `de` initially. May be unsupported.
    pub fn current_language(&self) -> String {
        self.language
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // ===== Language =====

    /// Startup: only a stored `en` changes anything, all else stays German.
    pub fn restore_language(&self) -> Language {
        let saved = match self.store.load() {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("{}", t!("language.persist_failed", &e.to_string()));
                None
            }
        };

        let lang = Language::from_preference(saved.as_deref());
        if lang == Language::En {
            self.switch_language(lang.code());
            log::info!("{}", t!("language.restored", lang.code()));
        }
        lang
    }

    pub fn switch_language(&self, lang: &str) {
        {
            let mut doc = self.doc();
            for node in doc.query_class("lang-content") {
                doc.remove_class(node, ACTIVE);
            }
            let buttons = doc.query_class("nav-lang-btn");
            for &node in &buttons {
                doc.remove_class(node, ACTIVE);
            }

            for node in doc.query_classes(&["lang-content", lang]) {
                doc.add_class(node, ACTIVE);
            }

            // Unbekannte Codes markieren wie "en" den zweiten Button
            let index = Language::ALL
                .iter()
                .find(|l| l.code() == lang)
                .map_or(Language::En.nav_index(), |l| l.nav_index());
            if let Some(&button) = buttons.get(index) {
                doc.add_class(button, ACTIVE);
            }
        }

        if !Language::ALL.iter().any(|l| l.code() == lang) {
            log::warn!("{}", t!("language.unsupported", lang));
        } else {
            log::debug!("{}", t!("language.switched", lang));
        }

        *self.language.lock().unwrap_or_else(PoisonError::into_inner) = lang.to_string();

        if let Err(e) = self.store.save(lang) {
            log::warn!("{}", t!("language.persist_failed", &e.to_string()));
        }
    }

    // ===== Tabs =====

    /// Activates pane `#name` and its tab inside the enclosing
    /// `.install-section`; other groups are left alone.
    ///
    /// `trigger` is the clicked element (or a descendant of it). Without one,
    /// the tab whose handler names `name` is activated. Returns `false` when
    /// nothing changed.
    pub fn switch_tab(&self, name: &str, trigger: Option<NodeId>) -> bool {
        let mut doc = self.doc();
        let Some(pane) = doc.get_element_by_id(name) else {
            return false;
        };
        let Some(section) = doc.closest_with_class(pane, "install-section") else {
            log::debug!("#{} is not inside a tab group", name);
            return false;
        };

        let tab = trigger
            .and_then(|t| doc.closest_with_class(t, "tab"))
            .or_else(|| Self::tab_for(&doc, section, name));

        for node in doc.query_classes_within(section, &["tab-content"]) {
            doc.remove_class(node, ACTIVE);
        }
        for node in doc.query_classes_within(section, &["tab"]) {
            doc.remove_class(node, ACTIVE);
        }

        doc.add_class(pane, ACTIVE);
        if let Some(tab) = tab {
            doc.add_class(tab, ACTIVE);
        }

        log::debug!("{}", t!("tab.switched", name));
        true
    }

    fn tab_for(doc: &Document, section: NodeId, name: &str) -> Option<NodeId> {
        let call = format!("('{}')", name);
        doc.query_classes_within(section, &["tab"])
            .into_iter()
            .find(|&tab| doc.attr(tab, "onclick").is_some_and(|h| h.ends_with(&call)))
    }

    pub fn switch_requirements_tab(&self, name: &str, trigger: Option<NodeId>) -> bool {
        self.switch_tab(name, trigger)
    }

    pub fn switch_install_tab(&self, name: &str, trigger: Option<NodeId>) -> bool {
        self.switch_tab(name, trigger)
    }

    // ===== Mobile menu =====

    pub fn toggle_mobile_menu(&self) {
        let mut doc = self.doc();
        if let Some(nav) = doc.get_element_by_id("navLinks") {
            doc.toggle_class(nav, ACTIVE);
        }
        if let Some(hamburger) = doc.first_with_class("hamburger") {
            doc.toggle_class(hamburger, ACTIVE);
        }
        log::debug!("{}", t!("menu.toggled"));
    }

    /// A link in the menu was followed; on narrow viewports the menu closes.
    pub fn nav_link_clicked(&self, viewport_width: u32) {
        if viewport_width > MOBILE_BREAKPOINT_PX {
            return;
        }
        let mut doc = self.doc();
        if let Some(nav) = doc.get_element_by_id("navLinks") {
            doc.remove_class(nav, ACTIVE);
        }
        if let Some(hamburger) = doc.first_with_class("hamburger") {
            doc.remove_class(hamburger, ACTIVE);
        }
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        let doc = self.doc();
        doc.get_element_by_id("navLinks")
            .is_some_and(|nav| doc.has_class(nav, ACTIVE))
    }

    // ===== Clipboard =====

    pub async fn copy_bitcoin_address(&self, lang: &str) -> bool {
        self.copy_to_clipboard(BITCOIN_ADDRESS, &format!("copy-feedback-{}", lang))
            .await
    }

    /// Copies the text of `#oneliner-{lang}`. Missing or empty: nothing happens.
    pub async fn copy_oneliner(&self, lang: &str) -> bool {
        let command = {
            let doc = self.doc();
            doc.get_element_by_id(&format!("oneliner-{}", lang))
                .map(|node| doc.text_content(node))
        };

        match command.filter(|c| !c.is_empty()) {
            Some(command) => {
                self.copy_to_clipboard(&command, &format!("copy-feedback-oneliner-{}", lang))
                    .await
            }
            None => {
                log::debug!("{}", t!("copy.empty", &format!("oneliner-{}", lang)));
                false
            }
        }
    }

    /// System clipboard first, select-and-copy as fallback. Feedback only
    /// when one of them succeeded. Returns whether the text was copied.
    pub async fn copy_to_clipboard(&self, text: &str, feedback_id: &str) -> bool {
        let copied = if self.clipboard.has_system_clipboard() {
            match self.clipboard.write_text(text).await {
                Ok(()) => true,
                Err(e) => {
                    log::error!("{}", t!("copy.failed", &e.to_string()));
                    self.fallback_copy(text)
                }
            }
        } else {
            log::debug!("{}", t!("copy.fallback"));
            self.fallback_copy(text)
        };

        if copied {
            log::info!("{}", t!("copy.success", feedback_id));
            self.show_feedback(feedback_id);
        }
        copied
    }

    fn fallback_copy(&self, text: &str) -> bool {
        let mut doc = self.doc();
        let textarea = OffscreenTextarea::attach(&mut doc, text);
        match self.clipboard.exec_copy(&textarea.selection()) {
            Ok(()) => true,
            Err(e) => {
                log::error!("{}", t!("copy.fallback_failed", &e.to_string()));
                false
            }
        }
    }

    fn show_feedback(&self, feedback_id: &str) {
        let node = self.doc().get_element_by_id(feedback_id);
        if let Some(node) = node {
            self.feedback
                .show(&self.document, node, self.feedback_duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MemoryClipboard, MemoryLanguageStore};

    const PAGE: &str = r#"<html><body>
<div id="navLinks" class="nav-links"><a class="nav-lang-btn active">DE</a><a class="nav-lang-btn">EN</a></div>
<button class="hamburger"></button>
<p class="lang-content de active">Hallo</p><p class="lang-content en">Hello</p>
<div class="install-section">
<a class="tab active" onclick="switchTab('a')"><span>A</span></a><a class="tab" onclick="switchTab('b')"><span>B</span></a>
<div id="a" class="tab-content active"></div><div id="b" class="tab-content"></div>
</div>
<code id="oneliner-de">echo hi</code><div id="copy-feedback-oneliner-de"></div>
</body></html>"#;

    fn controller() -> (UiController, Arc<MemoryLanguageStore>, Arc<MemoryClipboard>) {
        let store = Arc::new(MemoryLanguageStore::default());
        let clip = Arc::new(MemoryClipboard::new());
        let ui = UiController::new(Document::parse(PAGE), store.clone(), clip.clone());
        (ui, store, clip)
    }

    fn active_ids(ui: &UiController) -> Vec<String> {
        let doc = ui.doc();
        doc.query_classes(&["tab-content", "active"])
            .into_iter()
            .filter_map(|n| doc.element(n).and_then(|e| e.id()).map(str::to_string))
            .collect()
    }

    #[test]
    fn switching_tab_without_trigger_finds_its_tab() {
        let (ui, _, _) = controller();
        assert!(ui.switch_tab("b", None));
        assert_eq!(active_ids(&ui), vec!["b"]);

        let doc = ui.doc();
        let tabs = doc.query_classes(&["tab", "active"]);
        assert_eq!(tabs.len(), 1);
        assert_eq!(doc.attr(tabs[0], "onclick"), Some("switchTab('b')"));
    }

    #[test]
    fn trigger_inside_a_tab_activates_the_tab_itself() {
        let (ui, _, _) = controller();
        let span = {
            let doc = ui.doc();
            let tab = doc.query_class("tab")[1];
            doc.children(tab)[0]
        };
        ui.switch_tab("b", Some(span));

        let doc = ui.doc();
        assert!(!doc.has_class(span, ACTIVE));
        assert!(doc.has_class(doc.query_class("tab")[1], ACTIVE));
    }

    #[test]
    fn unknown_tab_is_a_no_op() {
        let (ui, _, _) = controller();
        let before = ui.html();
        assert!(!ui.switch_tab("nope", None));
        assert_eq!(ui.html(), before);
    }

    #[test]
    fn language_switch_marks_button_and_persists() {
        let (ui, store, _) = controller();
        ui.switch_language("en");

        let doc = ui.doc();
        let visible = doc.query_classes(&["lang-content", "active"]);
        assert_eq!(visible.len(), 1);
        assert!(doc.has_class(visible[0], "en"));
        assert!(doc.has_class(doc.query_class("nav-lang-btn")[1], ACTIVE));
        assert_eq!(store.value().as_deref(), Some("en"));
    }

    #[test]
    fn mobile_menu_closes_only_on_narrow_viewports() {
        let (ui, _, _) = controller();
        ui.toggle_mobile_menu();
        assert!(ui.is_mobile_menu_open());
        ui.nav_link_clicked(1024);
        assert!(ui.is_mobile_menu_open());
        ui.nav_link_clicked(768);
        assert!(!ui.is_mobile_menu_open());
    }

    #[tokio::test]
    async fn oneliner_text_is_copied() {
        let (ui, _, clip) = controller();
        assert!(ui.copy_oneliner("de").await);
        assert_eq!(clip.contents().as_deref(), Some("echo hi"));
        assert!(!ui.copy_oneliner("en").await);
    }
}
