// src/templates/mod.rs
//! Page sections. Each function is pure and returns markup with the German
//! and English variants side by side; German is marked `active`.

mod hero;
mod installation;
mod links;
mod requirements;
mod shell;
mod support;

pub use hero::{features, hero};
pub use installation::installation;
pub use links::links;
pub use requirements::requirements;
pub use shell::{shell, CONTAINER_IDS};
pub use support::support;

use maud::{html, Markup};

/// Icon placeholder, filled later by the icon renderer.
pub(crate) fn icon(name: &str, size: u32) -> Markup {
    html! { span data-icon=(name) data-size=(size) {} }
}

pub(crate) fn icon_colored(name: &str, size: u32, color: &str) -> Markup {
    html! { span data-icon=(name) data-color=(color) data-size=(size) {} }
}

/// Tab control. `action` is the global action wired into `onclick`; the
/// `href` keeps the tab reachable through the server without scripting.
pub(crate) fn tab_button(
    action: &str,
    anchor: &str,
    id: &str,
    label_de: &str,
    label_en: &str,
    active: bool,
) -> Markup {
    html! {
        a.tab.active[active]
            href=(format!("?tab={}#{}", id, anchor))
            onclick=(format!("{}('{}')", action, id))
        {
            span.lang-content.de.active { (label_de) }
            span.lang-content.en { (label_en) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn sections() -> Vec<(&'static str, String)> {
        vec![
            ("hero", hero()),
            ("features", features()),
            ("requirements", requirements()),
            ("installation", installation()),
            ("support", support()),
            ("links", links()),
        ]
    }

    #[test]
    fn templates_are_pure() {
        for (name, markup) in sections() {
            let again = match name {
                "hero" => hero(),
                "features" => features(),
                "requirements" => requirements(),
                "installation" => installation(),
                "support" => support(),
                _ => links(),
            };
            assert_eq!(markup, again, "{} must not depend on state", name);
        }
    }

    #[test]
    fn every_section_is_bilingual_with_german_active() {
        for (name, markup) in sections() {
            let doc = Document::parse(&markup);
            let de = doc.query_classes(&["lang-content", "de"]);
            let en = doc.query_classes(&["lang-content", "en"]);
            assert!(!de.is_empty(), "{}: no German block", name);
            assert_eq!(de.len(), en.len(), "{}: unbalanced languages", name);
            assert!(de.iter().all(|&n| doc.has_class(n, "active")), "{}", name);
            assert!(en.iter().all(|&n| !doc.has_class(n, "active")), "{}", name);
        }
    }

    #[test]
    fn tab_groups_start_with_exactly_one_active_tab() {
        for markup in [requirements(), installation()] {
            let doc = Document::parse(&markup);
            for section in doc.query_class("install-section") {
                let tabs = doc.query_classes_within(section, &["tab"]);
                let panes = doc.query_classes_within(section, &["tab-content"]);
                assert_eq!(tabs.len(), panes.len());
                assert_eq!(doc.query_classes_within(section, &["tab", "active"]).len(), 1);
                assert_eq!(
                    doc.query_classes_within(section, &["tab-content", "active"]).len(),
                    1
                );
            }
        }
    }
}
