// src/templates/shell.rs
use super::icon;
use crate::core::constants::{APP_TITLE, REPOSITORY_URL, VERSION};
use maud::{html, Markup, DOCTYPE};

pub const CONTAINER_IDS: [&str; 5] = [
    "hero-container",
    "requirements-container",
    "installation-container",
    "support-container",
    "links-container",
];

const NAV: &[(&str, &str, &str)] = &[
    ("#features", "Features", "Features"),
    ("#requirements", "Voraussetzungen", "Requirements"),
    ("#installation", "Installation", "Installation"),
    ("#support", "Unterstützen", "Support"),
    ("#links", "Links", "Links"),
];

fn nav() -> Markup {
    html! {
        nav.navbar {
            a.logo href="#" { (APP_TITLE) }
            button.hamburger onclick="toggleMobileMenu()" aria-label="Menu" {
                span {} span {} span {}
            }
            div.nav-links id="navLinks" {
                @for (href, de, en) in NAV {
                    a href=(href) {
                        span.lang-content.de.active { (de) }
                        span.lang-content.en { (en) }
                    }
                }
                div.nav-lang {
                    a.nav-lang-btn.active href="?lang=de" onclick="switchLanguage('de')" { "DE" }
                    a.nav-lang-btn href="?lang=en" onclick="switchLanguage('en')" { "EN" }
                }
            }
        }
    }
}

/// Page skeleton with empty section containers; the loader fills them.
pub fn shell() -> String {
    html! {
        (DOCTYPE)
        html lang="de" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (APP_TITLE) " - Neovim Configuration" }
                link rel="stylesheet" href="assets/style.css";
            }
            body {
                (nav())
                header.hero {
                    h1 { (icon("speed", 48)) " " (APP_TITLE) }
                    div.container id="hero-container" {}
                }
                main {
                    section.section id="requirements-section" {
                        div.container id="requirements-container" {}
                    }
                    section.section id="installation-section" {
                        div.container id="installation-container" {}
                    }
                    section.section id="support-section" {
                        div.container id="support-container" {}
                    }
                    section.section id="links-section" {
                        div.container id="links-container" {}
                    }
                }
                footer {
                    p.lang-content.de.active {
                        (APP_TITLE) " v" (VERSION) " - Erstellt mit Leidenschaft für Neovim"
                    }
                    p.lang-content.en {
                        (APP_TITLE) " v" (VERSION) " - Made with passion for Neovim"
                    }
                    a href=(REPOSITORY_URL) { (icon("github", 20)) " GitHub" }
                }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn shell_has_empty_containers_and_controls() {
        let doc = Document::parse(&shell());
        for id in CONTAINER_IDS {
            let node = doc.get_element_by_id(id).unwrap();
            assert!(doc.children(node).is_empty(), "{} should start empty", id);
        }
        assert_eq!(doc.query_class("nav-lang-btn").len(), 2);
        assert!(doc.get_element_by_id("navLinks").is_some());
        assert!(doc.first_with_class("hamburger").is_some());
        assert!(doc.to_html().starts_with("<!DOCTYPE html>"));
    }
}
