// src/templates/hero.rs
use super::icon;
use crate::core::constants::REPOSITORY_URL;
use maud::html;

const FEATURES_DE: &[&str] = &[
    "Eager Loading - Alle Plugins beim Start geladen für unterbrechungsfreien Workflow",
    "Native vim.pack Integration - keine externen Plugin-Manager",
    "Moderne LSP-Konfiguration mit vim.lsp.config",
    "Treesitter für Syntax-Highlighting",
    "fzf-lua für Fuzzy Finding (Rust-Performance)",
    "blink.cmp mit Rust fuzzy matching",
];

const FEATURES_EN: &[&str] = &[
    "Eager Loading - All plugins loaded at startup for uninterrupted workflow",
    "Native vim.pack integration - no external plugin managers",
    "Modern LSP configuration with vim.lsp.config",
    "Treesitter for syntax highlighting",
    "fzf-lua for fuzzy finding (Rust performance)",
    "blink.cmp with Rust fuzzy matching",
];

pub fn hero() -> String {
    html! {
        p.lang-content.de.active.hero-intro {
            "Moderne, performante Neovim-Konfiguration ohne externe Plugin-Manager"
        }
        p.lang-content.en.hero-intro {
            "Modern, high-performance Neovim configuration without external plugin managers"
        }
        div.hero-actions {
            a.cta-button.lang-content.de.active href=(REPOSITORY_URL) { "Zum GitHub Repository →" }
            a.cta-button.lang-content.en href=(REPOSITORY_URL) { "Go to GitHub Repository →" }
        }
    }
    .into_string()
}

pub fn features() -> String {
    html! {
        div id="features" {}
        h2.lang-content.de.active { "Features" }
        h2.lang-content.en { "Features" }

        ul.features.lang-content.de.active {
            @for feature in FEATURES_DE {
                li { (icon("checkmark", 20)) (feature) }
            }
        }
        ul.features.lang-content.en {
            @for feature in FEATURES_EN {
                li { (icon("checkmark", 20)) (feature) }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_checkmark_per_feature_and_language() {
        let markup = features();
        assert_eq!(
            markup.matches(r#"data-icon="checkmark""#).count(),
            FEATURES_DE.len() + FEATURES_EN.len()
        );
    }

    #[test]
    fn hero_links_to_repository() {
        assert_eq!(hero().matches(REPOSITORY_URL).count(), 2);
    }
}
