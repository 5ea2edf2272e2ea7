// src/templates/requirements.rs
use super::{icon, tab_button};
use maud::{html, Markup};

struct Requirement {
    name: &'static str,
    de: &'static str,
    en: &'static str,
}

struct Category {
    id: &'static str,
    label_de: &'static str,
    label_en: &'static str,
    items: &'static [Requirement],
}

const CATEGORIES: &[Category] = &[
    Category {
        id: "req-core",
        label_de: "Basis",
        label_en: "Core",
        items: &[
            Requirement {
                name: "Neovim 0.12+",
                de: "Für die native vim.pack Plugin-Verwaltung",
                en: "Required for native vim.pack plugin management",
            },
            Requirement {
                name: "Git",
                de: "Zum Klonen der Konfiguration und der Plugins",
                en: "Clones the configuration and its plugins",
            },
            Requirement {
                name: "Nerd Font",
                de: "Icons in Statusline, Explorer und Completion",
                en: "Icons in statusline, explorer and completion",
            },
        ],
    },
    Category {
        id: "req-tools",
        label_de: "Werkzeuge",
        label_en: "Tools",
        items: &[
            Requirement {
                name: "ripgrep",
                de: "Schnelle Volltextsuche für fzf-lua",
                en: "Fast live grep for fzf-lua",
            },
            Requirement {
                name: "fd",
                de: "Schnelle Dateisuche",
                en: "Fast file finding",
            },
            Requirement {
                name: "fzf",
                de: "Fuzzy-Finder Backend",
                en: "Fuzzy finder backend",
            },
            Requirement {
                name: "C-Compiler (gcc/clang)",
                de: "Kompiliert Treesitter-Parser",
                en: "Compiles Treesitter parsers",
            },
        ],
    },
    Category {
        id: "req-optional",
        label_de: "Optional",
        label_en: "Optional",
        items: &[
            Requirement {
                name: "Rust Toolchain",
                de: "Baut den Rust fuzzy matcher von blink.cmp lokal",
                en: "Builds the blink.cmp Rust fuzzy matcher locally",
            },
            Requirement {
                name: "Node.js",
                de: "Für einige Language Server",
                en: "Needed by some language servers",
            },
            Requirement {
                name: "lazygit",
                de: "Git-Oberfläche im Terminal",
                en: "Terminal UI for git",
            },
        ],
    },
];

fn category_pane(category: &Category, active: bool) -> Markup {
    html! {
        div.tab-content.active[active] id=(category.id) {
            ul.requirements-list.lang-content.de.active {
                @for item in category.items {
                    li { (icon("checkmark", 18)) strong { (item.name) } " - " (item.de) }
                }
            }
            ul.requirements-list.lang-content.en {
                @for item in category.items {
                    li { (icon("checkmark", 18)) strong { (item.name) } " - " (item.en) }
                }
            }
        }
    }
}

pub fn requirements() -> String {
    html! {
        div id="requirements" {}
        h2.lang-content.de.active { (icon("info", 32)) "Voraussetzungen" }
        h2.lang-content.en { (icon("info", 32)) "Requirements" }

        div.install-section.requirements-section {
            div.tabs {
                @for (i, category) in CATEGORIES.iter().enumerate() {
                    (tab_button(
                        "switchRequirementsTab",
                        "requirements",
                        category.id,
                        category.label_de,
                        category.label_en,
                        i == 0,
                    ))
                }
            }
            @for (i, category) in CATEGORIES.iter().enumerate() {
                (category_pane(category, i == 0))
            }
        }
    }
    .into_string()
}
