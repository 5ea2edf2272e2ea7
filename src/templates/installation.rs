// src/templates/installation.rs
use super::{icon, icon_colored, tab_button};
use crate::core::constants::{INSTALL_ONELINER, REPOSITORY_URL};
use maud::{html, Markup};

struct Step {
    de: &'static str,
    en: &'static str,
    command: &'static str,
}

const MANUAL_STEPS: &[Step] = &[
    Step {
        de: "Bestehende Konfiguration sichern",
        en: "Back up your existing configuration",
        command: "mv ~/.config/nvim ~/.config/nvim.backup",
    },
    Step {
        de: "Repository klonen",
        en: "Clone the repository",
        command: "git clone https://github.com/Maik-0000FF/VelocityNvim.git ~/.config/nvim",
    },
    Step {
        de: "Neovim starten - Plugins werden beim ersten Start installiert",
        en: "Start Neovim - plugins are installed on first launch",
        command: "nvim",
    },
];

const UPDATE_STEPS: &[Step] = &[
    Step {
        de: "Konfiguration aktualisieren",
        en: "Update the configuration",
        command: "cd ~/.config/nvim && git pull",
    },
    Step {
        de: "Plugins aktualisieren (in Neovim)",
        en: "Update plugins (inside Neovim)",
        command: ":lua vim.pack.update()",
    },
];

fn steps(list: &[Step], german: bool) -> Markup {
    html! {
        ol.install-steps {
            @for step in list {
                li {
                    p { @if german { (step.de) } @else { (step.en) } }
                    pre { code { (step.command) } }
                }
            }
        }
    }
}

fn oneliner_block(lang: &str, intro: &str, copy_label: &str, copy_title: &str, copied: &str) -> Markup {
    html! {
        p { (intro) }
        div.oneliner-box {
            code.oneliner id=(format!("oneliner-{}", lang)) { (INSTALL_ONELINER) }
            button.copy-btn onclick=(format!("copyOneliner('{}')", lang)) title=(copy_title) {
                (icon("clipboard", 16)) " " (copy_label)
            }
        }
        div.copy-feedback id=(format!("copy-feedback-oneliner-{}", lang)) {
            (copied) " " (icon_colored("checkmarkSimple", 16, "white"))
        }
    }
}

pub fn installation() -> String {
    html! {
        div id="installation" {}
        h2.lang-content.de.active { (icon("download", 32)) "Installation" }
        h2.lang-content.en { (icon("download", 32)) "Installation" }

        div.install-section {
            div.tabs {
                (tab_button("switchInstallTab", "installation", "install-script", "Ein-Befehl", "One-liner", true))
                (tab_button("switchInstallTab", "installation", "install-manual", "Manuell", "Manual", false))
                (tab_button("switchInstallTab", "installation", "install-update", "Aktualisieren", "Update", false))
            }

            div.tab-content.active id="install-script" {
                div.lang-content.de.active {
                    (oneliner_block(
                        "de",
                        "Installiert VelocityNvim mit einem Befehl. Eine vorhandene Konfiguration wird vorher gesichert.",
                        "Kopieren",
                        "Befehl kopieren",
                        "Kopiert!",
                    ))
                }
                div.lang-content.en {
                    (oneliner_block(
                        "en",
                        "Installs VelocityNvim with a single command. An existing configuration is backed up first.",
                        "Copy",
                        "Copy command",
                        "Copied!",
                    ))
                }
            }

            div.tab-content id="install-manual" {
                div.lang-content.de.active { (steps(MANUAL_STEPS, true)) }
                div.lang-content.en { (steps(MANUAL_STEPS, false)) }
            }

            div.tab-content id="install-update" {
                div.lang-content.de.active { (steps(UPDATE_STEPS, true)) }
                div.lang-content.en { (steps(UPDATE_STEPS, false)) }
            }
        }

        p.lang-content.de.active.install-note {
            (icon("warning", 18))
            "Probleme bei der Installation? "
            a href=(format!("{}/issues", REPOSITORY_URL)) { "Issue eröffnen" }
        }
        p.lang-content.en.install-note {
            (icon("warning", 18))
            "Trouble installing? "
            a href=(format!("{}/issues", REPOSITORY_URL)) { "Open an issue" }
        }
    }
    .into_string()
}
