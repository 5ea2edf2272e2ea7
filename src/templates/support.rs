// src/templates/support.rs
use super::{icon, icon_colored};
use crate::core::constants::{BITCOIN_ADDRESS, REPOSITORY_URL, YOUTUBE_URL};
use maud::{html, Markup};

struct SupportItem {
    icon: &'static str,
    href: Option<String>,
    title: &'static str,
    text: &'static str,
}

struct SupportCopy {
    lang: &'static str,
    heading: &'static str,
    intro: &'static str,
    bitcoin_title: &'static str,
    copy_label: &'static str,
    copy_title: &'static str,
    copied: &'static str,
    items: [SupportItem; 6],
}

fn issues_url() -> String {
    format!("{}/issues", REPOSITORY_URL)
}

fn copy_for(lang: &'static str) -> SupportCopy {
    // Links hängen nicht von der Sprache ab, nur Titel und Text
    let german = lang == "de";
    let pick = |de: &'static str, en: &'static str| if german { de } else { en };
    SupportCopy {
        lang,
        heading: pick("Unterstütze VelocityNvim", "Support VelocityNvim"),
        intro: pick(
            "Wenn dir VelocityNvim gefällt, unterstütze das Projekt!",
            "If you like VelocityNvim, support the project!",
        ),
        bitcoin_title: pick("Bitcoin Spende", "Bitcoin Donation"),
        copy_label: pick("Kopieren", "Copy"),
        copy_title: pick("Bitcoin-Adresse kopieren", "Copy Bitcoin address"),
        copied: pick("Kopiert!", "Copied!"),
        items: [
            SupportItem {
                icon: "star",
                href: Some(REPOSITORY_URL.to_string()),
                title: pick("Repository starren", "Star Repository"),
                text: pick("Zeig deine Wertschätzung", "Show your appreciation"),
            },
            SupportItem {
                icon: "bug",
                href: Some(issues_url()),
                title: pick("Bugs melden", "Report Bugs"),
                text: pick("Hilf Fehler zu finden", "Help find issues"),
            },
            SupportItem {
                icon: "fork",
                href: Some(format!("{}/fork", REPOSITORY_URL)),
                title: pick("Code beitragen", "Contribute Code"),
                text: pick("Pull Requests willkommen", "Pull requests welcome"),
            },
            SupportItem {
                icon: "youtube",
                href: Some(YOUTUBE_URL.to_string()),
                title: pick("YouTube-Kanal", "YouTube Channel"),
                text: "Installation & Setup",
            },
            SupportItem {
                icon: "share",
                href: None,
                title: pick("Projekt teilen", "Share Project"),
                text: pick("Erzähl anderen davon", "Tell others about it"),
            },
            SupportItem {
                icon: "book",
                href: Some(format!("{}/blob/main/README.md", REPOSITORY_URL)),
                title: pick("Docs verbessern", "Improve Docs"),
                text: pick("Dokumentation erweitern", "Enhance documentation"),
            },
        ],
    }
}

fn support_item(item: &SupportItem) -> Markup {
    let body = html! {
        span.emoji { (icon(item.icon, 60)) }
        div {
            h3 { (item.title) }
            p { (item.text) }
        }
    };
    html! {
        div.support-item {
            @match &item.href {
                Some(href) => {
                    a href=(href) { (body) }
                }
                None => {
                    (body)
                }
            }
        }
    }
}

fn donation_section(copy: &SupportCopy) -> Markup {
    html! {
        div.donation-section.lang-content.(copy.lang).active[copy.lang == "de"] {
            h2 { (icon("coffee", 36)) (copy.heading) }
            p.support-intro { (copy.intro) }

            div.support-grid {
                div.support-item.bitcoin-item {
                    span.emoji { (icon("bitcoin", 60)) }
                    h3 { (copy.bitcoin_title) }
                    p.bitcoin-address { (BITCOIN_ADDRESS) }
                    button.copy-btn
                        onclick=(format!("copyBitcoinAddress('{}')", copy.lang))
                        title=(copy.copy_title)
                    {
                        (icon("clipboard", 16)) " " (copy.copy_label)
                    }
                    div.copy-feedback id=(format!("copy-feedback-{}", copy.lang)) {
                        (copy.copied) " " (icon_colored("checkmarkSimple", 16, "white"))
                    }
                }
                @for item in &copy.items {
                    (support_item(item))
                }
            }
        }
    }
}

pub fn support() -> String {
    html! {
        div id="support" {}
        (donation_section(&copy_for("de")))
        (donation_section(&copy_for("en")))
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn bitcoin_copy_wiring_per_language() {
        let doc = Document::parse(&support());
        for lang in ["de", "en"] {
            assert!(doc.get_element_by_id(&format!("copy-feedback-{}", lang)).is_some());
        }
        let buttons: Vec<_> = doc
            .query_class("copy-btn")
            .into_iter()
            .filter_map(|b| doc.attr(b, "onclick").map(str::to_string))
            .collect();
        assert_eq!(
            buttons,
            vec!["copyBitcoinAddress('de')", "copyBitcoinAddress('en')"]
        );
    }

    #[test]
    fn links_resolve_to_repository_pages() {
        let markup = support();
        assert!(markup.contains(&issues_url()));
        assert!(markup.contains("/fork\""));
        assert!(markup.contains("README.md"));
        assert_eq!(markup.matches(BITCOIN_ADDRESS).count(), 2);
    }
}
