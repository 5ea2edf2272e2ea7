// src/templates/links.rs
use super::icon;
use crate::core::constants::{REPOSITORY_URL, YOUTUBE_URL};
use maud::{html, Markup};

struct Link {
    icon: &'static str,
    href: String,
    de: &'static str,
    en: &'static str,
}

fn link_list() -> Vec<Link> {
    vec![
        Link {
            icon: "github",
            href: REPOSITORY_URL.to_string(),
            de: "GitHub Repository",
            en: "GitHub Repository",
        },
        Link {
            icon: "bug",
            href: format!("{}/issues", REPOSITORY_URL),
            de: "Issues & Feature-Wünsche",
            en: "Issues & feature requests",
        },
        Link {
            icon: "update",
            href: format!("{}/releases", REPOSITORY_URL),
            de: "Releases & Changelog",
            en: "Releases & changelog",
        },
        Link {
            icon: "youtube",
            href: YOUTUBE_URL.to_string(),
            de: "YouTube-Kanal",
            en: "YouTube channel",
        },
        Link {
            icon: "book",
            href: "https://neovim.io/doc/".to_string(),
            de: "Neovim Dokumentation",
            en: "Neovim documentation",
        },
    ]
}

fn list(links: &[Link], german: bool) -> Markup {
    html! {
        ul.links-list.lang-content.de[german].en[!german].active[german] {
            @for link in links {
                li {
                    a href=(link.href) target="_blank" rel="noopener" {
                        (icon(link.icon, 20))
                        " "
                        @if german { (link.de) } @else { (link.en) }
                    }
                }
            }
        }
    }
}

pub fn links() -> String {
    let links = link_list();
    html! {
        div id="links" {}
        h2.lang-content.de.active { (icon("link", 32)) " Links" }
        h2.lang-content.en { (icon("link", 32)) " Links" }
        (list(&links, true))
        (list(&links, false))
    }
    .into_string()
}
