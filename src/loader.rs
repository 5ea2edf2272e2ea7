// src/loader.rs - füllt die Section-Container und rendert danach die Icons
use crate::dom::Document;
use crate::icons::render_icons;
use crate::templates;

/// Container id and the template output it receives.
fn container_content(id: &str) -> Option<String> {
    match id {
        "hero-container" => Some(templates::hero() + &templates::features()),
        "requirements-container" => Some(templates::requirements()),
        "installation-container" => Some(templates::installation()),
        "support-container" => Some(templates::support()),
        "links-container" => Some(templates::links()),
        _ => None,
    }
}

/// Injects every section into its container, then renders icons once.
///
/// Missing containers are skipped. The content is replaced, not appended,
/// so loading twice serialises byte-identically. Returns the number of
/// containers filled.
pub fn load_templates(doc: &mut Document) -> usize {
    let mut filled = 0;
    for id in templates::CONTAINER_IDS {
        let (Some(node), Some(markup)) = (doc.get_element_by_id(id), container_content(id)) else {
            log::debug!("Container #{} not present, skipped", id);
            continue;
        };
        doc.set_inner_html(node, &markup);
        filled += 1;
    }
    render_icons(doc);
    filled
}

/// Shell plus all sections, icons rendered, German active.
pub fn render_page() -> Document {
    let mut doc = Document::parse(&templates::shell());
    load_templates(&mut doc);
    doc
}
