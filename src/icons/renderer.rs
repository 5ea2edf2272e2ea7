// src/icons/renderer.rs
use super::table::lookup;
use crate::dom::Document;

pub const ICON_ATTR: &str = "data-icon";
pub const ICON_SIZE_ATTR: &str = "data-size";
pub const ICON_COLOR_ATTR: &str = "data-color";

/// Fills every `data-icon` placeholder in the document with its SVG.
///
/// Unknown names are left untouched. The placeholder element itself stays in
/// place, only its content is replaced, so running this twice produces the
/// same markup. Returns the number of placeholders filled.
pub fn render_icons(doc: &mut Document) -> usize {
    let placeholders = doc.query_attr(ICON_ATTR);
    let mut rendered = 0;

    for node in placeholders {
        let Some(name) = doc.attr(node, ICON_ATTR).map(str::to_string) else {
            continue;
        };
        let Some(entry) = lookup(&name) else {
            log::debug!("Unknown icon '{}', placeholder left as is", name);
            continue;
        };

        let markup = entry.render(doc.attr(node, ICON_SIZE_ATTR), doc.attr(node, ICON_COLOR_ATTR));
        doc.set_inner_html(node, &markup);
        rendered += 1;
    }

    log::debug!("{}", crate::t!("icons.rendered", &rendered.to_string()));
    rendered
}
