// src/dom/parser.rs - kleiner Tokenizer für die eigenen Templates (kein HTML5-Parser)
use super::entities::decode;
use super::node::{Attribute, Element, NodeData};
use super::{Document, NodeId};
use regex::Regex;
use std::sync::LazyLock;

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^<([a-zA-Z][a-zA-Z0-9:-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?)>"#,
    )
    .expect("valid open tag regex")
});

static CLOSE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^</([a-zA-Z][a-zA-Z0-9:-]*)\s*>").expect("valid close tag regex")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid attribute regex")
});

pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Parses `input` and appends the resulting nodes to `parent`.
/// Unbalanced closing tags are ignored; unclosed elements end with the input.
pub(crate) fn parse_into(doc: &mut Document, parent: NodeId, input: &str) {
    let mut stack = vec![parent];
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        let top = *stack.last().unwrap_or(&parent);

        if let Some(body) = rest.strip_prefix("<!--") {
            let (comment, consumed) = match body.find("-->") {
                Some(end) => (&body[..end], 4 + end + 3),
                None => (body, rest.len()),
            };
            let node = doc.push(NodeData::Comment(comment.to_string()));
            doc.append_child(top, node);
            pos += consumed;
            continue;
        }

        if let Some(body) = rest.strip_prefix("<!") {
            let (decl, consumed) = match body.find('>') {
                Some(end) => (&body[..end], 2 + end + 1),
                None => (body, rest.len()),
            };
            let node = doc.push(NodeData::Doctype(decl.to_string()));
            doc.append_child(top, node);
            pos += consumed;
            continue;
        }

        if let Some(caps) = CLOSE_TAG.captures(rest) {
            let tag = caps[1].to_ascii_lowercase();
            // Index 0 ist der Container, der wird nie geschlossen
            if let Some(idx) = stack
                .iter()
                .rposition(|&id| doc.element(id).is_some_and(|el| el.tag == tag))
                .filter(|&idx| idx > 0)
            {
                stack.truncate(idx);
            }
            pos += caps[0].len();
            continue;
        }

        if let Some(caps) = OPEN_TAG.captures(rest) {
            let mut element = Element::new(&caps[1]);
            element.attrs = parse_attributes(caps.get(2).map_or("", |m| m.as_str()));
            element.self_closing = !caps[3].is_empty();
            let tag = element.tag.clone();
            let self_closing = element.self_closing;

            let node = doc.push(NodeData::Element(element));
            doc.append_child(top, node);
            pos += caps[0].len();

            if self_closing || is_void(&tag) {
                continue;
            }

            if RAW_TEXT_ELEMENTS.contains(&tag.as_str()) {
                let body = &input[pos..];
                let end = find_raw_text_end(body, &tag);
                if end > 0 {
                    let text = doc.push(NodeData::Text(body[..end].to_string()));
                    doc.append_child(node, text);
                }
                pos += end;
                if let Some(close) = CLOSE_TAG.find(&input[pos..]) {
                    pos += close.end();
                }
                continue;
            }

            stack.push(node);
            continue;
        }

        // Text bis zum nächsten '<'; ein '<' ohne gültigen Tag ist selbst Text
        let search_from = usize::from(rest.starts_with('<'));
        let end = rest[search_from..]
            .find('<')
            .map_or(rest.len(), |i| i + search_from);
        let text = doc.push(NodeData::Text(rest[..end].to_string()));
        doc.append_child(top, text);
        pos += end;
    }
}

fn parse_attributes(source: &str) -> Vec<Attribute> {
    ATTRIBUTE
        .captures_iter(source)
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| decode(m.as_str()));
            Attribute {
                name: caps[1].to_string(),
                value,
            }
        })
        .collect()
}

fn find_raw_text_end(body: &str, tag: &str) -> usize {
    let needle = format!("</{}", tag);
    body.to_ascii_lowercase()
        .find(&needle)
        .unwrap_or(body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_in_all_quote_styles() {
        let attrs = parse_attributes(r#" id="a" data-size='20' hidden title=plain onclick="switchTab(&#39;x&#39;)""#);
        let pairs: Vec<_> = attrs
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_deref()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("id", Some("a")),
                ("data-size", Some("20")),
                ("hidden", None),
                ("title", Some("plain")),
                ("onclick", Some("switchTab('x')")),
            ]
        );
    }

    #[test]
    fn nested_structure_and_void_elements() {
        let doc = Document::parse(r#"<div id="a"><p>one<br>two</p><img src="x.png"><span></span></div>"#);
        let div = doc.get_element_by_id("a").unwrap();
        let tags: Vec<_> = doc
            .children(div)
            .iter()
            .filter_map(|&c| doc.element(c).map(|e| e.tag.clone()))
            .collect();
        assert_eq!(tags, vec!["p", "img", "span"]);
        assert_eq!(doc.text_content(div), "onetwo");
    }

    #[test]
    fn stray_less_than_and_unbalanced_close() {
        let doc = Document::parse("<p>a < b</span></p>");
        let p = doc.first_by_tag("p").unwrap();
        assert_eq!(doc.text_content(p), "a < b");
    }

    #[test]
    fn raw_text_elements_keep_markup_inside() {
        let doc = Document::parse("<script>if (a<b) { x('</div>'); }</script><p>ok</p>");
        let script = doc.first_by_tag("script").unwrap();
        assert_eq!(doc.text_content(script), "if (a<b) { x('</div>'); }");
        assert!(doc.first_by_tag("p").is_some());
    }

    #[test]
    fn svg_self_closing_children() {
        let html = r#"<svg viewBox="0 0 24 24"><path d="M0 0h24"/></svg>"#;
        let doc = Document::parse(html);
        assert_eq!(doc.to_html(), html);
    }
}
