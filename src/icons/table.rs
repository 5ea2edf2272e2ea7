// src/icons/table.rs - Material Icons (24x24 viewBox)
use crate::dom::escape_attr;
use std::collections::HashMap;
use std::sync::LazyLock;

const SVG_TEMPLATE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon" width="{size}" height="{size}" viewBox="0 0 24 24" fill="{color}" aria-hidden="true"><path d="{path}"/></svg>"#;

const CURRENT_COLOR: &str = "currentColor";

#[derive(Debug)]
pub struct IconEntry {
    pub name: &'static str,
    path: &'static str,
    pub default_size: u32,
    pub default_color: &'static str,
}

impl IconEntry {
    const fn new(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            default_size: 24,
            default_color: CURRENT_COLOR,
        }
    }

    const fn colored(mut self, color: &'static str) -> Self {
        self.default_color = color;
        self
    }

    /// Markup with `{size}` / `{color}` filled from the overrides or the defaults.
    /// A size that isn't a positive integer falls back to the default.
    pub fn render(&self, size: Option<&str>, color: Option<&str>) -> String {
        let size = size
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&s| s > 0)
            .unwrap_or(self.default_size);
        let color = color
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(self.default_color);

        SVG_TEMPLATE
            .replace("{path}", self.path)
            .replace("{size}", &size.to_string())
            .replace("{color}", &escape_attr(color))
    }
}

static ICONS: &[IconEntry] = &[
    IconEntry::new(
        "checkmark",
        "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
    )
    .colored("#4caf50"),
    IconEntry::new("checkmarkSimple", "M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"),
    IconEntry::new(
        "clipboard",
        "M16 1H4c-1.1 0-2 .9-2 2v14h2V3h12V1zm3 4H8c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h11c1.1 0 2-.9 2-2V7c0-1.1-.9-2-2-2zm0 16H8V7h11v14z",
    ),
    IconEntry::new(
        "coffee",
        "M20 3H4v10c0 2.21 1.79 4 4 4h6c2.21 0 4-1.79 4-4v-3h2c1.11 0 2-.89 2-2V5c0-1.11-.89-2-2-2zm0 5h-2V5h2v3zM4 19h16v2H4z",
    )
    .colored("#c8a165"),
    IconEntry::new(
        "bitcoin",
        "M17.06 11.57c.59-.69.94-1.59.94-2.57 0-1.86-1.27-3.43-3-3.87V3h-2v2h-2V3H9v2H6v2h2v10H6v2h3v2h2v-2h2v2h2v-2c2.21 0 4-1.79 4-4 0-1.45-.78-2.73-1.94-3.43zM10 7h4c1.1 0 2 .9 2 2s-.9 2-2 2h-4V7zm5 10h-5v-4h5c1.1 0 2 .9 2 2s-.9 2-2 2z",
    )
    .colored("#f7931a"),
    IconEntry::new(
        "star",
        "M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z",
    )
    .colored("#ffc107"),
    IconEntry::new(
        "bug",
        "M20 8h-2.81c-.45-.78-1.07-1.45-1.82-1.96L17 4.41 15.59 3l-2.17 2.17C12.96 5.06 12.49 5 12 5c-.49 0-.96.06-1.41.17L8.41 3 7 4.41l1.62 1.63C7.88 6.55 7.26 7.22 6.81 8H4v2h2.09c-.05.33-.09.66-.09 1v1H4v2h2v1c0 .34.04.67.09 1H4v2h2.81c1.04 1.79 2.97 3 5.19 3s4.15-1.21 5.19-3H20v-2h-2.09c.05-.33.09-.66.09-1v-1h2v-2h-2v-1c0-.34-.04-.67-.09-1H20V8zm-6 8h-4v-2h4v2zm0-4h-4v-2h4v2z",
    )
    .colored("#e57373"),
    IconEntry::new(
        "fork",
        "M14 4l2.29 2.29-2.88 2.88 1.42 1.42 2.88-2.88L20 10V4zm-4 0H4v6l2.29-2.29 4.71 4.7V20h2v-8.41l-5.29-5.3z",
    ),
    IconEntry::new(
        "youtube",
        "M10 16.5l6-4.5-6-4.5v9zM20 4H4c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 14H4V6h16v12z",
    )
    .colored("#ff0000"),
    IconEntry::new(
        "share",
        "M18 16.08c-.76 0-1.44.3-1.96.77L8.91 12.7c.05-.23.09-.46.09-.7s-.04-.47-.09-.7l7.05-4.11c.54.5 1.25.81 2.04.81 1.66 0 3-1.34 3-3s-1.34-3-3-3-3 1.34-3 3c0 .24.04.47.09.7L8.04 9.81C7.5 9.31 6.79 9 6 9c-1.66 0-3 1.34-3 3s1.34 3 3 3c.79 0 1.5-.31 2.04-.81l7.12 4.16c-.05.21-.08.43-.08.65 0 1.61 1.31 2.92 2.92 2.92 1.61 0 2.92-1.31 2.92-2.92s-1.31-2.92-2.92-2.92z",
    ),
    IconEntry::new(
        "book",
        "M18 2H6c-1.1 0-2 .9-2 2v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2zM6 4h5v8l-2.5-1.5L6 12V4z",
    ),
    IconEntry::new(
        "terminal",
        "M20 4H4c-1.11 0-2 .9-2 2v12c0 1.1.89 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.89-2-2-2zm0 14H4V8h16v10zm-2-1h-6v-2h6v2zM7.5 17l-1.41-1.41L8.67 13l-2.59-2.59L7.5 9l4 4-4 4z",
    ),
    IconEntry::new("download", "M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z"),
    IconEntry::new(
        "update",
        "M12 4V1L8 5l4 4V6c3.31 0 6 2.69 6 6 0 1.01-.25 1.97-.7 2.8l1.46 1.46C19.54 15.03 20 13.57 20 12c0-4.42-3.58-8-8-8zm0 14c-3.31 0-6-2.69-6-6 0-1.01.25-1.97.7-2.8L5.24 7.74C4.46 8.97 4 10.43 4 12c0 4.42 3.58 8 8 8v3l4-4-4-4v3z",
    ),
    IconEntry::new("warning", "M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z")
        .colored("#ff9800"),
    IconEntry::new(
        "info",
        "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z",
    ),
    IconEntry::new(
        "link",
        "M3.9 12c0-1.71 1.39-3.1 3.1-3.1h4V7H7c-2.76 0-5 2.24-5 5s2.24 5 5 5h4v-1.9H7c-1.71 0-3.1-1.39-3.1-3.1zM8 13h8v-2H8v2zm9-6h-4v1.9h4c1.71 0 3.1 1.39 3.1 3.1s-1.39 3.1-3.1 3.1h-4V17h4c2.76 0 5-2.24 5-5s-2.24-5-5-5z",
    ),
    IconEntry::new(
        "github",
        "M12 .5C5.65.5.5 5.65.5 12c0 5.08 3.29 9.39 7.86 10.91.58.1.79-.25.79-.56v-2c-3.2.7-3.87-1.36-3.87-1.36-.52-1.33-1.28-1.69-1.28-1.69-1.04-.71.08-.7.08-.7 1.15.08 1.76 1.18 1.76 1.18 1.03 1.76 2.69 1.25 3.35.96.1-.74.4-1.25.73-1.54-2.55-.29-5.24-1.28-5.24-5.68 0-1.26.45-2.28 1.18-3.09-.12-.29-.51-1.46.11-3.05 0 0 .97-.31 3.17 1.18a11 11 0 0 1 5.77 0c2.2-1.49 3.17-1.18 3.17-1.18.62 1.59.23 2.76.11 3.05.74.81 1.18 1.83 1.18 3.09 0 4.41-2.69 5.38-5.25 5.67.41.36.78 1.06.78 2.14v3.17c0 .31.21.67.8.56A11.51 11.51 0 0 0 23.5 12C23.5 5.65 18.35.5 12 .5z",
    ),
    IconEntry::new(
        "package",
        "M20 2H4c-1 0-2 .9-2 2v3.01c0 .72.43 1.34 1 1.69V20c0 1.1 1.1 2 2 2h14c.9 0 2-.9 2-2V8.7c.57-.35 1-.97 1-1.69V4c0-1.1-1-2-2-2zm-5 12H9v-2h6v2zm5-7H4V4h16v3z",
    ),
    IconEntry::new(
        "speed",
        "M20.38 8.57l-1.23 1.85a8 8 0 0 1-.22 7.58H5.07A8 8 0 0 1 15.58 6.85l1.85-1.23A10 10 0 0 0 3.35 19a2 2 0 0 0 1.72 1h13.85a2 2 0 0 0 1.74-1 10 10 0 0 0-.27-10.44zm-9.79 6.84a2 2 0 0 0 2.83 0l5.66-8.49-8.49 5.66a2 2 0 0 0 0 2.83z",
    ),
    IconEntry::new("menu", "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z"),
];

static TABLE: LazyLock<HashMap<&'static str, &'static IconEntry>> =
    LazyLock::new(|| ICONS.iter().map(|entry| (entry.name, entry)).collect());

pub fn lookup(name: &str) -> Option<&'static IconEntry> {
    TABLE.get(name).copied()
}

pub fn icon_names() -> Vec<&'static str> {
    ICONS.iter().map(|entry| entry.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        assert_eq!(TABLE.len(), ICONS.len());
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let svg = lookup("checkmark").unwrap().render(None, None);
        assert!(svg.contains(r#"width="24" height="24""#));
        assert!(svg.contains(r##"fill="#4caf50""##));
        assert!(!svg.contains('{'));
    }

    #[test]
    fn overrides_and_invalid_sizes() {
        let entry = lookup("checkmarkSimple").unwrap();
        let svg = entry.render(Some("16"), Some("white"));
        assert!(svg.contains(r#"width="16""#));
        assert!(svg.contains(r#"fill="white""#));

        let svg = entry.render(Some("big"), Some("\"><script>"));
        assert!(svg.contains(r#"width="24""#));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn unknown_names_are_absent() {
        assert!(lookup("does-not-exist").is_none());
        assert!(icon_names().contains(&"bitcoin"));
    }
}
