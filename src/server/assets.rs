// src/server/assets.rs
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "src/server/assets/"]
pub struct Assets;

pub fn content_type(file: &str) -> &'static str {
    match file.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("html") => "text/html; charset=utf-8",
        _ => "application/octet-stream",
    }
}

pub fn get(file: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(file).map(|asset| asset.data)
}

/// Names of all embedded files, for the static build.
pub fn files() -> Vec<String> {
    let mut names: Vec<String> = Assets::iter().map(|name| name.into_owned()).collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_embedded() {
        assert!(files().contains(&"style.css".to_string()));
        let css = get("style.css").unwrap();
        let css = std::str::from_utf8(&css).unwrap();
        assert!(css.contains(".lang-content.active"));
        assert!(css.contains(".copy-feedback.show"));
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type("style.css"), "text/css; charset=utf-8");
        assert_eq!(content_type("favicon.svg"), "image/svg+xml");
        assert_eq!(content_type("README"), "application/octet-stream");
    }
}
