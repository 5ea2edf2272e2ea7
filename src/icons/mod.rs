// src/icons/mod.rs
mod renderer;
mod table;

pub use renderer::{render_icons, ICON_ATTR, ICON_COLOR_ATTR, ICON_SIZE_ATTR};
pub use table::{icon_names, lookup, IconEntry};

/// Standalone SVG for `name`, or `None` for unknown icons.
pub fn icon_svg(name: &str, size: Option<&str>, color: Option<&str>) -> Option<String> {
    lookup(name).map(|entry| entry.render(size, color))
}
