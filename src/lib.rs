#[macro_export]
macro_rules! impl_default {
    ($type:ty, $body:expr) => {
        impl Default for $type {
            fn default() -> Self {
                $body
            }
        }
    };
}

// Module definitions
pub mod actions;
pub mod core;
pub mod dom;
pub mod i18n;
pub mod icons;
pub mod loader;
pub mod server;
pub mod setup;
pub mod site;
pub mod templates;
pub mod ui;

// Essential re-exports
pub use actions::{ActionHandler, ActionRegistry, ActionResult};
pub use core::config::Config;
pub use core::error::{AppError, Result};
pub use dom::Document;
pub use loader::{load_templates, render_page};
pub use ui::UiController;
