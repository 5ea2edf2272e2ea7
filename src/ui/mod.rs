// src/ui/mod.rs
mod clipboard;
mod controller;
mod feedback;
mod persistence;

pub use clipboard::{ClipboardHost, MemoryClipboard, PlatformClipboard};
pub use controller::UiController;
pub use feedback::{FeedbackTimers, SHOW_CLASS};
pub use persistence::{FileLanguageStore, LanguageStore, MemoryLanguageStore};
