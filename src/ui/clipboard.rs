// src/ui/clipboard.rs
use crate::core::prelude::*;
use crate::dom::{Document, NodeId};
use base64::Engine;
use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::sync::{Mutex, PoisonError};
use tokio::io::AsyncWriteExt;

/// Host clipboard as seen by the page.
///
/// `write_text` is the asynchronous system clipboard. `exec_copy` is the
/// synchronous select-and-copy path: it receives the text currently selected
/// in the off-screen textarea.
pub trait ClipboardHost: Send + Sync {
    fn has_system_clipboard(&self) -> bool;

    fn write_text<'a>(&'a self, text: &'a str)
        -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    fn exec_copy(&self, selection: &str) -> Result<()>;
}

/// Temporary `<textarea>` appended to `<body>` for the fallback copy.
/// Dropping the guard removes it again, on success and on failure.
pub(crate) struct OffscreenTextarea<'a> {
    doc: &'a mut Document,
    node: NodeId,
}

impl<'a> OffscreenTextarea<'a> {
    pub(crate) fn attach(doc: &'a mut Document, text: &str) -> Self {
        let node = doc.create_element("textarea");
        doc.set_attr(node, "style", "position: fixed; opacity: 0");
        doc.set_attr(node, "readonly", "");
        let value = doc.create_text(text);
        doc.append_child(node, value);

        let body = doc.body();
        doc.append_child(body, node);
        Self { doc, node }
    }

    /// What `select()` would select: the textarea's full value.
    pub(crate) fn selection(&self) -> String {
        self.doc.text_content(self.node)
    }
}

impl Drop for OffscreenTextarea<'_> {
    fn drop(&mut self) {
        self.doc.remove(self.node);
    }
}

// ===== Platform clipboard =====

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];

/// Pipes text into the platform's clipboard tool. Without one, the
/// fallback writes an OSC 52 sequence so the terminal sets the clipboard.
#[derive(Debug, Clone)]
pub struct PlatformClipboard {
    program: Option<(&'static str, &'static [&'static str])>,
}

impl PlatformClipboard {
    pub fn detect() -> Self {
        let program = if cfg!(target_os = "macos") {
            Some(("pbcopy", NO_ARGS))
        } else if cfg!(target_os = "windows") {
            Some(("clip", NO_ARGS))
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Some(("wl-copy", NO_ARGS))
        } else if std::env::var_os("DISPLAY").is_some() {
            Some(("xclip", XCLIP_ARGS))
        } else {
            None
        };
        log::debug!("Clipboard program: {:?}", program.map(|(p, _)| p));
        Self { program }
    }

    fn osc52(text: &str) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
        format!("\x1b]52;c;{}\x07", encoded)
    }
}

impl ClipboardHost for PlatformClipboard {
    fn has_system_clipboard(&self) -> bool {
        self.program.is_some()
    }

    fn write_text<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let (program, args) = self
                .program
                .ok_or_else(|| AppError::Clipboard("no clipboard program".into()))?;

            let mut child = tokio::process::Command::new(program)
                .args(args)
                .stdin(std::process::Stdio::piped())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn()
                .map_err(|e| AppError::Clipboard(format!("{}: {}", program, e)))?;

            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(text.as_bytes()).await?;
                stdin.shutdown().await?;
            }

            let status = child.wait().await?;
            if status.success() {
                Ok(())
            } else {
                Err(AppError::Clipboard(format!("{} exited with {}", program, status)))
            }
        })
    }

    fn exec_copy(&self, selection: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(Self::osc52(selection).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

// ===== In-memory clipboard =====

/// Records what was copied. Either path can be disabled or made to fail.
#[derive(Debug)]
pub struct MemoryClipboard {
    system: bool,
    fail_system: bool,
    fail_exec: bool,
    contents: Mutex<Option<String>>,
    fallback_copies: Mutex<Vec<String>>,
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self {
            system: true,
            fail_system: false,
            fail_exec: false,
            contents: Mutex::new(None),
            fallback_copies: Mutex::new(Vec::new()),
        }
    }
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_system_clipboard() -> Self {
        Self {
            system: false,
            ..Self::default()
        }
    }

    pub fn failing_system_clipboard() -> Self {
        Self {
            fail_system: true,
            ..Self::default()
        }
    }

    pub fn failing_everywhere() -> Self {
        Self {
            fail_system: true,
            fail_exec: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Selections handed to `exec_copy`, oldest first.
    pub fn fallback_copies(&self) -> Vec<String> {
        self.fallback_copies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, text: &str) {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
    }
}

impl ClipboardHost for MemoryClipboard {
    fn has_system_clipboard(&self) -> bool {
        self.system
    }

    fn write_text<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            if self.fail_system {
                return Err(AppError::Clipboard("write permission denied".into()));
            }
            self.store(text);
            Ok(())
        })
    }

    fn exec_copy(&self, selection: &str) -> Result<()> {
        self.fallback_copies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(selection.to_string());
        if self.fail_exec {
            return Err(AppError::Clipboard("execCommand unsupported".into()));
        }
        self.store(selection);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textarea_is_removed_when_the_guard_drops() {
        let mut doc = Document::parse("<html><body><p>x</p></body></html>");
        let before = doc.to_html();
        {
            let area = OffscreenTextarea::attach(&mut doc, "a < b & c");
            assert_eq!(area.selection(), "a < b & c");
        }
        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn textarea_sits_under_body_while_the_guard_lives() {
        let mut doc = Document::parse("<html><body><p>x</p></body></html>");
        let body = doc.body();
        let node = {
            let area = OffscreenTextarea::attach(&mut doc, "bc1q");
            let doc = &*area.doc;
            assert_eq!(doc.closest_by_tag(area.node, "body"), Some(body));
            assert_eq!(doc.parent(area.node), Some(body));
            assert!(doc.attr(area.node, "style").is_some_and(|s| s.contains("position: fixed")));
            assert_eq!(doc.attr(area.node, "readonly"), Some(""));
            assert_eq!(doc.text_content(area.node), "bc1q");
            area.node
        };
        assert!(!doc.is_attached(node));
        assert!(doc.first_by_tag("textarea").is_none());
    }

    #[test]
    fn repeated_fallback_copies_reuse_the_textarea_slots() {
        let mut doc = Document::parse("<html><body></body></html>");
        drop(OffscreenTextarea::attach(&mut doc, "first"));
        let slots = doc.slot_count();
        for i in 0..1000 {
            let area = OffscreenTextarea::attach(&mut doc, &i.to_string());
            assert_eq!(area.selection(), i.to_string());
        }
        assert_eq!(doc.slot_count(), slots);
    }

    #[test]
    fn osc52_is_base64_of_the_text() {
        assert_eq!(PlatformClipboard::osc52("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[tokio::test]
    async fn memory_clipboard_failure_modes() {
        let clip = MemoryClipboard::failing_system_clipboard();
        assert!(clip.write_text("x").await.is_err());
        clip.exec_copy("x").unwrap();
        assert_eq!(clip.contents().as_deref(), Some("x"));

        let broken = MemoryClipboard::failing_everywhere();
        assert!(broken.exec_copy("y").is_err());
        assert_eq!(broken.contents(), None);
        assert_eq!(broken.fallback_copies(), vec!["y".to_string()]);
    }
}
