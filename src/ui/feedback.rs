// src/ui/feedback.rs
use crate::dom::{Document, NodeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

pub const SHOW_CLASS: &str = "show";

/// Transient `show` class on feedback elements.
///
/// Every trigger bumps the element's generation; a timer only hides the
/// element if no later trigger happened in between (last trigger wins).
/// Timers are never cancelled.
#[derive(Debug, Clone, Default)]
pub struct FeedbackTimers {
    generations: Arc<Mutex<HashMap<NodeId, u64>>>,
}

impl FeedbackTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `show` to `node` now and schedules its removal after `duration`.
    /// Must be called without holding the document lock.
    pub fn show(
        &self,
        document: &Arc<Mutex<Document>>,
        node: NodeId,
        duration: Duration,
    ) -> Option<tokio::task::JoinHandle<()>> {
        // Lock order: generations, then document (same as the timer task)
        let generation = {
            let mut generations = self.generations.lock().unwrap_or_else(PoisonError::into_inner);
            let entry = generations.entry(node).or_insert(0);
            *entry += 1;
            document
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .add_class(node, SHOW_CLASS);
            *entry
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::debug!("No runtime, feedback stays visible");
            return None;
        };

        let document = Arc::clone(document);
        let generations = Arc::clone(&self.generations);
        Some(runtime.spawn(async move {
            tokio::time::sleep(duration).await;

            // Held until the class is removed; show() takes this lock before the document
            let generations = generations.lock().unwrap_or_else(PoisonError::into_inner);
            if generations.get(&node).copied() != Some(generation) {
                return;
            }
            document
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove_class(node, SHOW_CLASS);
        }))
    }
}
