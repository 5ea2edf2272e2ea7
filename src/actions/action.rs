// src/actions/action.rs
use crate::core::prelude::*;
use crate::dom::NodeId;
use crate::ui::UiController;
use std::future::Future;
use std::pin::Pin;

/// A global page action, callable from inline event attributes.
pub trait Action: Send + Sync + std::fmt::Debug + 'static {
    /// Name as written in markup, e.g. `switchTab`.
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    fn takes_argument(&self) -> bool {
        true
    }

    /// `trigger` is the element the event came from, if any.
    fn execute<'a>(
        &'a self,
        ui: &'a UiController,
        arg: Option<&'a str>,
        trigger: Option<NodeId>,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}
