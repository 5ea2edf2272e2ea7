// src/actions/handler.rs
use super::parsing::parse_expression;
use super::registry::ActionRegistry;
use crate::dom::NodeId;
use crate::t;
use crate::ui::UiController;

/// Desktop width assumed when no viewport is given.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub message: String,
    pub success: bool,
}

impl ActionResult {
    fn failed(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

/// Dispatches inline handler expressions against one page.
pub struct ActionHandler {
    registry: ActionRegistry,
    viewport_width: u32,
}

impl ActionHandler {
    pub fn new() -> Self {
        Self::with_registry(ActionRegistry::with_builtins())
    }

    pub fn with_registry(registry: ActionRegistry) -> Self {
        Self {
            registry,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }

    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Runs every call in `expression` in order. Stops at the first unknown
    /// action or failing call; earlier calls keep their effect.
    pub async fn handle(
        &self,
        ui: &UiController,
        expression: &str,
        trigger: Option<NodeId>,
    ) -> ActionResult {
        let calls = match parse_expression(expression) {
            Ok(calls) => calls,
            Err(e) => {
                log::warn!("{}", e);
                return ActionResult::failed(e.to_string());
            }
        };

        let mut messages = Vec::with_capacity(calls.len());
        for call in calls {
            let Some(action) = self.registry.find(&call.name) else {
                let message = t!("action.unknown", &call.name);
                log::warn!("{}", message);
                return ActionResult::failed(message);
            };

            let arg = if action.takes_argument() {
                call.arg.as_deref()
            } else {
                None
            };

            match action.execute(ui, arg, trigger).await {
                Ok(message) => {
                    log::debug!("{} -> {}", call.name, message);
                    messages.push(message);
                }
                Err(e) => {
                    log::warn!("{}: {}", call.name, e);
                    return ActionResult::failed(e.to_string());
                }
            }
        }

        ActionResult {
            message: messages.join("\n"),
            success: true,
        }
    }

    /// Simulates a click on `node`: its `onclick` runs with `node` as
    /// trigger, and links inside the navigation close the mobile menu.
    pub async fn click(&self, ui: &UiController, node: NodeId) -> ActionResult {
        let (handler, in_nav) = {
            let document = ui.document();
            let doc = document
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let handler = doc.attr(node, "onclick").map(str::to_string);
            let in_nav = doc
                .closest_by_tag(node, "a")
                .and_then(|link| doc.closest_with_class(link, "nav-links"))
                .is_some();
            (handler, in_nav)
        };

        let result = match handler {
            Some(expression) => self.handle(ui, &expression, Some(node)).await,
            None if in_nav => ActionResult {
                message: String::new(),
                success: true,
            },
            None => ActionResult::failed(t!("action.no_handler")),
        };

        if in_nav {
            ui.nav_link_clicked(self.viewport_width);
        }
        result
    }
}

crate::impl_default!(ActionHandler, Self::new());
