// src/actions/mod.rs
pub mod action;
pub mod builtin;
pub mod handler;
pub mod parsing;
pub mod registry;

pub use action::Action;
pub use handler::{ActionHandler, ActionResult, DEFAULT_VIEWPORT_WIDTH};
pub use parsing::{parse_expression, Invocation};
pub use registry::ActionRegistry;
