//! A small terminal widget toolkit: an arena-backed widget tree with a
//! factory, replace points, batched changes, focus and hit testing.
//!
//! Rendering lives in [`crate::ui`]; this module only owns structure and
//! geometry.

mod application;
mod dialog;
mod error;
mod event;
mod factory;
mod layout;
mod shortcut;
mod widget;

pub use application::Application;
pub use dialog::Dialog;
pub use event::{DialogEvent, EventType};
pub use shortcut::Shortcut;
pub use widget::{Dimension, WidgetId, WidgetKind};
