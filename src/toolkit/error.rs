use thiserror::Error;

use super::widget::WidgetId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolkitError {
    #[error("widget {0:?} no longer exists")]
    StaleWidget(WidgetId),

    #[error("a {kind} cannot contain children")]
    NotAContainer { kind: &'static str },

    #[error("this {kind} already has a child")]
    ChildSlotTaken { kind: &'static str },

    #[error("expected a {expected}, found a {found}")]
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },

    #[error("done_multiple_changes called without a matching start")]
    UnbalancedBatch,

    #[error("the dialog has been destroyed")]
    Destroyed,
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
