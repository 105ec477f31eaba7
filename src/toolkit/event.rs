use super::widget::WidgetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// The user asked to close the dialog.
    Cancel,
    /// A widget was activated.
    Widget,
}

/// An event delivered by [`Dialog`](super::Dialog) input translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Cancel,
    Activated(WidgetId),
}

impl DialogEvent {
    pub fn event_type(&self) -> EventType {
        match self {
            DialogEvent::Cancel => EventType::Cancel,
            DialogEvent::Activated(_) => EventType::Widget,
        }
    }

    /// Originating widget, if any.
    pub fn widget(&self) -> Option<WidgetId> {
        match self {
            DialogEvent::Cancel => None,
            DialogEvent::Activated(id) => Some(*id),
        }
    }
}
