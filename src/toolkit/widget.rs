use generational_arena::Index;

use super::shortcut::Shortcut;

/// Opaque handle to a widget owned by a [`Dialog`](super::Dialog).
///
/// Handles are generational: once the widget is deleted its id never
/// matches a newly created widget, even if the arena slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) Index);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    Dialog,
    Frame { label: String },
    HBox,
    VBox,
    ReplacePoint,
    Label { text: String },
    PushButton { label: Shortcut },
    Spacing { dim: Dimension, stretchable: bool, size: f32 },
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Dialog => "dialog",
            WidgetKind::Frame { .. } => "frame",
            WidgetKind::HBox => "hbox",
            WidgetKind::VBox => "vbox",
            WidgetKind::ReplacePoint => "replace point",
            WidgetKind::Label { .. } => "label",
            WidgetKind::PushButton { .. } => "push button",
            WidgetKind::Spacing { .. } => "spacing",
        }
    }

    /// Maximum number of children, `None` for unbounded layout boxes.
    pub fn child_capacity(&self) -> Option<usize> {
        match self {
            WidgetKind::Dialog | WidgetKind::Frame { .. } | WidgetKind::ReplacePoint => Some(1),
            WidgetKind::HBox | WidgetKind::VBox => None,
            WidgetKind::Label { .. } | WidgetKind::PushButton { .. } | WidgetKind::Spacing { .. } => {
                Some(0)
            }
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self, WidgetKind::PushButton { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Widget {
    pub kind: WidgetKind,
    pub parent: Option<WidgetId>,
    pub children: Vec<WidgetId>,
    pub hweight: u16,
    pub vweight: u16,
    pub shown: bool,
}

impl Widget {
    pub fn new(kind: WidgetKind, parent: Option<WidgetId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            hweight: 0,
            vweight: 0,
            shown: true,
        }
    }

    pub fn weight(&self, dim: Dimension) -> u16 {
        match dim {
            Dimension::Horizontal => self.hweight,
            Dimension::Vertical => self.vweight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_capacity() {
        assert_eq!(WidgetKind::Dialog.child_capacity(), Some(1));
        assert_eq!(WidgetKind::ReplacePoint.child_capacity(), Some(1));
        assert_eq!(WidgetKind::VBox.child_capacity(), None);
        assert_eq!(
            WidgetKind::Label { text: "x".into() }.child_capacity(),
            Some(0)
        );
    }
}
