//! Widget factory. Every widget is created as the last child of its parent.

use super::dialog::Dialog;
use super::error::Result;
use super::shortcut::Shortcut;
use super::widget::{Dimension, WidgetId, WidgetKind};

impl Dialog {
    pub fn create_popup_dialog() -> Self {
        Dialog::new()
    }

    pub fn create_frame(&mut self, parent: WidgetId, label: &str) -> Result<WidgetId> {
        self.insert(
            parent,
            WidgetKind::Frame {
                label: label.to_string(),
            },
        )
    }

    pub fn create_hbox(&mut self, parent: WidgetId) -> Result<WidgetId> {
        self.insert(parent, WidgetKind::HBox)
    }

    pub fn create_vbox(&mut self, parent: WidgetId) -> Result<WidgetId> {
        self.insert(parent, WidgetKind::VBox)
    }

    pub fn create_replace_point(&mut self, parent: WidgetId) -> Result<WidgetId> {
        self.insert(parent, WidgetKind::ReplacePoint)
    }

    pub fn create_label(&mut self, parent: WidgetId, text: &str) -> Result<WidgetId> {
        self.insert(
            parent,
            WidgetKind::Label {
                text: text.to_string(),
            },
        )
    }

    /// `label` may carry a `&` shortcut marker.
    pub fn create_push_button(&mut self, parent: WidgetId, label: &str) -> Result<WidgetId> {
        self.insert(
            parent,
            WidgetKind::PushButton {
                label: Shortcut::parse(label),
            },
        )
    }

    pub fn create_spacing(
        &mut self,
        parent: WidgetId,
        dim: Dimension,
        stretchable: bool,
        size: f32,
    ) -> Result<WidgetId> {
        self.insert(
            parent,
            WidgetKind::Spacing {
                dim,
                stretchable,
                size,
            },
        )
    }
}
