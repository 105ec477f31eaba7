use std::collections::HashMap;

use generational_arena::Arena;
use ratatui::layout::Rect;

use super::error::{Result, ToolkitError};
use super::layout;
use super::widget::{Dimension, Widget, WidgetId, WidgetKind};

/// A popup dialog and the widget tree it owns.
///
/// Every widget lives in the dialog's arena; callers only ever hold
/// [`WidgetId`] handles. Deleting a subtree invalidates the handles of all
/// widgets in it.
#[derive(Debug)]
pub struct Dialog {
    widgets: Arena<Widget>,
    root: WidgetId,
    area: Rect,
    layout: HashMap<WidgetId, Rect>,
    batch_depth: usize,
    layout_pending: bool,
    layout_passes: usize,
    opened: bool,
    destroyed: bool,
    focus: Option<WidgetId>,
}

impl Dialog {
    pub(super) fn new() -> Self {
        let mut widgets = Arena::new();
        let root = WidgetId(widgets.insert(Widget::new(WidgetKind::Dialog, None)));
        Self {
            widgets,
            root,
            area: Rect::default(),
            layout: HashMap::new(),
            batch_depth: 0,
            layout_pending: false,
            layout_passes: 0,
            opened: false,
            destroyed: false,
            focus: None,
        }
    }

    pub fn root(&self) -> WidgetId {
        self.root
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains(id.0)
    }

    pub fn get(&self, id: WidgetId) -> Result<&Widget> {
        self.widgets.get(id.0).ok_or(ToolkitError::StaleWidget(id))
    }

    fn get_mut(&mut self, id: WidgetId) -> Result<&mut Widget> {
        self.widgets
            .get_mut(id.0)
            .ok_or(ToolkitError::StaleWidget(id))
    }

    pub fn children(&self, id: WidgetId) -> Result<&[WidgetId]> {
        Ok(&self.get(id)?.children)
    }

    /// Attach a new widget below `parent`. Used by the factory methods.
    pub(super) fn insert(&mut self, parent: WidgetId, kind: WidgetKind) -> Result<WidgetId> {
        if self.destroyed {
            return Err(ToolkitError::Destroyed);
        }
        let parent_widget = self.get(parent)?;
        match parent_widget.kind.child_capacity() {
            Some(0) => {
                return Err(ToolkitError::NotAContainer {
                    kind: parent_widget.kind.name(),
                })
            }
            Some(n) if parent_widget.children.len() >= n => {
                return Err(ToolkitError::ChildSlotTaken {
                    kind: parent_widget.kind.name(),
                })
            }
            _ => {}
        }

        // Content swapped into a replace point of a visible dialog stays
        // hidden until show_child().
        let hidden = self.opened && parent_widget.kind == WidgetKind::ReplacePoint;

        let mut widget = Widget::new(kind, Some(parent));
        widget.shown = !hidden;
        let id = WidgetId(self.widgets.insert(widget));
        self.get_mut(parent)?.children.push(id);
        tracing::trace!(?id, ?parent, "widget created");
        self.changed();
        Ok(id)
    }

    pub fn set_weight(&mut self, id: WidgetId, dim: Dimension, weight: u16) -> Result<()> {
        let widget = self.get_mut(id)?;
        match dim {
            Dimension::Horizontal => widget.hweight = weight,
            Dimension::Vertical => widget.vweight = weight,
        }
        self.changed();
        Ok(())
    }

    /// Delete every child of `id` together with their subtrees.
    pub fn delete_children(&mut self, id: WidgetId) -> Result<()> {
        let children = std::mem::take(&mut self.get_mut(id)?.children);
        let mut stack = children;
        let mut removed = 0;
        while let Some(child) = stack.pop() {
            if let Some(widget) = self.widgets.remove(child.0) {
                stack.extend(widget.children);
                self.layout.remove(&child);
                removed += 1;
            }
        }
        if self.focus.is_some_and(|f| !self.contains(f)) {
            self.focus = None;
        }
        tracing::debug!(?id, removed, "children deleted");
        self.changed();
        Ok(())
    }

    /// Make the content of a replace point visible.
    pub fn show_child(&mut self, replace_point: WidgetId) -> Result<()> {
        let widget = self.get(replace_point)?;
        if widget.kind != WidgetKind::ReplacePoint {
            return Err(ToolkitError::WrongKind {
                expected: WidgetKind::ReplacePoint.name(),
                found: widget.kind.name(),
            });
        }
        for child in widget.children.clone() {
            self.get_mut(child)?.shown = true;
        }
        self.changed();
        Ok(())
    }

    pub fn start_multiple_changes(&mut self) {
        self.batch_depth += 1;
    }

    /// Close a batch scope; the outermost one runs any deferred layout pass.
    pub fn done_multiple_changes(&mut self) -> Result<()> {
        if self.batch_depth == 0 {
            return Err(ToolkitError::UnbalancedBatch);
        }
        self.batch_depth -= 1;
        if self.batch_depth == 0 && self.layout_pending {
            self.run_layout();
        }
        Ok(())
    }

    pub fn in_batch(&self) -> bool {
        self.batch_depth > 0
    }

    pub fn recalc_layout(&mut self) {
        if self.batch_depth > 0 {
            self.layout_pending = true;
        } else {
            self.run_layout();
        }
    }

    fn changed(&mut self) {
        if self.opened {
            self.recalc_layout();
        }
    }

    fn run_layout(&mut self) {
        self.layout = layout::compute(self);
        self.layout_pending = false;
        self.layout_passes += 1;
    }

    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    /// Show the dialog. Widgets created before this are visible right away.
    pub fn open(&mut self) -> Result<()> {
        if self.destroyed {
            return Err(ToolkitError::Destroyed);
        }
        if !self.opened {
            self.opened = true;
            tracing::debug!("dialog opened");
            self.recalc_layout();
        }
        Ok(())
    }

    pub fn set_area(&mut self, area: Rect) {
        if self.area == area {
            return;
        }
        self.area = area;
        self.changed();
    }

    pub fn rect(&self, id: WidgetId) -> Option<Rect> {
        self.layout.get(&id).copied()
    }

    /// Whether the widget and all of its ancestors are shown.
    pub fn is_visible(&self, id: WidgetId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            match self.widgets.get(cur.0) {
                Some(widget) if widget.shown => current = widget.parent,
                _ => return false,
            }
        }
        true
    }

    /// Depth-first walk over visible widgets, parents before children.
    pub fn visible_widgets(&self) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(widget) = self.widgets.get(id.0) else {
                continue;
            };
            if !widget.shown {
                continue;
            }
            out.push(id);
            stack.extend(widget.children.iter().rev().copied());
        }
        out
    }

    pub fn focusable(&self) -> Vec<WidgetId> {
        self.visible_widgets()
            .into_iter()
            .filter(|id| self.get(*id).is_ok_and(|w| w.kind.is_button()))
            .collect()
    }

    /// The focused button, falling back to the first focusable one.
    pub fn focused(&self) -> Option<WidgetId> {
        match self.focus {
            Some(id) if self.is_visible(id) => Some(id),
            _ => self.focusable().first().copied(),
        }
    }

    pub fn set_focus(&mut self, id: WidgetId) -> Result<()> {
        let widget = self.get(id)?;
        if !widget.kind.is_button() {
            return Err(ToolkitError::WrongKind {
                expected: "push button",
                found: widget.kind.name(),
            });
        }
        self.focus = Some(id);
        Ok(())
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, step: isize) {
        let order = self.focusable();
        if order.is_empty() {
            self.focus = None;
            return;
        }
        let len = order.len() as isize;
        let next = match self.focused().and_then(|f| order.iter().position(|id| *id == f)) {
            Some(pos) => (pos as isize + step).rem_euclid(len),
            None => 0,
        };
        self.focus = Some(order[next as usize]);
    }

    /// Visible push button under the given terminal cell.
    pub fn widget_at(&self, column: u16, row: u16) -> Option<WidgetId> {
        self.focusable().into_iter().find(|id| {
            self.rect(*id).is_some_and(|r| {
                column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
            })
        })
    }

    /// Visible push button whose label shortcut is `c`.
    pub fn shortcut_target(&self, c: char) -> Option<WidgetId> {
        self.focusable().into_iter().find(|id| {
            matches!(
                self.get(*id).map(|w| &w.kind),
                Ok(WidgetKind::PushButton { label }) if label.matches(c)
            )
        })
    }

    /// Tear down the widget tree. Every handle becomes stale.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        let count = self.widgets.len();
        self.widgets.clear();
        self.layout.clear();
        self.focus = None;
        self.opened = false;
        self.destroyed = true;
        tracing::debug!(count, "dialog destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_dialog() -> (Dialog, WidgetId, WidgetId) {
        let mut dialog = Dialog::create_popup_dialog();
        let root = dialog.root();
        let vbox = dialog.create_vbox(root).unwrap();
        let rp = dialog.create_replace_point(vbox).unwrap();
        dialog.set_area(Rect::new(0, 0, 80, 24));
        dialog.open().unwrap();
        (dialog, vbox, rp)
    }

    #[test]
    fn test_single_child_containers() {
        let mut dialog = Dialog::create_popup_dialog();
        let root = dialog.root();
        dialog.create_vbox(root).unwrap();
        assert_eq!(
            dialog.create_hbox(root),
            Err(ToolkitError::ChildSlotTaken { kind: "dialog" })
        );
    }

    #[test]
    fn test_leaf_rejects_children() {
        let mut dialog = Dialog::create_popup_dialog();
        let root = dialog.root();
        let vbox = dialog.create_vbox(root).unwrap();
        let label = dialog.create_label(vbox, "Hello").unwrap();
        assert_eq!(
            dialog.create_push_button(label, "x"),
            Err(ToolkitError::NotAContainer { kind: "label" })
        );
    }

    #[test]
    fn test_delete_children_invalidates_handles() {
        let (mut dialog, _, rp) = open_dialog();
        let inner = dialog.create_vbox(rp).unwrap();
        let button = dialog.create_push_button(inner, "Delete Me").unwrap();

        dialog.delete_children(rp).unwrap();
        assert!(!dialog.contains(inner));
        assert!(!dialog.contains(button));
        assert_eq!(dialog.get(button).unwrap_err(), ToolkitError::StaleWidget(button));

        // A new widget may reuse the slot but never the id
        let inner2 = dialog.create_vbox(rp).unwrap();
        let button2 = dialog.create_push_button(inner2, "Delete Me").unwrap();
        assert_ne!(button, button2);
        assert!(!dialog.contains(button));
    }

    #[test]
    fn test_replace_point_content_hidden_until_shown() {
        let (mut dialog, _, rp) = open_dialog();
        let inner = dialog.create_vbox(rp).unwrap();
        let button = dialog.create_push_button(inner, "Delete Me").unwrap();
        assert!(!dialog.is_visible(button));
        assert!(dialog.rect(button).is_none());

        dialog.show_child(rp).unwrap();
        assert!(dialog.is_visible(button));
        assert!(dialog.rect(button).is_some());
    }

    #[test]
    fn test_show_child_requires_replace_point() {
        let (mut dialog, vbox, _) = open_dialog();
        assert_eq!(
            dialog.show_child(vbox),
            Err(ToolkitError::WrongKind {
                expected: "replace point",
                found: "vbox"
            })
        );
    }

    #[test]
    fn test_batch_defers_layout() {
        let (mut dialog, _, rp) = open_dialog();
        let before = dialog.layout_passes();

        dialog.start_multiple_changes();
        dialog.delete_children(rp).unwrap();
        let inner = dialog.create_vbox(rp).unwrap();
        for _ in 0..3 {
            dialog.create_push_button(inner, "Delete Me").unwrap();
        }
        dialog.show_child(rp).unwrap();
        dialog.recalc_layout();
        assert_eq!(dialog.layout_passes(), before);
        dialog.done_multiple_changes().unwrap();

        assert_eq!(dialog.layout_passes(), before + 1);
    }

    #[test]
    fn test_nested_batches() {
        let (mut dialog, vbox, _) = open_dialog();
        let before = dialog.layout_passes();
        dialog.start_multiple_changes();
        dialog.start_multiple_changes();
        dialog.create_label(vbox, "a").unwrap();
        dialog.done_multiple_changes().unwrap();
        assert_eq!(dialog.layout_passes(), before);
        dialog.done_multiple_changes().unwrap();
        assert_eq!(dialog.layout_passes(), before + 1);
        assert_eq!(dialog.done_multiple_changes(), Err(ToolkitError::UnbalancedBatch));
    }

    #[test]
    fn test_focus_cycles_and_recovers() {
        let (mut dialog, vbox, rp) = open_dialog();
        let a = dialog.create_push_button(vbox, "A").unwrap();
        let inner = dialog.create_vbox(rp).unwrap();
        let b = dialog.create_push_button(inner, "B").unwrap();
        dialog.show_child(rp).unwrap();

        // Replace point comes before A in the vbox
        assert_eq!(dialog.focusable(), vec![b, a]);
        assert_eq!(dialog.focused(), Some(b));
        dialog.focus_next();
        assert_eq!(dialog.focused(), Some(a));
        dialog.focus_next();
        assert_eq!(dialog.focused(), Some(b));
        dialog.focus_prev();
        assert_eq!(dialog.focused(), Some(a));

        dialog.set_focus(b).unwrap();
        dialog.delete_children(rp).unwrap();
        assert_eq!(dialog.focused(), Some(a));
    }

    #[test]
    fn test_widget_at_and_shortcut() {
        let (mut dialog, vbox, _) = open_dialog();
        let exit = dialog.create_push_button(vbox, "&Exit").unwrap();
        let rect = dialog.rect(exit).unwrap();
        assert_eq!(dialog.widget_at(rect.x, rect.y), Some(exit));
        assert_eq!(dialog.widget_at(rect.right(), rect.y), None);
        assert_eq!(dialog.shortcut_target('E'), Some(exit));
        assert_eq!(dialog.shortcut_target('x'), None);
    }

    #[test]
    fn test_destroy() {
        let (mut dialog, vbox, _) = open_dialog();
        dialog.destroy();
        assert!(dialog.is_destroyed());
        assert!(!dialog.contains(vbox));
        assert_eq!(dialog.create_label(vbox, "x"), Err(ToolkitError::Destroyed));
        assert_eq!(dialog.open(), Err(ToolkitError::Destroyed));
    }
}
