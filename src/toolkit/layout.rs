//! Geometry for the widget tree, built on `ratatui`'s constraint solver.

use std::collections::HashMap;

use ratatui::layout::{Constraint, Layout, Margin, Rect};

use super::dialog::Dialog;
use super::widget::{Dimension, WidgetId, WidgetKind};

const BUTTON_HEIGHT: u16 = 3;
const MIN_POPUP_WIDTH: u16 = 60;

/// Compute the rectangle of every visible widget.
pub(super) fn compute(dialog: &Dialog) -> HashMap<WidgetId, Rect> {
    let mut out = HashMap::new();
    let root = dialog.root();
    let area = popup_area(dialog.area(), preferred_height(dialog, root));
    place(dialog, root, area, &mut out);
    out
}

/// Center a popup of the preferred height inside `area`.
pub fn popup_area(area: Rect, height: u16) -> Rect {
    let width = area.width.min(MIN_POPUP_WIDTH.max(area.width / 4 * 3));
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn preferred_height(dialog: &Dialog, id: WidgetId) -> u16 {
    let Ok(widget) = dialog.get(id) else {
        return 0;
    };
    if !widget.shown {
        return 0;
    }
    let children = widget
        .children
        .iter()
        .map(|child| preferred_height(dialog, *child));

    match &widget.kind {
        WidgetKind::Label { .. } => 1,
        WidgetKind::PushButton { .. } => BUTTON_HEIGHT,
        WidgetKind::Spacing {
            dim: Dimension::Vertical,
            stretchable: false,
            size,
        } => size.ceil().max(0.0) as u16,
        WidgetKind::Spacing { .. } => 0,
        WidgetKind::VBox => children.fold(0u16, |acc, h| acc.saturating_add(h)),
        WidgetKind::HBox | WidgetKind::ReplacePoint => children.max().unwrap_or(0),
        WidgetKind::Dialog | WidgetKind::Frame { .. } => {
            children.max().unwrap_or(0).saturating_add(2)
        }
    }
}

fn place(dialog: &Dialog, id: WidgetId, area: Rect, out: &mut HashMap<WidgetId, Rect>) {
    let Ok(widget) = dialog.get(id) else {
        return;
    };
    if !widget.shown {
        return;
    }
    out.insert(id, area);

    match &widget.kind {
        WidgetKind::Dialog | WidgetKind::Frame { .. } => {
            let inner = area.inner(Margin::new(1, 1));
            for child in &widget.children {
                place(dialog, *child, inner, out);
            }
        }
        WidgetKind::ReplacePoint => {
            for child in &widget.children {
                place(dialog, *child, area, out);
            }
        }
        WidgetKind::HBox => {
            let children = shown_children(dialog, &widget.children);
            let constraints: Vec<Constraint> = children
                .iter()
                .map(|child| {
                    let weight = dialog
                        .get(*child)
                        .map(|w| w.weight(Dimension::Horizontal))
                        .unwrap_or(0);
                    Constraint::Fill(weight.max(1))
                })
                .collect();
            let chunks = Layout::horizontal(constraints).split(area);
            for (child, rect) in children.iter().zip(chunks.iter()) {
                place(dialog, *child, *rect, out);
            }
        }
        WidgetKind::VBox => {
            let children = shown_children(dialog, &widget.children);
            let mut stretches = false;
            let mut constraints: Vec<Constraint> = children
                .iter()
                .map(|child| match dialog.get(*child).map(|w| &w.kind) {
                    Ok(WidgetKind::Spacing {
                        dim: Dimension::Vertical,
                        stretchable: true,
                        ..
                    }) => {
                        stretches = true;
                        Constraint::Fill(1)
                    }
                    _ => Constraint::Length(preferred_height(dialog, *child)),
                })
                .collect();
            if !stretches {
                // Pack to the top
                constraints.push(Constraint::Fill(1));
            }
            let chunks = Layout::vertical(constraints).split(area);
            for (child, rect) in children.iter().zip(chunks.iter()) {
                place(dialog, *child, *rect, out);
            }
        }
        WidgetKind::Label { .. } | WidgetKind::PushButton { .. } | WidgetKind::Spacing { .. } => {}
    }
}

fn shown_children(dialog: &Dialog, children: &[WidgetId]) -> Vec<WidgetId> {
    children
        .iter()
        .copied()
        .filter(|child| dialog.get(*child).is_ok_and(|w| w.shown))
        .collect()
}
