mod dialog_view;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::state::DemoState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &DemoState) {
    let screen = layout::compute_layout(frame.area());

    dialog_view::render(frame, &state.dialog, state.application.title());
    status_bar::render(frame, screen.status_bar, state);
}

/// Area the dialog may occupy on a terminal of the given size.
pub fn dialog_area(terminal: Rect) -> Rect {
    layout::compute_layout(terminal).dialog
}
