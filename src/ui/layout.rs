use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ScreenLayout {
    pub dialog: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> ScreenLayout {
    // Main vertical split: dialog area | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Dialog
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        dialog: chunks[0],
        status_bar: chunks[1],
    }
}
