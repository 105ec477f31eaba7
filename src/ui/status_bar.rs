use crate::app::state::DemoState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HELP: &str = "Tab: focus  Enter: press  Esc: quit";

pub fn render(frame: &mut Frame, area: Rect, state: &DemoState) {
    let mut parts: Vec<Span> = Vec::new();

    let title = state.application.title();
    if !title.is_empty() {
        parts.push(Span::styled(format!(" [{}] ", title), Theme::status_title()));
    }

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let help = format!(" {} ", HELP);
    let remaining = (area.width as usize).saturating_sub(used + help.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(help, Theme::status_help()));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
