use crate::toolkit::{Dialog, Shortcut, WidgetKind};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph};

/// Draw every visible widget of `dialog` at its computed position.
pub fn render(frame: &mut Frame, dialog: &Dialog, title: &str) {
    let focused = dialog.focused();

    for id in dialog.visible_widgets() {
        let Some(area) = dialog.rect(id) else {
            continue;
        };
        let Ok(widget) = dialog.get(id) else {
            continue;
        };

        match &widget.kind {
            WidgetKind::Dialog => {
                frame.render_widget(Clear, area);
                let block = Block::bordered()
                    .title(format!(" {} ", title))
                    .title_style(Theme::title())
                    .border_style(Theme::dialog_border());
                frame.render_widget(block, area);
            }
            WidgetKind::Frame { label } => {
                let block = Block::bordered()
                    .title(format!(" {} ", label))
                    .title_style(Theme::title())
                    .border_style(Theme::border());
                frame.render_widget(block, area);
            }
            WidgetKind::Label { text } => {
                frame.render_widget(Paragraph::new(text.as_str()).style(Theme::label()), area);
            }
            WidgetKind::PushButton { label } => {
                let is_focused = focused == Some(id);
                let (style, border) = if is_focused {
                    (Theme::button_focused(), Theme::border_focused())
                } else {
                    (Theme::button(), Theme::border())
                };
                let paragraph = Paragraph::new(button_line(label, style))
                    .alignment(Alignment::Center)
                    .block(Block::bordered().border_style(border));
                frame.render_widget(paragraph, area);
            }
            WidgetKind::HBox
            | WidgetKind::VBox
            | WidgetKind::ReplacePoint
            | WidgetKind::Spacing { .. } => {}
        }
    }
}

/// Button caption with the shortcut character underlined.
fn button_line(label: &Shortcut, style: Style) -> Line<'static> {
    let Some(pos) = label.position else {
        return Line::from(Span::styled(label.text.clone(), style));
    };
    let before: String = label.text.chars().take(pos).collect();
    let key: String = label.text.chars().skip(pos).take(1).collect();
    let after: String = label.text.chars().skip(pos + 1).collect();
    Line::from(vec![
        Span::styled(before, style),
        Span::styled(key, style.patch(Theme::shortcut())),
        Span::styled(after, style),
    ])
}
