use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn dialog_border() -> Style {
        Style::default().fg(Color::Blue)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button_focused() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn shortcut() -> Style {
        Style::default().add_modifier(Modifier::UNDERLINED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_title() -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }

    pub fn status_help() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
