//! Terminal input to dialog events.

use crate::app::event::AppEvent;
use crate::toolkit::{Dialog, DialogEvent};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Turn an input event into a dialog event. Focus movement is applied to
/// `dialog` directly and yields no event. Resizes are handled by the caller.
pub fn translate(dialog: &mut Dialog, event: AppEvent) -> Option<DialogEvent> {
    match event {
        AppEvent::InputClosed => Some(DialogEvent::Cancel),
        AppEvent::Terminal(CEvent::Key(key)) => handle_key(dialog, key),
        AppEvent::Terminal(CEvent::Mouse(mouse)) => handle_mouse(dialog, mouse),
        AppEvent::Terminal(_) => None,
    }
}

fn handle_key(dialog: &mut Dialog, key: KeyEvent) -> Option<DialogEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(DialogEvent::Cancel);
    }

    match key.code {
        KeyCode::Esc => Some(DialogEvent::Cancel),
        KeyCode::Tab | KeyCode::Down | KeyCode::Right => {
            dialog.focus_next();
            None
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Left => {
            dialog.focus_prev();
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => dialog.focused().map(DialogEvent::Activated),
        KeyCode::Char(c) => {
            let target = dialog.shortcut_target(c)?;
            dialog.set_focus(target).ok()?;
            Some(DialogEvent::Activated(target))
        }
        _ => None,
    }
}

fn handle_mouse(dialog: &mut Dialog, mouse: MouseEvent) -> Option<DialogEvent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let target = dialog.widget_at(mouse.column, mouse.row)?;
    dialog.set_focus(target).ok()?;
    Some(DialogEvent::Activated(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DemoState;
    use crate::config::AppConfig;
    use ratatui::layout::Rect;

    fn open_state() -> DemoState {
        let mut state = DemoState::new(&AppConfig::default()).unwrap();
        state.dialog.set_area(Rect::new(0, 0, 100, 40));
        state.dialog.open().unwrap();
        state
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, modifiers)))
    }

    fn left_click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn test_cancel_keys() {
        let mut state = open_state();
        let d = &mut state.dialog;
        assert_eq!(
            translate(d, key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(DialogEvent::Cancel)
        );
        assert_eq!(
            translate(d, key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(DialogEvent::Cancel)
        );
        assert_eq!(translate(d, AppEvent::InputClosed), Some(DialogEvent::Cancel));
    }

    #[test]
    fn test_tab_then_enter_activates_focused() {
        let mut state = open_state();
        let widgets = state.widgets;
        let d = &mut state.dialog;

        assert_eq!(
            translate(d, key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(DialogEvent::Activated(widgets.add))
        );
        assert_eq!(translate(d, key(KeyCode::Tab, KeyModifiers::NONE)), None);
        assert_eq!(
            translate(d, key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(DialogEvent::Activated(widgets.remove))
        );
        translate(d, key(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(d.focused(), Some(widgets.add));
    }

    #[test]
    fn test_shortcut_activates_exit() {
        let mut state = open_state();
        let exit = state.widgets.exit;
        let d = &mut state.dialog;
        assert_eq!(
            translate(d, key(KeyCode::Char('e'), KeyModifiers::ALT)),
            Some(DialogEvent::Activated(exit))
        );
        assert_eq!(d.focused(), Some(exit));
        assert_eq!(translate(d, key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_click_on_button() {
        let mut state = open_state();
        let remove = state.widgets.remove;
        let rect = state.dialog.rect(remove).unwrap();
        let d = &mut state.dialog;

        assert_eq!(
            translate(d, left_click(rect.x + 1, rect.y + 1)),
            Some(DialogEvent::Activated(remove))
        );
        assert_eq!(d.focused(), Some(remove));

        // Outside the dialog nothing happens
        assert_eq!(translate(d, left_click(0, 0)), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut state = open_state();
        let mut event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(
            translate(&mut state.dialog, AppEvent::Terminal(CEvent::Key(event))),
            None
        );
    }
}
