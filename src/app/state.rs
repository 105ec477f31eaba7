use crate::app::action::Action;
use crate::config::AppConfig;
use crate::toolkit::{Application, Dialog, Dimension, WidgetId};
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

/// Handles to the fixed widgets the event loop reacts to.
#[derive(Debug, Clone, Copy)]
pub struct DemoWidgets {
    pub add: WidgetId,
    pub remove: WidgetId,
    pub exit: WidgetId,
    pub replace_point: WidgetId,
}

#[derive(Debug)]
pub struct DemoState {
    pub application: Application,
    pub dialog: Dialog,
    pub widgets: DemoWidgets,
    pub run_state: RunState,
    /// Live dynamic buttons, in display order. Its length is the button count.
    buttons: Vec<WidgetId>,
    spacer: Option<WidgetId>,
    max_buttons: usize,
    button_label: String,
}

impl DemoState {
    /// Set up the application object and build the static widget tree.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut application = Application::new();
        application.set_application_title(&config.application.title);
        application.set_application_icon(&config.application.icon);

        let mut dialog = Dialog::create_popup_dialog();
        let root = dialog.root();
        let frame = dialog.create_frame(root, "Test frame")?;
        let hbox = dialog.create_hbox(frame)?;
        let lframe = dialog.create_frame(hbox, "Left frame")?;
        let rframe = dialog.create_frame(hbox, "Right frame")?;
        let replace_point = dialog.create_replace_point(rframe)?;
        dialog.create_vbox(replace_point)?;

        let vbox = dialog.create_vbox(lframe)?;
        dialog.set_weight(lframe, Dimension::Horizontal, 25)?;
        dialog.set_weight(rframe, Dimension::Horizontal, 75)?;
        dialog.create_label(vbox, "Hello, World!")?;
        let add = dialog.create_push_button(vbox, "Add Button")?;
        let remove = dialog.create_push_button(vbox, "Remove Button")?;
        let exit = dialog.create_push_button(vbox, "&Exit")?;
        dialog.create_spacing(vbox, Dimension::Vertical, true, 1.0)?;

        info!(
            title = %application.title(),
            icon = ?application.icon(),
            "dialog built"
        );

        Ok(Self {
            application,
            dialog,
            widgets: DemoWidgets {
                add,
                remove,
                exit,
                replace_point,
            },
            run_state: RunState::Running,
            buttons: Vec::new(),
            spacer: None,
            max_buttons: config.demo.max_buttons(),
            button_label: config.demo.button_label.clone(),
        })
    }

    pub fn count(&self) -> usize {
        self.buttons.len()
    }

    pub fn buttons(&self) -> &[WidgetId] {
        &self.buttons
    }

    pub fn spacer(&self) -> Option<WidgetId> {
        self.spacer
    }

    pub fn max_buttons(&self) -> usize {
        self.max_buttons
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Rebuild { count, spacer } => self.rebuild(count, spacer),
            Action::Quit => {
                info!("terminating");
                self.run_state = RunState::Terminated;
                Ok(())
            }
        }
    }

    /// Throw away the dynamic area and recreate it with `count` buttons.
    ///
    /// All handles from the previous rebuild become stale. The whole
    /// sequence runs inside one batch, so layout is computed once.
    pub fn rebuild(&mut self, count: usize, with_spacer: bool) -> Result<()> {
        let count = count.min(self.max_buttons);
        let rp = self.widgets.replace_point;

        self.dialog.start_multiple_changes();
        let result = self.populate(rp, count, with_spacer);
        self.dialog.done_multiple_changes()?;
        result?;

        debug!(count, spacer = with_spacer, "dynamic area rebuilt");
        Ok(())
    }

    fn populate(&mut self, rp: WidgetId, count: usize, with_spacer: bool) -> Result<()> {
        self.dialog.delete_children(rp)?;
        self.buttons.clear();
        self.spacer = None;

        let vbox = self.dialog.create_vbox(rp)?;
        for _ in 0..count {
            let button = self.dialog.create_push_button(vbox, &self.button_label)?;
            self.buttons.push(button);
        }
        if with_spacer {
            let spacer = self
                .dialog
                .create_spacing(vbox, Dimension::Vertical, false, 1.0)?;
            self.spacer = Some(spacer);
        }
        self.dialog.show_child(rp)?;
        self.dialog.recalc_layout();
        Ok(())
    }

    pub fn status_line(&self) -> String {
        let mut line = format!("Buttons: {}/{}", self.count(), self.max_buttons);
        if self.spacer.is_some() {
            line.push_str(" (full)");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::WidgetKind;
    use ratatui::layout::Rect;

    fn open_state() -> DemoState {
        let mut state = DemoState::new(&AppConfig::default()).unwrap();
        state.dialog.set_area(Rect::new(0, 0, 100, 40));
        state.dialog.open().unwrap();
        state
    }

    #[test]
    fn test_static_tree() {
        let state = DemoState::new(&AppConfig::default()).unwrap();
        let dialog = &state.dialog;
        let frame = dialog.children(dialog.root()).unwrap()[0];
        assert!(matches!(
            &dialog.get(frame).unwrap().kind,
            WidgetKind::Frame { label } if label == "Test frame"
        ));
        let hbox = dialog.children(frame).unwrap()[0];
        let frames = dialog.children(hbox).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(dialog.get(frames[0]).unwrap().hweight, 25);
        assert_eq!(dialog.get(frames[1]).unwrap().hweight, 75);

        let rp = state.widgets.replace_point;
        assert_eq!(dialog.children(frames[1]).unwrap(), &[rp]);
        assert_eq!(dialog.children(rp).unwrap().len(), 1);
        assert_eq!(state.count(), 0);
        assert!(state.is_running());
    }

    #[test]
    fn test_rebuild_creates_buttons() {
        let mut state = open_state();
        state.rebuild(3, false).unwrap();
        assert_eq!(state.count(), 3);
        assert!(state.spacer().is_none());
        for button in state.buttons() {
            assert!(state.dialog.is_visible(*button));
            assert!(matches!(
                &state.dialog.get(*button).unwrap().kind,
                WidgetKind::PushButton { label } if label.text == "Delete Me"
            ));
        }
        let vbox = state.dialog.children(state.widgets.replace_point).unwrap()[0];
        assert_eq!(state.dialog.children(vbox).unwrap(), state.buttons());
    }

    #[test]
    fn test_rebuild_invalidates_previous_handles() {
        let mut state = open_state();
        state.rebuild(2, false).unwrap();
        let old = state.buttons().to_vec();
        state.rebuild(2, false).unwrap();
        for id in old {
            assert!(!state.dialog.contains(id));
            assert!(!state.buttons().contains(&id));
        }
    }

    #[test]
    fn test_rebuild_runs_one_layout_pass() {
        let mut state = open_state();
        let before = state.dialog.layout_passes();
        state.rebuild(4, true).unwrap();
        assert_eq!(state.dialog.layout_passes(), before + 1);
        assert!(!state.dialog.in_batch());
    }

    #[test]
    fn test_rebuild_with_spacer() {
        let mut state = open_state();
        state.rebuild(6, true).unwrap();
        let spacer = state.spacer().unwrap();
        let vbox = state.dialog.children(state.widgets.replace_point).unwrap()[0];
        let children = state.dialog.children(vbox).unwrap();
        assert_eq!(children.len(), 7);
        assert_eq!(children.last(), Some(&spacer));
        assert!(matches!(
            state.dialog.get(spacer).unwrap().kind,
            WidgetKind::Spacing {
                dim: Dimension::Vertical,
                stretchable: false,
                ..
            }
        ));
        assert_eq!(state.status_line(), "Buttons: 6/6 (full)");
    }

    #[test]
    fn test_quit_action() {
        let mut state = open_state();
        state.apply(Action::Quit).unwrap();
        assert_eq!(state.run_state, RunState::Terminated);
    }
}
