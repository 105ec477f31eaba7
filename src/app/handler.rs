use crate::app::action::Action;
use crate::app::state::DemoState;
use crate::toolkit::{DialogEvent, EventType};
use tracing::debug;

/// Decide what a dialog event does to the demo.
///
/// Cancel and Exit terminate. Add grows the dynamic area up to the maximum
/// and adds a spacing once it is full. Remove and any dynamic button shrink
/// it by one.
pub fn handle_event(state: &DemoState, event: DialogEvent) -> Vec<Action> {
    if event.event_type() == EventType::Cancel {
        debug!("cancel event");
        return vec![Action::Quit];
    }
    let Some(widget) = event.widget() else {
        return vec![];
    };

    let fixed = &state.widgets;
    let count = state.count();

    if widget == fixed.exit {
        return vec![Action::Quit];
    }

    if widget == fixed.add {
        if count < state.max_buttons() {
            return vec![Action::Rebuild {
                count: count + 1,
                spacer: false,
            }];
        }
        return vec![Action::Rebuild {
            count,
            spacer: true,
        }];
    }

    if widget == fixed.remove {
        if count > 0 {
            return vec![Action::Rebuild {
                count: count - 1,
                spacer: false,
            }];
        }
        return vec![];
    }

    if let Some(index) = state.buttons().iter().position(|b| *b == widget) {
        debug!(index, "dynamic button pressed");
        return vec![Action::Rebuild {
            count: count - 1,
            spacer: false,
        }];
    }

    debug!(?widget, "event ignored");
    vec![]
}
