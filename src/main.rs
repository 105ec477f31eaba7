mod app;
mod config;
mod logging;
mod toolkit;
mod ui;

use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::input;
use crate::app::state::DemoState;
use crate::toolkit::DialogEvent;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event as CEvent, EventStream},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{self, Stdout};
use tokio::sync::mpsc;
use tracing::info;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    let log_path = logging::init(&cfg.logging, &config::data_dir())?;
    if let Some(path) = &log_path {
        info!(path = %path.display(), "logging started");
    }

    let mut state = DemoState::new(&cfg)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(state.application.title())
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut state).await;

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "demo failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, state: &mut DemoState) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal input task
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if event_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) | None => {
                    let _ = event_tx.send(AppEvent::InputClosed);
                    break;
                }
            }
        }
    });

    let size = terminal.size()?;
    state
        .dialog
        .set_area(ui::dialog_area(Rect::new(0, 0, size.width, size.height)));
    state.dialog.open()?;

    while state.is_running() {
        let event = wait_for_event(terminal, state, &mut event_rx).await?;
        for action in handler::handle_event(state, event) {
            state.apply(action)?;
        }
    }

    state.dialog.destroy();
    Ok(())
}

/// Redraw and block until input produces a dialog event.
async fn wait_for_event(
    terminal: &mut Tui,
    state: &mut DemoState,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<DialogEvent> {
    loop {
        let view: &DemoState = state;
        terminal.draw(|f| ui::render(f, view))?;

        let Some(event) = event_rx.recv().await else {
            return Ok(DialogEvent::Cancel);
        };
        if let AppEvent::Terminal(CEvent::Resize(width, height)) = event {
            state
                .dialog
                .set_area(ui::dialog_area(Rect::new(0, 0, width, height)));
            continue;
        }
        if let Some(dialog_event) = input::translate(&mut state.dialog, event) {
            return Ok(dialog_event);
        }
    }
}
