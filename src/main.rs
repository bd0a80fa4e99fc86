mod app;
mod config;
mod focus;
mod logging;
mod store;
mod ui;

use crate::app::dispatch;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::config::UiConfig;
use crate::focus::{FocusWidget, WidgetContext};
use crate::store::{FileStore, KeyValueStore};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    let log_path = logging::init_logging(&cfg.logging)?;

    if !config::config_path().exists() {
        if let Err(e) = config::save_config(&cfg) {
            warn!(error = %e, "could not write starter config");
        }
    }

    let store = FileStore::new(config::store_path(&cfg));
    info!(
        version = env!("CARGO_PKG_VERSION"),
        store = %store.path().display(),
        log = ?log_path,
        "starting"
    );
    let widget = FocusWidget::new(WidgetContext::from_config(&cfg), store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, widget, &cfg.ui).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("exiting");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut widget: FocusWidget<S>,
    ui_cfg: &UiConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(widget.blank_view(), ui_cfg);
    let size = terminal.size()?;
    state.viewport = Rect::new(0, 0, size.width, size.height);

    // Load-time read; on failure the form stays up with a notice.
    if let Err(e) = widget.initialize(&mut state.view) {
        warn!(error = %e, "initial read failed");
        state.error_notice(dispatch::failure_notice("read", &e));
    }

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    let tick_rate = Duration::from_millis(ui_cfg.tick_rate_ms.max(10));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);
        for action in actions {
            dispatch::apply_action(&mut widget, &mut state, action);
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
