use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use fadelabel_core::AppConfig;
use fadelabel_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{LabelPanelWidget, StatusBarWidget},
};

/// Longest wait between frames while nothing animates
const IDLE_TICK: Duration = Duration::from_secs(1);

/// Frames a status message stays on screen
const STATUS_FRAMES: u32 = 90;

pub fn run(config: AppConfig) -> Result<()> {
    info!(labels = config.labels.len(), theme = %config.ui.theme, "Starting label demo");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("fadelabel"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    let mut app = App::new(config);

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    let mut last_frame = Instant::now();
    let mut status_age = 0u32;

    loop {
        let now = Instant::now();
        let elapsed = now - last_frame;
        last_frame = now;

        app.tick();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: labels + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            LabelPanelWidget::render(frame, main_layout[0], app, elapsed);
            StatusBarWidget::render(frame, main_layout[1], app);
        })?;

        if app.status_message.is_some() {
            status_age += 1;
            if status_age > STATUS_FRAMES {
                app.clear_status();
                status_age = 0;
            }
        }

        // Poll fast while a label animates, otherwise only for the clock
        let timeout = if app.needs_refresh() || app.status_message.is_some() {
            event_handler.tick_rate()
        } else {
            IDLE_TICK
        };

        if let Some(event) = event_handler.next(timeout)? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    app.apply(action);
                    status_age = 0;
                }
                AppEvent::Resize(_, _) => {
                    terminal.autoresize()?;
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
