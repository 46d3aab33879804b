use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use pagereel_core::AppConfig;
use pagereel_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    widgets::{DeckWidget, HelpWidget, StatusBarWidget},
};

pub fn run(config: AppConfig) -> Result<()> {
    tracing::info!("starting TUI with {} cards", config.deck.card_count);

    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Pagereel")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state and size it to the terminal
    let mut app = App::with_demo_deck(config);
    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);

    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_fps(
        app.config.ui.tick_rate_ms,
        app.config.ui.scroll.animation_fps,
    );

    let result = run_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    loop {
        // Advance animations and wheel snapping
        app.update(Instant::now());

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: deck + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            DeckWidget::render(frame, main_layout[0], app);
            StatusBarWidget::render(frame, main_layout[1], app);

            // Help popup on top
            if app.mode == Mode::Help {
                HelpWidget::render(frame, size, app);
            }
        })?;

        // Handle events (faster tick rate while animating or dragging)
        if let Some(event) = event_handler.next(app.needs_fast_update())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    apply_action(app, action);
                }
                AppEvent::Mouse(mouse) => {
                    app.handle_mouse(mouse, Instant::now());
                }
                AppEvent::Resize(width, height) => {
                    app.handle_resize(width, height);
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn apply_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::NextPage => app.next_page(),
        Action::PrevPage => app.prev_page(),
        Action::FlickForward => app.flick(1.0),
        Action::FlickBackward => app.flick(-1.0),
        Action::FirstPage => app.first_page(),
        Action::LastPage => app.last_page(),
        Action::ToggleHelp => app.toggle_help(),
        Action::ExitMode => {
            if app.mode == Mode::Help {
                app.toggle_help();
            } else {
                app.clear_status();
            }
        }
        Action::None => {}
    }
}
