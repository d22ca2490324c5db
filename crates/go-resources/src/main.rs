use anyhow::{Context, Result};
use browser_launcher::{Launcher, SystemLauncher};
use go_resources_config::AppConfig;
use go_resources_theme::Theme;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;

mod actions;
mod catalog;
mod command_id;
mod dispatcher;
mod input;
mod keybindings;
mod layout;
mod logger;
mod middleware;
mod reducer;
mod reducers;
mod state;
mod store;
#[cfg(test)]
mod testing;
mod view_models;
mod views;

use actions::Action;
use catalog::Catalog;
use input::InputEvent;
use middleware::{BrowserMiddleware, KeyboardMiddleware, LoggingMiddleware, MouseMiddleware};
use state::AppState;
use store::Store;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() {
    if let Err(err) = run() {
        log::error!("Fatal error: {:#}", err);
        eprintln!("Application startup error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let (config, config_warning) = AppConfig::load();

    if let Some(log_file) = logger::init(config.log_level.as_deref())? {
        log::info!("Logging to {}", log_file.display());
    }
    if let Some(warning) = config_warning {
        log::warn!("{}", warning);
    }
    log::info!("Starting go-resources");
    log::debug!("Config: {:?}", config);

    let mut terminal = setup_terminal(config.mouse_capture)?;

    let state = AppState::new(Catalog::go_resources(), Theme::default());
    let mut store = create_store(state, Box::new(SystemLauncher::new()));

    // Main event loop
    let result = run_app(&mut terminal, &mut store, event::read);

    // Restore terminal even if the loop failed
    let restored = restore_terminal(&mut terminal);
    result?;
    restored?;

    log::info!("Exiting go-resources");
    Ok(())
}

/// Build the store with middleware in execution order
fn create_store(state: AppState, launcher: Box<dyn Launcher>) -> Store {
    let mut store = Store::new(state);
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(MouseMiddleware::new()));
    store.add_middleware(Box::new(BrowserMiddleware::new(launcher)));
    store
}

fn setup_terminal(mouse_capture: bool) -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    let entered = if mouse_capture {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(stdout, EnterAlternateScreen)
    };

    let terminal = entered
        .context("Failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
        });

    if terminal.is_err() {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    }
    terminal
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Draw, then block on `next_event` until the store stops running
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    store: &mut Store,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> Result<()> {
    draw(terminal, store)?;

    loop {
        let event = next_event().context("Failed to read terminal input")?;

        // Resizes and ignored events still redraw, nothing else changes
        if let Some(input) = InputEvent::from_terminal(event) {
            store.dispatch(Action::Input(input));
        }

        // Quit renders nothing further
        if !store.state().running {
            break;
        }

        draw(terminal, store)?;
    }

    Ok(())
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, store: &Store) -> Result<()> {
    terminal
        .draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })
        .context("Failed to draw menu")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingLauncher;
    use ratatui::{
        backend::TestBackend,
        buffer::Buffer,
        crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    };
    use std::collections::VecDeque;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_quit_leaves_loop_without_reading_or_redrawing() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let (mut store, _launcher) = RecordingLauncher::store();
        let mut events: VecDeque<Event> = [
            press(KeyCode::Down),
            press(KeyCode::Char('q')),
            press(KeyCode::Down),
        ]
        .into();

        run_app(&mut terminal, &mut store, || {
            events
                .pop_front()
                .ok_or_else(|| io::Error::other("no more events"))
        })
        .unwrap();

        assert!(!store.state().running);
        assert_eq!(events.len(), 1, "event after quit must not be read");

        // Last frame is the one drawn after Down, nothing after quit
        let buffer = terminal.backend().buffer();
        assert_eq!(row(buffer, 3), "    Go.dev");
        assert_eq!(row(buffer, 6), "  ► Go by Example");
    }

    #[test]
    fn test_read_error_is_propagated() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let (mut store, _launcher) = RecordingLauncher::store();

        let err = run_app(&mut terminal, &mut store, || {
            Err(io::Error::other("terminal gone"))
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "Failed to read terminal input");
        assert!(store.state().running);
    }
}
