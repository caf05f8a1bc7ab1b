use super::app::{InteractiveApp, Screen};
use super::event::{Event, EventHandler};
use crate::logging::{log_debug, log_info};
use crossterm::{
    event::KeyCode,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

pub async fn run_interactive_mode() -> Result<(), Box<dyn std::error::Error>> {
    log_info("Starting interactive mode");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let mut app = InteractiveApp::new().await;
    let events = EventHandler::new(100);

    let result = run_loop(&mut terminal, &mut app, &events).await;

    // Always restore the terminal, even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log_info("Exiting interactive mode");
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut InteractiveApp,
    events: &EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| super::ui::draw(f, app))?;

        match events.recv()? {
            Event::Key(key_event) => {
                let key = key_event.code;
                log_debug(&format!("Key pressed: {:?}, screen: {:?}", key, app.screen));

                if app.popup.is_some() {
                    match key {
                        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                            app.confirm_popup().await;
                        }
                        _ => app.handle_key(key),
                    }
                } else {
                    // Network operations run here; everything else is
                    // synchronous state juggling in the app.
                    match (app.screen, key) {
                        (Screen::SignIn | Screen::SignUp, KeyCode::Enter) => {
                            app.submit_form().await;
                        }
                        (Screen::Surveys, KeyCode::Enter) => app.open_detail().await,
                        (Screen::Surveys, KeyCode::Char('r')) => app.refresh_surveys().await,
                        (Screen::Surveys, KeyCode::Char('o')) => app.sign_out_flow().await,
                        (Screen::Participate, KeyCode::Enter) => app.resolve_code().await,
                        _ => app.handle_key(key),
                    }
                }
            }
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
