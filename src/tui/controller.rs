use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        // nothing animates, so block until the next key
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                if let Some(action) = action_for(app, key.code) {
                    let _ = app.handle_input(action);
                }
            }
        }
    }
    Ok(())
}

/// Map a key to an action. Help swallows everything but its own toggles.
pub fn action_for(app: &AppState, code: KeyCode) -> Option<InputAction> {
    if app.help_open() {
        return match code {
            KeyCode::Char('?') | KeyCode::Esc => Some(InputAction::ToggleHelp),
            _ => None,
        };
    }
    match code {
        KeyCode::Char('?') => Some(InputAction::ToggleHelp),
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputAction::Reveal),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(InputAction::PlayAgain),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(InputAction::Quit)
        }
        KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}
