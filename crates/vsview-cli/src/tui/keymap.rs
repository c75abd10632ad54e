use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vsview_runtime::{Command, Focus};

/// Lines moved by PgUp / PgDn in the data pane.
pub const PAGE_LINES: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Nav(Command),
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollTop,
}

/// Translate a key press for the pane that has focus.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Nav(Command::Exit)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Nav(Command::Exit)),
        KeyCode::PageUp => return Some(Action::ScrollUp(PAGE_LINES)),
        KeyCode::PageDown => return Some(Action::ScrollDown(PAGE_LINES)),
        KeyCode::Home => return Some(Action::ScrollTop),
        _ => {}
    }

    match focus {
        Focus::Columns => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Nav(Command::CursorUp)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Nav(Command::CursorDown)),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Nav(Command::MoveLeft)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Nav(Command::MoveRight)),
            KeyCode::Enter => Some(Action::Nav(Command::Activate)),
            KeyCode::Char('s') => Some(Action::Nav(Command::FocusData)),
            _ => None,
        },
        Focus::DataPane => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp(1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown(1)),
            KeyCode::Char('w') => Some(Action::Nav(Command::FocusColumns)),
            _ => None,
        },
    }
}
