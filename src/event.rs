//! Input handling and actions.

use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Grid,
    Dialog,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    None,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
    PageUp,
    PageDown,
    Top,
    Reload,
    Help,
    Back,
}

pub fn handle_key(key: KeyEvent, view: View) -> Action {
    let code = key.code;
    match view {
        View::Grid => match code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Char('h') | KeyCode::Left => Action::ScrollLeft,
            KeyCode::Char('l') | KeyCode::Right => Action::ScrollRight,
            KeyCode::PageDown | KeyCode::Char('d') => Action::PageDown,
            KeyCode::PageUp | KeyCode::Char('u') => Action::PageUp,
            KeyCode::Char('g') | KeyCode::Home => Action::Top,
            KeyCode::Char('r') => Action::Reload,
            KeyCode::Char('?') => Action::Help,
            KeyCode::Esc => Action::Back,
            _ => Action::None,
        },
        View::Dialog => match code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('r') => Action::Reload,
            KeyCode::Esc | KeyCode::Enter => Action::Back,
            _ => Action::None,
        },
        View::Help => match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Action::Back,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn grid_keys_map_to_scrolling() {
        assert_eq!(handle_key(key(KeyCode::Char('j')), View::Grid), Action::ScrollDown);
        assert_eq!(handle_key(key(KeyCode::Up), View::Grid), Action::ScrollUp);
        assert_eq!(handle_key(key(KeyCode::Char('l')), View::Grid), Action::ScrollRight);
    }

    #[test]
    fn dialog_only_allows_dismiss_reload_quit() {
        assert_eq!(handle_key(key(KeyCode::Esc), View::Dialog), Action::Back);
        assert_eq!(handle_key(key(KeyCode::Char('r')), View::Dialog), Action::Reload);
        assert_eq!(handle_key(key(KeyCode::Char('j')), View::Dialog), Action::None);
    }
}
