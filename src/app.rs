//! App state machine and navigation.

use crate::data::load_matrix;
use crate::error::LoadError;
use crate::event::{handle_key, Action, View};
use crate::types::Matrix;
use std::path::PathBuf;

pub struct App {
    pub input_path: PathBuf,
    pub matrix: Option<Matrix>,
    pub error: Option<String>,
    pub scroll_row: u16,
    pub scroll_col: u16,
    pub show_help: bool,
}

impl App {
    pub fn new(input_path: PathBuf, result: Result<Matrix, LoadError>) -> Self {
        let mut app = Self {
            input_path,
            matrix: None,
            error: None,
            scroll_row: 0,
            scroll_col: 0,
            show_help: false,
        };
        app.set_result(result);
        app
    }

    /// Replace all load state with a fresh result. The previous matrix is
    /// discarded whether the new load succeeded or not.
    pub fn set_result(&mut self, result: Result<Matrix, LoadError>) {
        self.scroll_row = 0;
        self.scroll_col = 0;
        match result {
            Ok(matrix) => {
                self.matrix = Some(matrix);
                self.error = None;
            }
            Err(e) => {
                self.matrix = None;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn reload(&mut self) {
        let result = load_matrix(&self.input_path);
        self.set_result(result);
    }

    fn active_view(&self) -> View {
        if self.show_help {
            View::Help
        } else if self.error.is_some() {
            View::Dialog
        } else {
            View::Grid
        }
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let mut quit = false;
        match action {
            Action::Quit => quit = true,
            Action::ScrollUp => self.scroll_row = self.scroll_row.saturating_sub(1),
            Action::ScrollDown => self.scroll_row = self.scroll_row.saturating_add(1),
            Action::ScrollLeft => self.scroll_col = self.scroll_col.saturating_sub(1),
            Action::ScrollRight => self.scroll_col = self.scroll_col.saturating_add(1),
            Action::PageUp => self.scroll_row = self.scroll_row.saturating_sub(20),
            Action::PageDown => self.scroll_row = self.scroll_row.saturating_add(20),
            Action::Top => {
                self.scroll_row = 0;
                self.scroll_col = 0;
            }
            Action::Reload => self.reload(),
            Action::Help => self.show_help = !self.show_help,
            Action::Back => {
                if self.show_help {
                    self.show_help = false;
                } else if self.error.is_some() {
                    self.error = None;
                }
            }
            Action::None => {}
        }
        quit
    }

    pub fn on_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        let action = handle_key(key, self.active_view());
        self.dispatch(action)
    }
}
