mod dialog;
mod grid;
mod help;

use crate::app::App;

pub fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.size();
    if app.show_help {
        help::draw(frame, app, area);
        return;
    }
    grid::draw(frame, app, area);
    if let Some(message) = &app.error {
        dialog::draw(frame, message, area);
    }
}
