use crate::app::App;
use ratatui::prelude::*;
use ratatui::widgets::*;

pub fn draw(frame: &mut Frame, _app: &App, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = r#"
Grid:
  j / Down    Scroll down
  k / Up      Scroll up
  h / Left    Scroll left
  l / Right   Scroll right
  d / PgDn    Page down
  u / PgUp    Page up
  g / Home    Back to top
  r           Reload input file
  ?           This help
  q           Quit

Error dialog:
  Esc / Enter Dismiss
  r           Retry the load

Input file: first two tokens are rows and columns, then
rows x cols integers in row-major order. Any whitespace
layout works; line breaks carry no meaning.
"#;
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
