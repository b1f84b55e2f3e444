//! Centered error dialog shown when a load fails.

use ratatui::prelude::*;
use ratatui::widgets::*;

/// Modal rectangle sized to the wrapped message (plus the blank line and
/// key hint), clamped to the frame.
fn modal_area(message: &str, area: Rect) -> Rect {
    let width = 56.min(area.width.saturating_sub(4)).max(3);
    let inner_width = usize::from(width - 2).max(1);
    let message_lines = message.len().div_ceil(inner_width) as u16;
    // Borders, message, blank line, key hint.
    let height = (message_lines + 4).min(area.height.saturating_sub(4)).max(3);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn draw(frame: &mut Frame, message: &str, area: Rect) {
    let block_area = modal_area(message, area);
    let block = Block::default()
        .title(" Erro ao ler matriz ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(Color::Black).fg(Color::White));
    let inner = block.inner(block_area);
    frame.render_widget(Clear, block_area);
    frame.render_widget(block, block_area);

    let lines = vec![
        Line::from(message.to_string()).style(Style::default().fg(Color::Red)),
        Line::from(""),
        Line::from("  Esc = dismiss   r = retry   q = quit"),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
