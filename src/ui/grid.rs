use crate::app::App;
use crate::types::Matrix;
use ratatui::prelude::*;
use ratatui::widgets::*;

fn matrix_lines(matrix: &Matrix) -> Vec<Line<'static>> {
    // Right-align every entry to the widest one so columns line up.
    let width = matrix
        .data
        .iter()
        .flatten()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    matrix
        .data
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
            Line::from(cells.join("  "))
        })
        .collect()
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let title = match &app.matrix {
        Some(m) => format!(" {} — Matriz ({} x {}) ", app.input_path.display(), m.rows, m.cols),
        None => format!(" {} ", app.input_path.display()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let lines = match &app.matrix {
        Some(m) => matrix_lines(m),
        None => vec![
            Line::from("No matrix loaded.").style(Style::default().fg(Color::Yellow)),
            Line::from(""),
            Line::from("  r       Reload input file"),
            Line::from("  q       Quit"),
        ],
    };
    let paragraph = Paragraph::new(lines).scroll((app.scroll_row, app.scroll_col));
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new("[j/k/h/l] Scroll  [r] Reload  [?] Help  [q] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[1]);
}
