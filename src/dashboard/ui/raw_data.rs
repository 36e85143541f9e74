//! Raw data tab: the fetched records as a table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Row, Table},
};

use crate::dashboard::app::App;

use super::draw_placeholder;

const MAX_COLUMNS: usize = 8;

pub fn draw_raw_data(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!("Raw Data ({} records)", app.records.len());
    if app.records.is_empty() {
        return draw_placeholder(frame, area, &title, "No data - press [Enter] to fetch");
    }

    // Column set from the first record; the sources keep a uniform shape
    let columns: Vec<String> = app.records[0]
        .keys()
        .take(MAX_COLUMNS)
        .cloned()
        .collect();

    let header = Row::new(columns.clone()).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let visible_rows = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = app
        .records
        .iter()
        .skip(app.raw_scroll)
        .take(visible_rows)
        .map(|record| Row::new(columns.iter().map(|c| record.display(c)).collect::<Vec<_>>()))
        .collect();

    let widths = vec![Constraint::Ratio(1, columns.len().max(1) as u32); columns.len()];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(table, area);
}
