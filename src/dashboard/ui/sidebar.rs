//! Filter sidebar.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::dashboard::app::{App, Focus};

pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("Filters")
        .title_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Data source
            Constraint::Length(3), // Product line
            Constraint::Length(3), // City
            Constraint::Length(3), // Gender
            Constraint::Length(3), // Payment
            Constraint::Length(3), // Limit
            Constraint::Length(3), // Offset
            Constraint::Min(0),
        ])
        .split(inner);

    let gender = if app.filter.gender.is_empty() {
        "(any)".to_string()
    } else {
        app.filter.gender.clone()
    };

    draw_field(
        frame,
        fields[0],
        "Data Source",
        app.filter.source_param(),
        app.focus == Focus::Source,
    );
    draw_field(
        frame,
        fields[1],
        "Product Line",
        &app.filter.product,
        app.focus == Focus::Product,
    );
    draw_field(
        frame,
        fields[2],
        "City",
        &app.filter.city,
        app.focus == Focus::City,
    );
    draw_field(frame, fields[3], "Gender", &gender, app.focus == Focus::Gender);
    draw_field(
        frame,
        fields[4],
        "Payment",
        &app.filter.payment,
        app.focus == Focus::Payment,
    );
    draw_field(
        frame,
        fields[5],
        "Limit",
        &app.filter.limit,
        app.focus == Focus::Limit,
    );
    draw_field(
        frame,
        fields[6],
        "Offset",
        &app.filter.offset,
        app.focus == Focus::Offset,
    );
}

fn draw_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let field = Paragraph::new(Span::styled(value.to_string(), value_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(label.to_string()),
    );
    frame.render_widget(field, area);
}
