//! KPI row above the charts.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::dashboard::app::Kpis;

pub fn draw_kpi_row(frame: &mut Frame, area: Rect, kpis: &Kpis) {
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    draw_kpi(
        frame,
        boxes[0],
        "Total Sales",
        &format!("${}", format_amount(kpis.total_sales)),
    );
    draw_kpi(
        frame,
        boxes[1],
        "Avg Rating",
        &format!("{:.2}", kpis.avg_rating),
    );
    draw_kpi(frame, boxes[2], "Orders", &kpis.orders.to_string());
    draw_kpi(
        frame,
        boxes[3],
        "Avg COGS",
        &format!("${}", format_amount(kpis.avg_cogs)),
    );
}

fn draw_kpi(frame: &mut Frame, area: Rect, label: &str, value: &str) {
    let content = Line::from(Span::styled(
        value.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    let kpi = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(label.to_string())
            .title_style(Style::default().fg(Color::Gray)),
    );
    frame.render_widget(kpi, area);
}

/// Two decimals with thousands separators
fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}
