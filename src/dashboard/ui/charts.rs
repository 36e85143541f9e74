//! Chart tabs.
//!
//! Each chart checks for the columns it needs and falls back to a
//! placeholder when they are absent, mirroring the skip-if-missing behavior
//! of the original dashboard.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, Gauge, GraphType},
};

use crate::record::SalesRecord;
use crate::stats;

use super::draw_placeholder;

const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
];

const NO_DATA: &str = "No data - press [Enter] to fetch";

fn chart_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

fn grouped_bar_chart(frame: &mut Frame, area: Rect, title: &str, groups: &[(String, f64)], color: Color) {
    let bars: Vec<Bar> = groups
        .iter()
        .map(|(name, total)| {
            Bar::default()
                .value(total.round().max(0.0) as u64)
                .text_value(format!("{:.0}", total))
                .label(Line::from(truncate(name, 14)))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(title.to_string()))
        .bar_width(14)
        .bar_gap(2)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Total sales per product line
pub fn draw_product_line(frame: &mut Frame, area: Rect, records: &[SalesRecord]) {
    let title = "Total Sales by Product Line";
    if records.is_empty() {
        return draw_placeholder(frame, area, title, NO_DATA);
    }

    let groups = stats::group_sum(records, "Product line", "Sales");
    if groups.is_empty() {
        return draw_placeholder(frame, area, title, "Requires Product line and Sales columns");
    }

    grouped_bar_chart(frame, area, title, &groups, Color::Cyan);
}

/// Share of sales per payment method, the original pie chart rendered as
/// percentage bars
pub fn draw_payment_share(frame: &mut Frame, area: Rect, records: &[SalesRecord]) {
    let title = "Sales Distribution by Payment Method";
    if records.is_empty() {
        return draw_placeholder(frame, area, title, NO_DATA);
    }

    let groups = stats::group_sum(records, "Payment", "Sales");
    let total: f64 = groups.iter().map(|(_, v)| v).sum();
    if groups.is_empty() || total <= 0.0 {
        return draw_placeholder(frame, area, title, "Requires Payment and Sales columns");
    }

    let block = chart_block(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = groups.iter().map(|_| Constraint::Length(2)).collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (method, sum)) in groups.iter().enumerate() {
        let share = (sum / total).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .ratio(share)
            .label(format!("{}  {:.1}%  ({:.2})", method, share * 100.0, sum))
            .gauge_style(
                Style::default()
                    .fg(SERIES_COLORS[i % SERIES_COLORS.len()])
                    .bg(Color::DarkGray),
            );
        frame.render_widget(gauge, rows[i]);
    }
}

/// Sales summed per day over the first date-like column found
pub fn draw_over_time(frame: &mut Frame, area: Rect, records: &[SalesRecord]) {
    let title = "Sales Over Time";
    if records.is_empty() {
        return draw_placeholder(frame, area, title, NO_DATA);
    }

    let Some(date_column) = stats::find_date_column(records) else {
        return draw_placeholder(frame, area, title, "No date column found");
    };

    let series = stats::date_series(records, date_column, "Sales");
    if series.is_empty() {
        return draw_placeholder(frame, area, title, "Requires a parsable date and Sales columns");
    }

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, (_, total))| (i as f64, *total))
        .collect();
    let max_y = points.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max);
    let max_x = (points.len().saturating_sub(1)).max(1) as f64;

    let x_labels: Vec<String> = vec![
        series.first().map(|(d, _)| d.to_string()).unwrap_or_default(),
        series
            .get(series.len() / 2)
            .map(|(d, _)| d.to_string())
            .unwrap_or_default(),
        series.last().map(|(d, _)| d.to_string()).unwrap_or_default(),
    ];
    let y_labels: Vec<String> = vec![
        "0".to_string(),
        format!("{:.0}", max_y / 2.0),
        format!("{:.0}", max_y),
    ];

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block(format!("{} ({})", title, date_column)))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_y * 1.1])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Total sales per city
pub fn draw_city(frame: &mut Frame, area: Rect, records: &[SalesRecord]) {
    let title = "Total Sales by City";
    if records.is_empty() {
        return draw_placeholder(frame, area, title, NO_DATA);
    }

    let groups = stats::group_sum(records, "City", "Sales");
    if groups.is_empty() {
        return draw_placeholder(frame, area, title, "Requires City and Sales columns");
    }

    grouped_bar_chart(frame, area, title, &groups, Color::Green);
}

/// Quantity vs sales, one colored dataset per product line
pub fn draw_scatter(frame: &mut Frame, area: Rect, records: &[SalesRecord]) {
    let title = "Quantity vs Sales by Product Line";
    if records.is_empty() {
        return draw_placeholder(frame, area, title, NO_DATA);
    }

    // Group points by product line, falling back to one anonymous series
    let mut groups: Vec<(String, Vec<(f64, f64)>)> = Vec::new();
    for record in records {
        let (Some(quantity), Some(sales)) = (record.number("Quantity"), record.number("Sales"))
        else {
            continue;
        };
        let line = record.text("Product line").unwrap_or("all").to_string();

        match groups.iter_mut().find(|(name, _)| *name == line) {
            Some((_, points)) => points.push((quantity, sales)),
            None => groups.push((line, vec![(quantity, sales)])),
        }
    }

    if groups.is_empty() {
        return draw_placeholder(frame, area, title, "Requires Quantity and Sales columns");
    }

    let max_x = groups
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(x, _)| *x))
        .fold(0.0_f64, f64::max);
    let max_y = groups
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(_, y)| *y))
        .fold(0.0_f64, f64::max);

    let datasets: Vec<Dataset> = groups
        .iter()
        .enumerate()
        .map(|(i, (name, points))| {
            Dataset::default()
                .name(truncate(name, 20))
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                .data(points)
        })
        .collect();

    let x_labels: Vec<String> = vec![
        "0".to_string(),
        format!("{:.0}", max_x / 2.0),
        format!("{:.0}", max_x),
    ];
    let y_labels: Vec<String> = vec![
        "0".to_string(),
        format!("{:.0}", max_y / 2.0),
        format!("{:.0}", max_y),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block(title.to_string()))
        .x_axis(
            Axis::default()
                .title("Quantity")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_x * 1.05])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Sales")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_y * 1.05])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
