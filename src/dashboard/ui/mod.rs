// UI submodules
mod charts;
mod kpi;
mod raw_data;
mod sidebar;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};

use super::app::{App, Status, Tab};

/// Main UI rendering entry point
pub fn draw(frame: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(15),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, outer[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(40)])
        .split(outer[1]);

    sidebar::draw_sidebar(frame, main[0], app);
    draw_content(frame, main[1], app);

    draw_status_bar(frame, outer[2], app);
    draw_footer(frame, outer[3]);
}

fn draw_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Sales Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  -  charts over the sales API", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, area);
}

fn draw_content(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // KPI row
            Constraint::Length(1), // Tab bar
            Constraint::Min(10),   // Chart area
        ])
        .split(area);

    kpi::draw_kpi_row(frame, chunks[0], &app.kpis);

    let tabs = Tabs::new(Tab::TITLES)
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[1]);

    let chart_area = chunks[2];
    match app.active_tab {
        Tab::ProductLine => charts::draw_product_line(frame, chart_area, &app.records),
        Tab::Payment => charts::draw_payment_share(frame, chart_area, &app.records),
        Tab::OverTime => charts::draw_over_time(frame, chart_area, &app.records),
        Tab::City => charts::draw_city(frame, chart_area, &app.records),
        Tab::Scatter => charts::draw_scatter(frame, chart_area, &app.records),
        Tab::RawData => raw_data::draw_raw_data(frame, chart_area, app),
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = match &app.status {
        Status::Idle => (
            "Set filters and press [Enter] to fetch data".to_string(),
            Color::DarkGray,
        ),
        Status::Success(msg) => (msg.clone(), Color::Green),
        Status::Warning(msg) => (msg.clone(), Color::Yellow),
        Status::Error(msg) => (msg.clone(), Color::Red),
    };

    let status = Paragraph::new(Span::styled(text, Style::default().fg(color))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Status"),
    );
    frame.render_widget(status, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" next field  "),
        Span::styled("[Space]", Style::default().fg(Color::Yellow)),
        Span::raw(" toggle  "),
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" fetch  "),
        Span::styled("[<-/->]", Style::default().fg(Color::Yellow)),
        Span::raw(" charts  "),
        Span::styled("[PgUp/PgDn]", Style::default().fg(Color::Yellow)),
        Span::raw(" scroll  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]);
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Placeholder for a chart whose required columns are missing from the
/// fetched dataset
pub(super) fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let placeholder = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title.to_string())
                .title_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(placeholder, area);
}
