//! Dashboard state and input handling.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::loader::SourceKind;
use crate::record::SalesRecord;
use crate::stats;

use super::client::{ApiClient, SalesFilter};

/// Sidebar fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Source,
    Product,
    City,
    Gender,
    Payment,
    Limit,
    Offset,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Source,
        Focus::Product,
        Focus::City,
        Focus::Gender,
        Focus::Payment,
        Focus::Limit,
        Focus::Offset,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Chart tabs, mirroring the visualization tabs of the original dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    ProductLine,
    Payment,
    OverTime,
    City,
    Scatter,
    RawData,
}

impl Tab {
    const ORDER: [Tab; 6] = [
        Tab::ProductLine,
        Tab::Payment,
        Tab::OverTime,
        Tab::City,
        Tab::Scatter,
        Tab::RawData,
    ];

    pub const TITLES: [&'static str; 6] = [
        "By Product Line",
        "By Payment",
        "Over Time",
        "By City",
        "Quantity vs Sales",
        "Raw Data",
    ];

    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// The headline numbers above the charts. Missing columns count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kpis {
    pub total_sales: f64,
    pub avg_rating: f64,
    pub orders: usize,
    pub avg_cogs: f64,
}

impl Kpis {
    pub fn compute(records: &[SalesRecord]) -> Self {
        Self {
            total_sales: stats::sum_column(records, "Sales"),
            avg_rating: stats::mean_column(records, "Rating"),
            orders: records.len(),
            avg_cogs: stats::mean_column(records, "cogs"),
        }
    }
}

/// Outcome of the last fetch, shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Success(String),
    Warning(String),
    Error(String),
}

pub struct App {
    client: ApiClient,
    pub filter: SalesFilter,
    pub focus: Focus,
    pub active_tab: Tab,
    pub records: Vec<SalesRecord>,
    pub kpis: Kpis,
    pub status: Status,
    pub raw_scroll: usize,
}

impl App {
    pub fn new(api_base_url: &str, timeout_secs: u64) -> Self {
        Self {
            client: ApiClient::new(api_base_url, timeout_secs),
            filter: SalesFilter::default(),
            focus: Focus::Source,
            active_tab: Tab::ProductLine,
            records: Vec::new(),
            kpis: Kpis::default(),
            status: Status::Idle,
            raw_scroll: 0,
        }
    }

    /// Issue one request with the accumulated filters. A failed fetch keeps
    /// the previously shown data.
    pub fn fetch(&mut self) {
        match self.client.fetch_sales(&self.filter) {
            Ok(records) => {
                self.status = if records.is_empty() {
                    Status::Warning("No records found with these filters.".to_string())
                } else {
                    Status::Success(format!("Fetched {} records from API", records.len()))
                };
                self.kpis = Kpis::compute(&records);
                self.records = records;
                self.raw_scroll = 0;
            }
            Err(e) => {
                self.status = Status::Error(e.to_string());
            }
        }
    }

    /// Handle one key press; returns true when the app should exit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Enter => self.fetch(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Left => self.active_tab = self.active_tab.prev(),
            KeyCode::Right => self.active_tab = self.active_tab.next(),
            KeyCode::PageDown => {
                if self.active_tab == Tab::RawData && self.raw_scroll + 1 < self.records.len() {
                    self.raw_scroll += 1;
                }
            }
            KeyCode::PageUp => {
                if self.active_tab == Tab::RawData {
                    self.raw_scroll = self.raw_scroll.saturating_sub(1);
                }
            }
            KeyCode::Char(' ') if self.focus == Focus::Source => {
                self.filter.source = match self.filter.source {
                    SourceKind::Excel => SourceKind::Sql,
                    SourceKind::Sql => SourceKind::Excel,
                };
            }
            KeyCode::Char(' ') if self.focus == Focus::Gender => {
                self.filter.gender = match self.filter.gender.as_str() {
                    "" => "Male".to_string(),
                    "Male" => "Female".to_string(),
                    _ => String::new(),
                };
            }
            KeyCode::Char(c) => self.push_char(c),
            KeyCode::Backspace => self.pop_char(),
            _ => {}
        }

        false
    }

    fn push_char(&mut self, c: char) {
        match self.focus {
            // Toggled with Space, not typed
            Focus::Source | Focus::Gender => {}
            Focus::Product => self.filter.product.push(c),
            Focus::City => self.filter.city.push(c),
            Focus::Payment => self.filter.payment.push(c),
            Focus::Limit if c.is_ascii_digit() => self.filter.limit.push(c),
            Focus::Offset if c.is_ascii_digit() => self.filter.offset.push(c),
            Focus::Limit | Focus::Offset => {}
        }
    }

    fn pop_char(&mut self) {
        match self.focus {
            Focus::Source | Focus::Gender => {}
            Focus::Product => {
                self.filter.product.pop();
            }
            Focus::City => {
                self.filter.city.pop();
            }
            Focus::Payment => {
                self.filter.payment.pop();
            }
            Focus::Limit => {
                self.filter.limit.pop();
            }
            Focus::Offset => {
                self.filter.offset.pop();
            }
        }
    }
}
