use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum SalesboardError {
    MissingSourceFile(String),
    WorkbookParse(String),
    DatabaseUnavailable(String),
    DatabaseOperation(String),
    Serialization(String),
    FileOperation(String),
    Config(String),
}

impl SalesboardError {
    /// Error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            SalesboardError::MissingSourceFile(_) => "E001",
            SalesboardError::WorkbookParse(_) => "E002",
            SalesboardError::DatabaseUnavailable(_) => "E003",
            SalesboardError::DatabaseOperation(_) => "E004",
            SalesboardError::Serialization(_) => "E005",
            SalesboardError::FileOperation(_) => "E006",
            SalesboardError::Config(_) => "E007",
        }
    }

    /// Human-readable error type name
    pub fn error_type(&self) -> &'static str {
        match self {
            SalesboardError::MissingSourceFile(_) => "Missing Source File",
            SalesboardError::WorkbookParse(_) => "Workbook Parse Error",
            SalesboardError::DatabaseUnavailable(_) => "Database Unavailable",
            SalesboardError::DatabaseOperation(_) => "Database Operation Error",
            SalesboardError::Serialization(_) => "Serialization Error",
            SalesboardError::FileOperation(_) => "File Operation Error",
            SalesboardError::Config(_) => "Configuration Error",
        }
    }

    /// Error detail message
    pub fn message(&self) -> &str {
        match self {
            SalesboardError::MissingSourceFile(msg)
            | SalesboardError::WorkbookParse(msg)
            | SalesboardError::DatabaseUnavailable(msg)
            | SalesboardError::DatabaseOperation(msg)
            | SalesboardError::Serialization(msg)
            | SalesboardError::FileOperation(msg)
            | SalesboardError::Config(msg) => msg,
        }
    }

    /// HTTP status for the API surface. Load errors surface as unhandled
    /// server errors; there is no structured error body.
    pub fn http_status(&self) -> StatusCode {
        match self {
            SalesboardError::DatabaseUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }
}

impl fmt::Display for SalesboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SalesboardError {}

impl actix_web::ResponseError for SalesboardError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }
}

// Convenience constructors
impl SalesboardError {
    pub fn missing_source_file<T: Into<String>>(msg: T) -> Self {
        SalesboardError::MissingSourceFile(msg.into())
    }

    pub fn workbook_parse<T: Into<String>>(msg: T) -> Self {
        SalesboardError::WorkbookParse(msg.into())
    }

    pub fn database_unavailable<T: Into<String>>(msg: T) -> Self {
        SalesboardError::DatabaseUnavailable(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        SalesboardError::DatabaseOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SalesboardError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SalesboardError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        SalesboardError::Config(msg.into())
    }
}

impl From<sea_orm::DbErr> for SalesboardError {
    fn from(err: sea_orm::DbErr) -> Self {
        SalesboardError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SalesboardError {
    fn from(err: std::io::Error) -> Self {
        SalesboardError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SalesboardError {
    fn from(err: serde_json::Error) -> Self {
        SalesboardError::Serialization(err.to_string())
    }
}

impl From<calamine::Error> for SalesboardError {
    fn from(err: calamine::Error) -> Self {
        SalesboardError::WorkbookParse(err.to_string())
    }
}

impl From<csv::Error> for SalesboardError {
    fn from(err: csv::Error) -> Self {
        SalesboardError::WorkbookParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SalesboardError>;
