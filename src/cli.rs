//! Command-line interface definitions.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "salesboard",
    version,
    about = "Sales reporting stack: JSON API over spreadsheet/SQLite data, a database seeder, and a terminal dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server (the default when no command is given)
    Serve {
        /// Bind host, overrides SERVER_HOST
        #[arg(long)]
        host: Option<String>,
        /// Bind port, overrides SERVER_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Create the sales database and populate it from the spreadsheet
    Seed {
        /// SQLite URL of the target database, overrides DATABASE_URL
        #[arg(long)]
        database: Option<String>,
        /// Spreadsheet to import, overrides WORKBOOK_PATH
        #[arg(long)]
        workbook: Option<String>,
    },
    /// Open the terminal dashboard against a running server
    #[cfg(feature = "dashboard")]
    Dashboard {
        /// Backend base URL, overrides API_BASE_URL
        #[arg(long)]
        api_base_url: Option<String>,
    },
}
