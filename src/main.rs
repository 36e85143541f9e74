use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use salesboard::cli::{Cli, Commands};
use salesboard::config;
use salesboard::seed::{self, SeedOutcome};

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::init_config();

    match cli.command {
        Some(Commands::Seed { database, workbook }) => {
            init_tracing(&config.logging.level);
            let database = database.unwrap_or_else(|| config.data.database_url.clone());
            let workbook = workbook.unwrap_or_else(|| config.data.workbook_path.clone());

            match seed::seed_database(&database, Path::new(&workbook)).await {
                Ok(SeedOutcome::AlreadyExists) => {
                    println!("{}", "Database already exists. Skipping creation.".yellow());
                }
                Ok(SeedOutcome::Seeded(rows)) => {
                    println!(
                        "{} {} rows inserted.",
                        "Database created and populated.".green(),
                        rows
                    );
                }
                Err(e) => {
                    eprintln!("{}", e.format_colored());
                    std::process::exit(1);
                }
            }
        }
        #[cfg(feature = "dashboard")]
        Some(Commands::Dashboard { api_base_url }) => {
            // No tracing subscriber here: the dashboard owns the terminal
            let base_url = api_base_url.unwrap_or_else(|| config.client.api_base_url.clone());
            salesboard::dashboard::run_dashboard(&base_url, config.client.timeout_secs)
                .map_err(|e| anyhow::anyhow!("dashboard failed: {}", e))?;
        }
        Some(Commands::Serve { host, port }) => {
            init_tracing(&config.logging.level);
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            salesboard::api::run_server(&host, port).await?;
        }
        None => {
            init_tracing(&config.logging.level);
            salesboard::api::run_server(&config.server.host, config.server.port).await?;
        }
    }

    Ok(())
}
