//! exonline - query the Ex-Online inspection API from the command line.
//!
//! Reads `EXO_KEY` (and optionally `EXO_BASE_URL`) from the environment or a
//! `.env` file, runs one read operation and prints the records as JSON.

mod cli;

use std::io;

use anyhow::{Context, Result};
use exonline_core::{Config, ExOnlineClient};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Command, USAGE};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug).
    // Logs go to stderr; stdout is reserved for JSON output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e:#}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    run(command)
}

/// Build a client from the environment configuration.
fn connect() -> Result<ExOnlineClient> {
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(base_url = %config.base_url, "Using Ex-Online API");
    ExOnlineClient::new(&config).context("Failed to create API client")
}

/// Run one command and print its records as JSON.
fn run(command: Command) -> Result<()> {
    let value = match command {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Projects { account_id, page } => {
            let projects = connect()?
                .projects(account_id, page)
                .with_context(|| format!("Failed to list projects for account {}", account_id))?;
            info!(count = projects.len(), "Fetched projects");
            serde_json::to_value(projects)?
        }
        Command::Equipment {
            project_id,
            dossier_ids,
            dates,
            page,
        } => {
            let items = connect()?
                .equipment(project_id, &dossier_ids, dates, page)
                .with_context(|| format!("Failed to list equipment for project {}", project_id))?;
            info!(count = items.len(), "Fetched equipment");
            serde_json::to_value(items)?
        }
        Command::Attachments {
            project_id,
            dossier_ids,
            dates,
        } => {
            let data = connect()?
                .attachment_data(project_id, &dossier_ids, dates)
                .with_context(|| format!("Failed to list attachments for project {}", project_id))?;
            info!(count = data.len(), "Fetched attachment data");
            serde_json::to_value(data)?
        }
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
