//! pf - portfolio site command-line tools
//!
//! Submits the contact form from a terminal and exposes the project catalog.
//!
//! # Examples
//!
//! ```bash
//! # Send a message through the contact endpoint
//! pf contact send --name "Ada" --email ada@example.com --message "Hello"
//!
//! # List catalog entries
//! pf project list
//!
//! # Export the catalog for client-side rendering
//! pf project export --pretty
//! ```

use pf_cli::{
    Cli, CliResult, TerminalView,
    commands::Commands,
    contact_commands::{self, ContactCommands},
    logger,
    project_commands::{self, ProjectCommands},
};

use pf_catalog::Catalog;
use pf_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    // Explicit flag > env > config.toml > default
    let mut config = Config::load()?;
    if let Some(endpoint) = cli.endpoint {
        config.contact.endpoint = endpoint;
    }
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    match cli.command {
        Commands::Contact { action } => match action {
            ContactCommands::Send {
                name,
                email,
                message,
                no_wait,
            } => {
                let view = TerminalView::new(&name, &email, &message);
                Ok(contact_commands::send(&config.contact, view, no_wait).await)
            }
        },

        Commands::Project { action } => {
            let catalog = Catalog::builtin()?;

            let output = match action {
                ProjectCommands::List { include_template } => {
                    project_commands::list(catalog, include_template).join("\n")
                }
                ProjectCommands::Get { id } => project_commands::get(catalog, &id, cli.pretty)?,
                ProjectCommands::Export { include_template } => {
                    project_commands::export(catalog, include_template, cli.pretty)?
                }
            };

            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
    }
}
