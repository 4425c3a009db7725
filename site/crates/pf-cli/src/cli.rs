use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pf")]
#[command(about = "Portfolio site tools: contact form and project catalog")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Contact endpoint URL (overrides config.toml and PF_CONTACT_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
