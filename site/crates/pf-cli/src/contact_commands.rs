use crate::terminal_view::TerminalView;

use pf_config::ContactConfig;
use pf_contact::{ContactFormHandler, SubmitOutcome};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Subcommand;
use log::debug;

#[derive(Subcommand)]
pub enum ContactCommands {
    /// Submit the contact form
    Send {
        /// Sender name
        #[arg(long)]
        name: String,
        /// Sender email address
        #[arg(long)]
        email: String,
        /// Message body
        #[arg(long)]
        message: String,
        /// Exit as soon as the outcome is printed
        #[arg(long)]
        no_wait: bool,
    },
}

/// Run one submission through the form handler.
///
/// Unless `no_wait` is set, stays alive until the status message has hidden
/// itself, as the page would.
pub async fn send(config: &ContactConfig, view: TerminalView, no_wait: bool) -> ExitCode {
    let handler = ContactFormHandler::from_config(config, Arc::new(view));

    let outcome = handler.submit().await;
    debug!("Contact submission finished: {:?}", outcome);

    if !no_wait {
        tokio::time::sleep(handler.status_ttl()).await;
    }

    exit_code(&outcome)
}

pub fn exit_code(outcome: &SubmitOutcome) -> ExitCode {
    match outcome {
        SubmitOutcome::Sent { .. } => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
