use crate::{contact_commands::ContactCommands, project_commands::ProjectCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Contact form operations
    Contact {
        #[command(subcommand)]
        action: ContactCommands,
    },

    /// Project catalog operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
}
