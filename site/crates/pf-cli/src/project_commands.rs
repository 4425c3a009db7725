use crate::error::{CliError, Result as CliResult};

use pf_catalog::Catalog;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List project ids and titles
    List {
        /// Include the authoring template entry
        #[arg(long)]
        include_template: bool,
    },
    /// Get a project entry as JSON
    Get {
        /// Project slug (e.g., "aws-portfolio")
        id: String,
    },
    /// Export the whole catalog as a JSON mapping
    Export {
        /// Include the authoring template entry
        #[arg(long)]
        include_template: bool,
    },
}

/// One `id<TAB>title` line per entry, in authoring order
pub fn list(catalog: &Catalog, include_template: bool) -> Vec<String> {
    catalog
        .ids()
        .filter(|id| include_template || !Catalog::is_template(id))
        .filter_map(|id| catalog.get(id).map(|entry| format!("{}\t{}", id, entry.title)))
        .collect()
}

pub fn get(catalog: &Catalog, id: &str, pretty: bool) -> CliResult<String> {
    let entry = catalog
        .get(id)
        .ok_or_else(|| CliError::project_not_found(id))?;

    let json = if pretty {
        serde_json::to_string_pretty(entry)?
    } else {
        serde_json::to_string(entry)?
    };

    Ok(json)
}

pub fn export(catalog: &Catalog, include_template: bool, pretty: bool) -> CliResult<String> {
    Ok(catalog.to_json(include_template, pretty)?)
}
