use error_location::ErrorLocation;
use pf_catalog::CatalogError;
use pf_config::ConfigError;
use std::panic::Location;
use thiserror::Error;

/// Errors that stop a `pf` command before it produces output
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        location: ErrorLocation,
        #[source]
        source: ConfigError,
    },

    #[error("Catalog error: {source} {location}")]
    Catalog {
        location: ErrorLocation,
        #[source]
        source: CatalogError,
    },

    #[error("Project not found: {id} {location}")]
    ProjectNotFound { id: String, location: ErrorLocation },

    #[error("JSON serialization error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn project_not_found<S: Into<String>>(id: S) -> Self {
        CliError::ProjectNotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        CliError::Config {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<CatalogError> for CliError {
    #[track_caller]
    fn from(source: CatalogError) -> Self {
        CliError::Catalog {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Json {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
