use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog parse error: {source} {location}")]
    Parse {
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },

    #[error("Invalid catalog entry '{id}': {message} {location}")]
    InvalidEntry {
        id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Duplicate catalog id: {id} {location}")]
    DuplicateId { id: String, location: ErrorLocation },

    #[error("Unknown section: {value} {location}")]
    UnknownSection {
        value: String,
        location: ErrorLocation,
    },

    #[error("JSON export error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CatalogError {
    #[track_caller]
    pub fn invalid_entry<S: Into<String>>(id: &str, message: S) -> Self {
        CatalogError::InvalidEntry {
            id: id.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_id(id: &str) -> Self {
        CatalogError::DuplicateId {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<toml::de::Error> for CatalogError {
    #[track_caller]
    fn from(source: toml::de::Error) -> Self {
        CatalogError::Parse {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CatalogError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CatalogError>;
