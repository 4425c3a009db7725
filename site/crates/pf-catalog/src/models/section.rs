use crate::{CatalogError, Result as CatalogResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Optional sections of a project page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Overview,
    Architecture,
    TechnicalDetails,
    Features,
    Challenges,
    CodeBlocks,
    Metrics,
    Lessons,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Self::Overview,
        Self::Architecture,
        Self::TechnicalDetails,
        Self::Features,
        Self::Challenges,
        Self::CodeBlocks,
        Self::Metrics,
        Self::Lessons,
    ];

    /// Key used by the renderer's data contract
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Architecture => "architecture",
            Self::TechnicalDetails => "technicalDetails",
            Self::Features => "features",
            Self::Challenges => "challenges",
            Self::CodeBlocks => "codeBlocks",
            Self::Metrics => "metrics",
            Self::Lessons => "lessons",
        }
    }
}

impl FromStr for Section {
    type Err = CatalogError;

    #[track_caller]
    fn from_str(s: &str) -> CatalogResult<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSection {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
