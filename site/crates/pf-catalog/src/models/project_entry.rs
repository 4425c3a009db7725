//! Project entry - one project's descriptive record in the catalog.

use crate::{
    Architecture, Challenge, CodeBlock, Feature, Metric, Overview, ProjectLinks, Section,
    TechnicalDetail,
};

use serde::{Deserialize, Serialize};

/// A portfolio project as consumed by the page renderer.
///
/// `title`, `tagline`, `badges` and `links.github` are always present. Every
/// other section is optional; an absent (or empty) section is not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    pub tagline: String,
    /// Technology badges, in display order
    pub badges: Vec<String>,
    pub links: ProjectLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<Overview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technical_details: Vec<TechnicalDetail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub challenges: Vec<Challenge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_blocks: Vec<CodeBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<Metric>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lessons: Vec<String>,
}

impl ProjectEntry {
    /// Create an entry with only the required fields
    pub fn new(title: String, tagline: String, badges: Vec<String>, github: String) -> Self {
        Self {
            title,
            tagline,
            badges,
            links: ProjectLinks { github, demo: None },
            overview: None,
            architecture: None,
            technical_details: Vec::new(),
            features: Vec::new(),
            challenges: Vec::new(),
            code_blocks: Vec::new(),
            metrics: Vec::new(),
            lessons: Vec::new(),
        }
    }

    pub fn has_demo(&self) -> bool {
        self.links.demo.is_some()
    }

    /// Whether the renderer should emit the given section
    pub fn has_section(&self, section: Section) -> bool {
        match section {
            Section::Overview => self.overview.is_some(),
            Section::Architecture => self.architecture.is_some(),
            Section::TechnicalDetails => !self.technical_details.is_empty(),
            Section::Features => !self.features.is_empty(),
            Section::Challenges => !self.challenges.is_empty(),
            Section::CodeBlocks => !self.code_blocks.is_empty(),
            Section::Metrics => !self.metrics.is_empty(),
            Section::Lessons => !self.lessons.is_empty(),
        }
    }

    /// Sections present on this entry, in render order
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| self.has_section(*section))
            .collect()
    }
}
