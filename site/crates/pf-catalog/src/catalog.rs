use crate::{CatalogError, ProjectEntry, Result as CatalogResult};

use std::collections::HashSet;
use std::sync::OnceLock;

use log::debug;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Conventional id of the authoring template entry
pub const TEMPLATE_ID: &str = "project-template";

const BUILTIN_CATALOG: &str = include_str!("../data/projects.toml");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    projects: Vec<CatalogRecord>,
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    id: String,
    #[serde(flatten)]
    entry: ProjectEntry,
}

/// Immutable mapping from project slug to entry, in authoring order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, ProjectEntry)>,
}

impl Catalog {
    /// The catalog embedded in this crate, parsed once per process.
    pub fn builtin() -> CatalogResult<&'static Catalog> {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();

        if let Some(catalog) = BUILTIN.get() {
            return Ok(catalog);
        }

        let catalog = Self::from_toml_str(BUILTIN_CATALOG)?;
        Ok(BUILTIN.get_or_init(|| catalog))
    }

    /// Parse and validate a catalog document.
    pub fn from_toml_str(source: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = toml::from_str(source)?;
        let entries = document
            .projects
            .into_iter()
            .map(|record| (record.id, record.entry))
            .collect();

        Self::from_entries(entries)
    }

    /// Build a catalog from (id, entry) pairs, enforcing entry invariants.
    pub fn from_entries(entries: Vec<(String, ProjectEntry)>) -> CatalogResult<Self> {
        {
            let mut seen = HashSet::new();

            for (id, entry) in &entries {
                validate_id(id)?;
                validate_entry(id, entry)?;

                if !seen.insert(id.as_str()) {
                    return Err(CatalogError::duplicate_id(id));
                }
            }
        }

        debug!("Loaded project catalog with {} entries", entries.len());

        Ok(Self { entries })
    }

    /// Look up an entry by id. Unknown ids yield `None`.
    pub fn get(&self, id: &str) -> Option<&ProjectEntry> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All ids, template included
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Real projects for display, template excluded
    pub fn projects(&self) -> impl Iterator<Item = (&str, &ProjectEntry)> {
        self.iter(false)
    }

    /// The authoring template, if the catalog carries one
    pub fn template(&self) -> Option<&ProjectEntry> {
        self.get(TEMPLATE_ID)
    }

    pub fn is_template(id: &str) -> bool {
        id == TEMPLATE_ID
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn iter(&self, include_template: bool) -> impl Iterator<Item = (&str, &ProjectEntry)> {
        self.entries
            .iter()
            .filter(move |(id, _)| include_template || !Self::is_template(id))
            .map(|(id, entry)| (id.as_str(), entry))
    }

    /// Serializable id -> entry mapping for client-side rendering
    pub fn export(&self, include_template: bool) -> CatalogExport<'_> {
        CatalogExport {
            catalog: self,
            include_template,
        }
    }

    pub fn to_json(&self, include_template: bool, pretty: bool) -> CatalogResult<String> {
        let export = self.export(include_template);
        let json = if pretty {
            serde_json::to_string_pretty(&export)?
        } else {
            serde_json::to_string(&export)?
        };
        Ok(json)
    }
}

/// Borrowed view of a catalog that serializes as a JSON object keyed by id,
/// preserving authoring order.
#[derive(Debug, Clone, Copy)]
pub struct CatalogExport<'a> {
    catalog: &'a Catalog,
    include_template: bool,
}

impl Serialize for CatalogExport<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries: Vec<_> = self.catalog.iter(self.include_template).collect();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (id, entry) in entries {
            map.serialize_entry(id, entry)?;
        }
        map.end()
    }
}

/// Ids are lowercase slugs: `[a-z0-9]` words joined by single hyphens.
fn validate_id(id: &str) -> CatalogResult<()> {
    let valid = !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && !id.contains("--")
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !valid {
        return Err(CatalogError::invalid_entry(
            id,
            "id must be a lowercase slug ([a-z0-9-])",
        ));
    }

    Ok(())
}

fn validate_entry(id: &str, entry: &ProjectEntry) -> CatalogResult<()> {
    if entry.title.trim().is_empty() {
        return Err(CatalogError::invalid_entry(id, "title must not be blank"));
    }

    if entry.tagline.trim().is_empty() {
        return Err(CatalogError::invalid_entry(id, "tagline must not be blank"));
    }

    let github = entry.links.github.trim();
    if !(github.starts_with("https://") || github.starts_with("http://")) {
        return Err(CatalogError::invalid_entry(
            id,
            format!("links.github must be an absolute URL, got '{}'", github),
        ));
    }

    Ok(())
}
