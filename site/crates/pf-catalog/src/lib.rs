//! Static catalog of portfolio project entries.
//!
//! The catalog is authored in `data/projects.toml`, embedded at compile time
//! and looked up by slug. Renderers project entries into markup; every
//! optional section that is absent is simply not rendered.

pub mod catalog;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogExport, TEMPLATE_ID};
pub use error::{CatalogError, Result};
pub use models::architecture::Architecture;
pub use models::challenge::Challenge;
pub use models::code_block::CodeBlock;
pub use models::code_sample::CodeSample;
pub use models::feature::Feature;
pub use models::metric::Metric;
pub use models::overview::Overview;
pub use models::project_entry::ProjectEntry;
pub use models::project_links::ProjectLinks;
pub use models::section::Section;
pub use models::technical_detail::TechnicalDetail;
