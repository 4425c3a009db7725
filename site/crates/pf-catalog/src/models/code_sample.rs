use serde::{Deserialize, Serialize};

/// Code attached to a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    /// Highlighter language tag ("yaml", "bash", "python", ...)
    pub language: String,
    pub title: String,
    pub content: String,
}
