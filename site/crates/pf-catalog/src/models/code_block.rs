use serde::{Deserialize, Serialize};

/// Standalone snippet shown in the code deep-dive section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub title: String,
    pub language: String,
    pub code: String,
}

impl CodeBlock {
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }
}
