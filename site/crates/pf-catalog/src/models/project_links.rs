use serde::{Deserialize, Serialize};

/// External links for a project. The repository link is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}
