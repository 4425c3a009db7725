use serde::{Deserialize, Serialize};

/// Problem / solution / results summary at the top of a project page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub problem: String,
    pub solution: String,
    #[serde(default)]
    pub results: Vec<String>,
}
