use serde::{Deserialize, Serialize};

/// Architecture diagram plus the prose explaining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Architecture {
    /// Site-relative image path (e.g., "/Resources/images/diagram.png")
    pub image: String,
    pub description: String,
}
