use serde::{Deserialize, Serialize};

/// Headline figure such as "Uptime: 99.99%". Values are display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}
