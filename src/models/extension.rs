//! File extension metadata.

use serde::{Deserialize, Serialize};

/// Metadata describing one file extension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtensionInfo {
    /// Extension including the leading dot, e.g. `.mp4`
    pub extension: String,

    /// Category label, e.g. `Video`
    pub category: String,

    /// What the format is
    pub description: String,

    /// What the format is typically used for
    #[serde(alias = "uses")]
    pub common_use: String,

    /// Applications that open the format, in preference order
    #[serde(default)]
    pub applications: Vec<String>,
}

impl ExtensionInfo {
    pub fn new(
        extension: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        common_use: impl Into<String>,
        applications: Vec<String>,
    ) -> Self {
        Self {
            extension: extension.into(),
            category: category.into(),
            description: description.into(),
            common_use: common_use.into(),
            applications,
        }
    }
}
