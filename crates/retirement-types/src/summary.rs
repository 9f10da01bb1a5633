//! Listing row for the certificate index.

use serde::{Deserialize, Serialize};

/// Shown in `retiredBy` when the retiring address could not be resolved.
pub const RETIRED_BY_PLACEHOLDER: &str = "-";

/// Shown when the token instance carries no name.
pub const DEFAULT_TITLE: &str = "Certificate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSummary {
    pub id: String,
    pub title: String,
    pub amount: String,
    pub retired_by: String,
}

impl CertificateSummary {
    /// Row for an entry whose lookups all failed.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: DEFAULT_TITLE.to_string(),
            amount: String::new(),
            retired_by: RETIRED_BY_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.retired_by != RETIRED_BY_PLACEHOLDER
    }
}
