//! Sidebar definitions from `sidebars.toml`.
//!
//! The file is a map from sidebar id to an ordered list of entries:
//!
//! ```toml
//! docs = [
//!     "intro",
//!     { label = "Tutorials", items = ["tutorials/train", "tutorials/eval"] },
//! ]
//! api = ["api/overview"]
//! ```
//!
//! Structural validation lives in [`validate`]; resolving entries
//! against the docs tree lives in [`resolve`].

mod entry;
mod resolve;
mod validate;

pub use entry::{SidebarCategory, SidebarEntry};
pub use resolve::DocIndex;

use crate::config::{ConfigDiagnostics, ConfigError};
use anyhow::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// All sidebars of a site, keyed by sidebar id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarConfig {
    pub sidebars: FxHashMap<String, Vec<SidebarEntry>>,
}

impl SidebarConfig {
    /// Load sidebar definitions from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Parse sidebar definitions from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Sidebar ids in sorted order, for deterministic output.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sidebars.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Total number of doc leaves across all sidebars.
    pub fn doc_count(&self) -> usize {
        self.sidebars
            .values()
            .flatten()
            .map(|e| e.doc_ids().len())
            .sum()
    }

    /// Run structural validation over every sidebar.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate::validate_sidebars(self, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_sidebars() {
        let config = SidebarConfig::from_str(
            r#"
docs = [
    "intro",
    { label = "Tutorials", items = ["tutorials/train"] },
]
api = ["api/overview"]
"#,
        )
        .unwrap();
        assert_eq!(config.ids(), vec!["api", "docs"]);
        assert_eq!(config.doc_count(), 3);
    }

    #[test]
    fn test_parse_rejects_malformed_entry() {
        // A table without `label` is neither a doc id nor a category
        let result = SidebarConfig::from_str("docs = [{ items = [\"a\"] }]");
        assert!(result.is_err());
    }
}
