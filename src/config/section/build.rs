//! `[build]` configuration: where the docs live on disk and where they
//! mount in the route space.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build inputs and route layout.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildConfig {
    /// Directory containing markdown documents.
    #[config(default = "docs", inline_doc)]
    pub docs_dir: PathBuf,

    /// Route prefix the docs mount under.
    #[config(default = "docs", inline_doc)]
    pub route_base: String,

    /// Sidebar definition file.
    #[config(default = "sidebars.toml", inline_doc)]
    pub sidebars: PathBuf,

    /// Allow fields marked experimental without warnings.
    #[config(inline_doc)]
    pub allow_experimental: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            docs_dir: "docs".into(),
            route_base: "docs".into(),
            sidebars: "sidebars.toml".into(),
            allow_experimental: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let build = BuildConfig::default();
        assert_eq!(build.docs_dir, PathBuf::from("docs"));
        assert_eq!(build.route_base, "docs");
        assert_eq!(build.sidebars, PathBuf::from("sidebars.toml"));
        assert!(!build.allow_experimental);
    }

    #[test]
    fn test_parse_overrides() {
        let build: BuildConfig =
            toml::from_str("docs_dir = \"website/docs\"\nroute_base = \"guide\"").unwrap();
        assert_eq!(build.docs_dir, PathBuf::from("website/docs"));
        assert_eq!(build.route_base, "guide");
    }
}
