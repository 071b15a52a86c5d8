//! `[[preset]]` configuration.
//!
//! A preset bundles docs, blog, and theme wiring under a single name.
//! Presets are an ordered list; names must be unique.
//!
//! # Example
//!
//! ```toml
//! [[preset]]
//! name = "classic"
//!
//! [preset.docs]
//! sidebar_path = "sidebars.toml"
//! edit_url = "https://github.com/facebookresearch/PyTouch/edit/master/website/"
//!
//! [preset.theme]
//! custom_css = "src/css/custom.css"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A named bundle of docs, blog, and theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset")]
pub struct PresetConfig {
    /// Preset name, unique across the preset list.
    #[config(default = "classic", inline_doc)]
    pub name: String,

    /// Docs plugin wiring.
    #[config(sub)]
    pub docs: DocsPresetConfig,

    /// Blog plugin wiring.
    #[config(sub)]
    pub blog: BlogPresetConfig,

    /// Theme wiring.
    #[config(sub)]
    pub theme: ThemePresetConfig,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            name: "classic".into(),
            docs: DocsPresetConfig::default(),
            blog: BlogPresetConfig::default(),
            theme: ThemePresetConfig::default(),
        }
    }
}

impl PresetConfig {
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.name.is_empty() {
            diag.error(Self::FIELDS.name, "preset name must not be empty");
        }
        self.theme.validate(diag);
    }
}

/// Docs part of a preset.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset.docs")]
pub struct DocsPresetConfig {
    /// Sidebar definition file for this preset.
    #[config(default = "sidebars.toml", inline_doc)]
    pub sidebar_path: PathBuf,

    /// Base URL for "edit this page" links.
    #[config(inline_doc)]
    pub edit_url: Option<String>,
}

impl Default for DocsPresetConfig {
    fn default() -> Self {
        Self {
            sidebar_path: "sidebars.toml".into(),
            edit_url: None,
        }
    }
}

/// Blog part of a preset.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset.blog")]
pub struct BlogPresetConfig {
    /// Enable the blog plugin.
    #[config(default = "true", inline_doc)]
    pub enable: bool,

    /// Show estimated reading time on posts.
    #[config(default = "true", inline_doc)]
    pub show_reading_time: bool,

    /// Base URL for "edit this page" links.
    #[config(inline_doc)]
    pub edit_url: Option<String>,
}

impl Default for BlogPresetConfig {
    fn default() -> Self {
        Self {
            enable: true,
            show_reading_time: true,
            edit_url: None,
        }
    }
}

/// Theme part of a preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset.theme")]
pub struct ThemePresetConfig {
    /// Extra stylesheet, relative to the site root.
    #[config(inline_doc)]
    pub custom_css: Option<PathBuf>,
}

impl ThemePresetConfig {
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if let Some(css) = &self.custom_css
            && css.is_absolute()
        {
            diag.error_with_hint(
                Self::FIELDS.custom_css,
                format!("'{}' must be relative to the site root", css.display()),
                "use a path like \"src/css/custom.css\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    #[test]
    fn test_defaults() {
        let preset = PresetConfig::default();
        assert_eq!(preset.name, "classic");
        assert_eq!(preset.docs.sidebar_path, PathBuf::from("sidebars.toml"));
        assert!(preset.blog.enable);
        assert!(preset.blog.show_reading_time);
        assert!(preset.theme.custom_css.is_none());
    }

    #[test]
    fn test_parse_nested_sections() {
        let preset: PresetConfig = toml::from_str(
            r#"
name = "classic"

[docs]
sidebar_path = "sidebars.toml"
edit_url = "https://github.com/facebookresearch/PyTouch/edit/master/website/"

[blog]
enable = false

[theme]
custom_css = "src/css/custom.css"
"#,
        )
        .unwrap();
        assert_eq!(preset.name, "classic");
        assert!(preset.docs.edit_url.is_some());
        assert!(!preset.blog.enable);
        assert_eq!(
            preset.theme.custom_css,
            Some(PathBuf::from("src/css/custom.css"))
        );
    }

    #[test]
    fn test_validate_rejects_absolute_css() {
        let mut diag = ConfigDiagnostics::new();
        let preset = PresetConfig {
            theme: ThemePresetConfig {
                custom_css: Some("/etc/custom.css".into()),
            },
            ..Default::default()
        };
        preset.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut diag = ConfigDiagnostics::new();
        let preset = PresetConfig {
            name: String::new(),
            ..Default::default()
        };
        preset.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
