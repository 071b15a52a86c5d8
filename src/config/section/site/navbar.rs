//! `[site.navbar]` configuration.
//!
//! The navbar is an ordered list of items; render order is list order.
//!
//! # Example
//!
//! ```toml
//! [site.navbar]
//! title = "PyTouch"
//! logo = { alt = "PyTouch Project Logo", src = "img/logo.svg" }
//!
//! [[site.navbar.items]]
//! to = "docs/"
//! label = "Docs"
//! position = "left"
//! ```

use crate::core::{LinkTarget, LinkTargetError};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Horizontal navigation bar configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.navbar")]
pub struct NavbarConfig {
    /// Navbar title; falls back to `site.info.title` when unset.
    #[config(inline_doc)]
    pub title: Option<String>,

    /// Navbar logo.
    #[config(hidden)]
    pub logo: Option<LogoConfig>,

    /// Ordered navbar items.
    #[config(hidden)]
    pub items: Vec<NavbarItem>,

    /// Hide the navbar when scrolling down.
    #[config(status = experimental)]
    pub hide_on_scroll: bool,
}

impl NavbarConfig {
    /// Validate navbar items: non-empty labels, exactly one link target.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        for (i, item) in self.items.iter().enumerate() {
            if item.label.is_empty() {
                diag.error(
                    Self::FIELDS.items,
                    format!("item {} has an empty label", i + 1),
                );
            }

            if let Err(e) = LinkTarget::classify(&item.to, &item.href) {
                diag.error_with_hint(
                    Self::FIELDS.items,
                    format!("item '{}': {}", item.label, e),
                    "use `to` for internal routes, `href` for external URLs",
                );
            }
        }
    }
}

/// A single navbar entry. Exactly one of `to`/`href` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavbarItem {
    /// Display label.
    pub label: String,

    /// Internal route (e.g. "docs/").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// External URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Which side of the navbar the item renders on.
    #[serde(default)]
    pub position: NavbarPosition,

    /// Route prefix that marks this item active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_base_path: Option<String>,
}

impl NavbarItem {
    /// Classify the item's link target.
    pub fn target(&self) -> Result<LinkTarget, LinkTargetError> {
        LinkTarget::classify(&self.to, &self.href)
    }
}

/// Navbar side. Render order within a side is list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// Navbar or footer logo reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoConfig {
    /// Alt text for accessibility.
    pub alt: String,

    /// Image path, relative to the static assets directory.
    pub src: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    fn item(label: &str, to: Option<&str>, href: Option<&str>) -> NavbarItem {
        NavbarItem {
            label: label.into(),
            to: to.map(Into::into),
            href: href.map(Into::into),
            position: NavbarPosition::default(),
            active_base_path: None,
        }
    }

    #[test]
    fn test_position_deserializes_left_right_only() {
        let left: NavbarPosition = toml::from_str::<toml::Value>("v = \"left\"")
            .and_then(|v| v["v"].clone().try_into())
            .unwrap();
        assert_eq!(left, NavbarPosition::Left);

        let right: NavbarPosition = toml::from_str::<toml::Value>("v = \"right\"")
            .and_then(|v| v["v"].clone().try_into())
            .unwrap();
        assert_eq!(right, NavbarPosition::Right);

        let bad: Result<NavbarPosition, _> = toml::from_str::<toml::Value>("v = \"center\"")
            .and_then(|v| v["v"].clone().try_into());
        assert!(bad.is_err());
    }

    #[test]
    fn test_position_defaults_to_left() {
        let parsed: NavbarItem = toml::from_str("label = \"Docs\"\nto = \"docs/\"").unwrap();
        assert_eq!(parsed.position, NavbarPosition::Left);
    }

    #[test]
    fn test_validate_requires_exactly_one_target() {
        let mut diag = ConfigDiagnostics::new();
        let navbar = NavbarConfig {
            items: vec![
                item("Docs", Some("docs/"), None),
                item("GitHub", None, Some("https://github.com/facebookresearch/pytouch")),
                item("Both", Some("docs/"), Some("https://example.com")),
                item("Neither", None, None),
            ],
            ..Default::default()
        };
        navbar.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_validate_rejects_empty_label() {
        let mut diag = ConfigDiagnostics::new();
        let navbar = NavbarConfig {
            items: vec![item("", Some("docs/"), None)],
            ..Default::default()
        };
        navbar.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_item_order_preserved() {
        let navbar: NavbarConfig = toml::from_str(
            r#"
[[items]]
label = "Docs"
to = "docs/"

[[items]]
label = "GitHub"
href = "https://github.com/facebookresearch/pytouch"
position = "right"
"#,
        )
        .unwrap();
        assert_eq!(navbar.items.len(), 2);
        assert_eq!(navbar.items[0].label, "Docs");
        assert_eq!(navbar.items[1].label, "GitHub");
        assert_eq!(navbar.items[1].position, NavbarPosition::Right);
    }
}
