//! `[site.footer]` configuration.
//!
//! Footer link groups render in list order; within-group items render in
//! list order.
//!
//! # Example
//!
//! ```toml
//! [site.footer]
//! style = "dark"
//! copyright = "Copyright © Facebook, Inc."
//!
//! [[site.footer.links]]
//! title = "Community"
//! items = [
//!     { label = "Touch Sensing", href = "https://www.touch-sensing.org/" },
//! ]
//! ```

use super::navbar::LogoConfig;
use crate::core::LinkTarget;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Footer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.footer")]
pub struct FooterConfig {
    /// Footer color style.
    #[config(default = "light", inline_doc)]
    pub style: FooterStyle,

    /// Copyright notice.
    #[config(inline_doc)]
    pub copyright: String,

    /// Footer logo.
    #[config(hidden)]
    pub logo: Option<FooterLogo>,

    /// Ordered footer link groups.
    #[config(hidden)]
    pub links: Vec<FooterLinkGroup>,
}

impl FooterConfig {
    /// Validate footer groups: non-empty titles and labels, one target each.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        for group in &self.links {
            if group.title.is_empty() {
                diag.error(Self::FIELDS.links, "link group has an empty title");
            }

            for item in &group.items {
                if item.label.is_empty() {
                    diag.error(
                        Self::FIELDS.links,
                        format!("group '{}' has an item with an empty label", group.title),
                    );
                }

                if let Err(e) = LinkTarget::classify(&item.to, &item.href) {
                    diag.error_with_hint(
                        Self::FIELDS.links,
                        format!("group '{}', item '{}': {}", group.title, item.label, e),
                        "use `to` for internal routes, `href` for external URLs",
                    );
                }
            }
        }
    }
}

/// Footer color style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// A titled group of footer links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLinkGroup {
    /// Group heading.
    pub title: String,

    /// Ordered links within the group.
    #[serde(default)]
    pub items: Vec<FooterLink>,
}

/// A single footer link. Exactly one of `to`/`href` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    /// Display label.
    pub label: String,

    /// Internal route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// External URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Footer logo, optionally linking out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLogo {
    #[serde(flatten)]
    pub logo: LogoConfig,

    /// Optional external link for the logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    #[test]
    fn test_style_deserializes_lowercase() {
        let footer: FooterConfig = toml::from_str("style = \"dark\"").unwrap();
        assert_eq!(footer.style, FooterStyle::Dark);

        let footer: FooterConfig = toml::from_str("").unwrap();
        assert_eq!(footer.style, FooterStyle::Light);
    }

    #[test]
    fn test_group_order_preserved() {
        let footer: FooterConfig = toml::from_str(
            r#"
[[links]]
title = "Learn"
items = [
    { label = "About PyTouch", to = "docs/" },
    { label = "Installation", to = "docs/install" },
]

[[links]]
title = "Community"
items = [{ label = "DIGIT", href = "https://digit.ml" }]
"#,
        )
        .unwrap();
        assert_eq!(footer.links.len(), 2);
        assert_eq!(footer.links[0].title, "Learn");
        assert_eq!(footer.links[0].items[1].label, "Installation");
        assert_eq!(footer.links[1].title, "Community");
    }

    #[test]
    fn test_validate_rejects_double_target() {
        let mut diag = ConfigDiagnostics::new();
        let footer = FooterConfig {
            links: vec![FooterLinkGroup {
                title: "More".into(),
                items: vec![FooterLink {
                    label: "GitHub".into(),
                    to: Some("docs/".into()),
                    href: Some("https://github.com".into()),
                }],
            }],
            ..Default::default()
        };
        footer.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_empty_group_title() {
        let mut diag = ConfigDiagnostics::new();
        let footer = FooterConfig {
            links: vec![FooterLinkGroup {
                title: String::new(),
                items: vec![],
            }],
            ..Default::default()
        };
        footer.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_footer_logo_with_href() {
        let footer: FooterConfig = toml::from_str(
            r#"logo = { alt = "Open Source Logo", src = "img/oss_logo.png", href = "https://opensource.facebook.com" }"#,
        )
        .unwrap();
        let logo = footer.logo.unwrap();
        assert_eq!(logo.logo.alt, "Open Source Logo");
        assert_eq!(logo.href.as_deref(), Some("https://opensource.facebook.com"));
    }
}
