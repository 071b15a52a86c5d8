//! `[site.links]` configuration for broken-link policies.
//!
//! # Example
//!
//! ```toml
//! [site.links]
//! on_broken_links = "throw"
//! on_broken_markdown_links = "warn"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

/// Broken-link policies applied by `docsite check`.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.links")]
pub struct LinkPolicyConfig {
    /// Policy for broken sidebar entries and navbar/footer routes.
    #[config(default = "throw", inline_doc)]
    pub on_broken_links: BrokenLinkPolicy,

    /// Policy for broken internal links inside markdown documents.
    #[config(default = "warn", inline_doc)]
    pub on_broken_markdown_links: BrokenLinkPolicy,

    /// Policy for broken heading anchors.
    #[config(status = not_implemented)]
    pub on_broken_anchors: Option<BrokenLinkPolicy>,
}

impl Default for LinkPolicyConfig {
    fn default() -> Self {
        Self {
            on_broken_links: BrokenLinkPolicy::Throw,
            on_broken_markdown_links: BrokenLinkPolicy::Warn,
            on_broken_anchors: None,
        }
    }
}

impl LinkPolicyConfig {
    /// Force both policies to `warn` (used by `check --warn-only`).
    pub fn set_warn_only(&mut self) {
        self.on_broken_links = BrokenLinkPolicy::Warn;
        self.on_broken_markdown_links = BrokenLinkPolicy::Warn;
    }
}

/// Build-time behavior when an internal reference does not resolve.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Fail the run with an error.
    #[default]
    Throw,
    /// Log and continue.
    Warn,
}

impl BrokenLinkPolicy {
    #[inline]
    pub fn is_throw(self) -> bool {
        self == Self::Throw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let links = LinkPolicyConfig::default();
        assert!(links.on_broken_links.is_throw());
        assert!(!links.on_broken_markdown_links.is_throw());
    }

    #[test]
    fn test_policy_deserializes_lowercase() {
        let links: LinkPolicyConfig =
            toml::from_str("on_broken_links = \"warn\"\non_broken_markdown_links = \"throw\"")
                .unwrap();
        assert_eq!(links.on_broken_links, BrokenLinkPolicy::Warn);
        assert_eq!(links.on_broken_markdown_links, BrokenLinkPolicy::Throw);
    }

    #[test]
    fn test_policy_rejects_unknown_value() {
        let result: Result<LinkPolicyConfig, _> = toml::from_str("on_broken_links = \"ignore\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_warn_only_override() {
        let mut links = LinkPolicyConfig::default();
        links.set_warn_only();
        assert_eq!(links.on_broken_links, BrokenLinkPolicy::Warn);
        assert_eq!(links.on_broken_markdown_links, BrokenLinkPolicy::Warn);
    }

    #[test]
    fn test_broken_anchors_is_not_implemented() {
        let mut diag = crate::config::ConfigDiagnostics::new();
        let links = LinkPolicyConfig {
            on_broken_anchors: Some(BrokenLinkPolicy::Warn),
            ..Default::default()
        };
        links.validate_field_status(&mut diag);
        assert!(diag.has_errors());
    }
}
