//! `[site]` section configuration.
//!
//! Contains site metadata, navigation, footer, and link policies.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "PyTouch"
//! tagline = "A Machine Learning Library for Touch Processing"
//! url = "https://www.touch-sensing.org"
//! base_url = "/PyTouch/"
//!
//! [site.links]
//! on_broken_links = "throw"
//! on_broken_markdown_links = "warn"
//!
//! [site.navbar]
//! title = "PyTouch"
//! logo = { alt = "PyTouch Project Logo", src = "img/logo.svg" }
//!
//! [[site.navbar.items]]
//! to = "docs/"
//! label = "Docs"
//! position = "left"
//!
//! [site.footer]
//! style = "dark"
//!
//! [[site.footer.links]]
//! title = "Learn"
//! items = [{ label = "About PyTouch", to = "docs/" }]
//! ```

mod footer;
mod info;
mod links;
mod navbar;

pub use footer::{FooterConfig, FooterLink, FooterLinkGroup, FooterLogo, FooterStyle};
pub use info::SiteInfoConfig;
pub use links::{BrokenLinkPolicy, LinkPolicyConfig};
pub use navbar::{LogoConfig, NavbarConfig, NavbarItem, NavbarPosition};

use macros::Config;
use serde::{Deserialize, Serialize};

/// Site section configuration containing metadata and navigation structures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site metadata (title, tagline, url, base_url, etc.)
    #[config(sub)]
    pub info: SiteInfoConfig,

    /// Broken-link policies (throw vs warn).
    #[config(sub)]
    pub links: LinkPolicyConfig,

    /// Horizontal navigation bar (ordered items).
    #[config(sub)]
    pub navbar: NavbarConfig,

    /// Footer link groups (ordered).
    #[config(sub)]
    pub footer: FooterConfig,
}

impl SiteSectionConfig {
    /// Validate all site sub-sections.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        self.info.validate(diag);
        self.navbar.validate(diag);
        self.footer.validate(diag);
    }
}
