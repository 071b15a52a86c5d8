//! `[site.info]` configuration.
//!
//! Basic site identity: title, tagline, deployment URL, and the path
//! prefix the site is served under.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site metadata consumed by the renderer and by URL generation.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.info")]
pub struct SiteInfoConfig {
    /// Site title shown in the browser tab and navbar fallback.
    #[config(inline_doc)]
    pub title: String,

    /// Short tagline shown on the landing page.
    #[config(inline_doc)]
    pub tagline: String,

    /// Deployment URL, scheme and host only (e.g. "https://example.org").
    #[config(inline_doc)]
    pub url: Option<String>,

    /// Path prefix the site is served under. Must start and end with "/".
    #[config(default = "/", inline_doc)]
    pub base_url: String,

    /// GitHub organization or user that owns the project.
    #[config(inline_doc)]
    pub organization: String,

    /// Project repository name.
    #[config(inline_doc)]
    pub project: String,

    /// Favicon path, relative to the static assets directory.
    #[config(inline_doc)]
    pub favicon: Option<PathBuf>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: None,
            base_url: "/".into(),
            organization: String::new(),
            project: String::new(),
            favicon: None,
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `base_url` must start and end with `/` and contain no whitespace
    /// - `url` must be a valid http(s) URL with a host, without a path
    ///   component (the path belongs in `base_url`)
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        self.validate_base_url(diag);
        self.validate_url(diag);
    }

    fn validate_base_url(&self, diag: &mut crate::config::ConfigDiagnostics) {
        let base = &self.base_url;

        if base.is_empty() || !base.starts_with('/') || !base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("'{}' must start and end with '/'", base),
                "use format like \"/\" or \"/PyTouch/\"",
            );
            return;
        }

        if base.chars().any(char::is_whitespace) {
            diag.error(
                Self::FIELDS.base_url,
                format!("'{}' must not contain whitespace", base),
            );
        }

        if base.contains("//") && base != "/" {
            diag.error(
                Self::FIELDS.base_url,
                format!("'{}' contains an empty path segment", base),
            );
        }
    }

    fn validate_url(&self, diag: &mut crate::config::ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                // Must be http or https
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                // Must have a valid host
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                // Path prefixes belong in base_url so joins stay predictable
                if !matches!(parsed.path(), "" | "/") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("URL must not contain a path ('{}')", parsed.path()),
                        format!("move the path into {}", Self::FIELDS.base_url),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}
