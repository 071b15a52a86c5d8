//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── preset     # [[preset]]
//! │   └── site       # [site] and sub-sections
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── status     # FieldStatus
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                     |
//! |-----------------|---------------------------------------------|
//! | `[site.info]`   | Site metadata (title, url, base_url, ...)   |
//! | `[site.links]`  | Broken-link policies (throw vs warn)        |
//! | `[site.navbar]` | Navigation bar items                        |
//! | `[site.footer]` | Footer link groups                          |
//! | `[build]`       | Docs directory, route base, sidebar file    |
//! | `[[preset]]`    | Bundled docs/blog/theme wiring              |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    BlogPresetConfig, BuildConfig, DocsPresetConfig, PresetConfig, SiteSectionConfig,
    ThemePresetConfig,
};
pub use section::site::{
    BrokenLinkPolicy, FooterConfig, FooterLink, FooterLinkGroup, FooterStyle, LinkPolicyConfig,
    NavbarConfig, NavbarItem, NavbarPosition, SiteInfoConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site configuration (info, links, navbar, footer)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build inputs and route layout
    #[serde(default)]
    pub build: BuildConfig,

    /// Preset bundles, in declaration order
    #[serde(default, rename = "preset")]
    pub presets: Vec<PresetConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            build: BuildConfig::default(),
            presets: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'docsite init' to create a new project.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Set paths and apply CLI options
        config.config_path = config_path;
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        // Resolve root path
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.set_root(&root);
        self.normalize_paths(&root);
        self.apply_command_options(cli);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (docsite.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Sidebar file for this site.
    ///
    /// The first preset's `docs.sidebar_path` wins when presets are
    /// declared; otherwise `build.sidebars` applies.
    pub fn sidebars_path(&self) -> PathBuf {
        let path = self
            .presets
            .first()
            .map(|p| p.docs.sidebar_path.as_path())
            .unwrap_or(self.build.sidebars.as_path());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root_join(path)
        }
    }

    /// Absolute URL of the docs root, e.g.
    /// `https://www.touch-sensing.org/PyTouch/docs/`.
    pub fn docs_root_url(&self) -> String {
        crate::core::docs_root_url(
            self.site.info.url.as_deref(),
            &self.site.info.base_url,
            &self.build.route_base,
        )
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        match &cli.command {
            Commands::Check { args } => {
                // --warn-only downgrades every policy for this run
                if args.warn_only {
                    self.site.links.set_warn_only();
                }
            }
            // Query and Init don't modify config
            Commands::Query { .. } | Commands::Init { .. } => {}
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize paths that point into the project tree.
    fn normalize_paths(&mut self, root: &Path) {
        let root = crate::utils::path::normalize_path(root);
        self.set_root(&root);

        self.config_path = crate::utils::path::normalize_path(&self.config_path);
        self.build.docs_dir =
            crate::utils::path::normalize_path(&root.join(&self.build.docs_dir));
        // build.sidebars and preset sidebar_path stay relative; they are
        // resolved against root in sidebars_path().
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::with_allow_experimental(self.build.allow_experimental);

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        // Validate field status (experimental, deprecated, not_implemented)
        self.site.validate_field_status(&mut diag);
        for preset in &self.presets {
            preset.validate_field_status(&mut diag);
        }

        // Validate each section
        self.site.validate(&mut diag);
        self.validate_presets(&mut diag);

        // Print collected hints and warnings (grouped display)
        diag.print_hints_and_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate the preset list: per-preset checks plus name uniqueness.
    fn validate_presets(&self, diag: &mut ConfigDiagnostics) {
        let mut seen: Vec<&str> = Vec::new();
        for preset in &self.presets {
            preset.validate(diag);
            if seen.contains(&preset.name.as_str()) {
                diag.error_with_hint(
                    PresetConfig::FIELDS.name,
                    format!("duplicate preset name '{}'", preset.name),
                    "preset names must be unique",
                );
            } else {
                seen.push(&preset.name);
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site.info]\ntitle = \"Test\"\ntagline = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"My Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.info.title, "");
        assert_eq!(config.site.info.base_url, "/");
        assert!(config.presets.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content =
            "[site.info]\ntitle = \"Test\"\ntagline = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.info.title, "Test");
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site.info]\ntitle = \"Test\"\ntagline = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_full_site_parses() {
        let config = test_parse_config(
            r#"
[site.navbar]
title = "PyTouch"

[[site.navbar.items]]
label = "Docs"
to = "docs/"

[[preset]]
name = "classic"

[preset.docs]
sidebar_path = "sidebars.toml"
"#,
        );
        assert_eq!(config.site.navbar.items.len(), 1);
        assert_eq!(config.presets.len(), 1);
        assert_eq!(config.presets[0].name, "classic");
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = test_parse_config(
            r#"url = "https://www.touch-sensing.org"
base_url = "/PyTouch/"

[site.navbar]
title = "PyTouch"

[[site.navbar.items]]
label = "Docs"
to = "docs/"

[[site.navbar.items]]
label = "GitHub"
href = "https://github.com/facebookresearch/pytouch"
position = "right"

[[site.footer.links]]
title = "Learn"
items = [{ label = "Introduction", to = "docs/intro" }]

[[preset]]
name = "classic"
"#,
        );

        let serialized = toml::to_string(&config).unwrap();
        let reparsed = SiteConfig::from_str(&serialized).unwrap();

        // Re-serializing must reproduce the exact same document
        assert_eq!(toml::to_string(&reparsed).unwrap(), serialized);
        assert_eq!(
            reparsed.site.info.url.as_deref(),
            Some("https://www.touch-sensing.org")
        );
        assert_eq!(reparsed.site.info.base_url, "/PyTouch/");
        assert_eq!(reparsed.site.navbar.items.len(), 2);
        assert_eq!(reparsed.site.navbar.items[1].position, NavbarPosition::Right);
        assert_eq!(reparsed.site.footer.links[0].items[0].label, "Introduction");
        assert_eq!(reparsed.presets.len(), 1);
    }

    #[test]
    fn test_duplicate_preset_names_rejected() {
        let config = test_parse_config("[[preset]]\nname = \"classic\"\n[[preset]]\nname = \"classic\"");
        let mut diag = ConfigDiagnostics::new();
        config.validate_presets(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_docs_root_url_joins_base() {
        let config = test_parse_config("");
        let mut config = config;
        config.site.info.url = Some("https://www.touch-sensing.org".into());
        config.site.info.base_url = "/PyTouch/".into();
        assert_eq!(
            config.docs_root_url(),
            "https://www.touch-sensing.org/PyTouch/docs/"
        );
    }
}
