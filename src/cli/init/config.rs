//! Configuration file generation.
//!
//! Creates docsite.toml, sidebars.toml, a starter doc, and ignore
//! files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::site::{
    FooterConfig, LinkPolicyConfig, NavbarConfig, SiteInfoConfig,
};
use crate::config::section::BuildConfig;

/// Default config filename
const CONFIG_FILE: &str = "docsite.toml";

/// Default sidebar filename
const SIDEBARS_FILE: &str = "sidebars.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Starter sidebar definition matching the starter doc.
const SIDEBARS_STARTER: &str = "docs = [\"intro\"]\n";

/// Starter document.
const INTRO_DOC: &str = "# Introduction\n\nWelcome to your new documentation site.\n";

/// Navbar and footer items are lists, so they are easier to show as a
/// commented example than to generate from field defaults.
const ITEMS_EXAMPLE: &str = r#"# [[site.navbar.items]]
# to = "docs/"
# label = "Docs"
# position = "left"

# [[site.footer.links]]
# title = "Learn"
# items = [{ label = "Introduction", to = "docs/intro" }]
"#;

/// Default preset wiring.
const PRESET_EXAMPLE: &str = r#"[[preset]]
name = "classic"

[preset.docs]
sidebar_path = "sidebars.toml"

[preset.theme]
custom_css = "src/css/custom.css"
"#;

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Docsite configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site.info] section
    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    // [site.links] section
    out.push_str(&LinkPolicyConfig::template_with_header());
    out.push('\n');

    // [site.navbar] section
    out.push_str(&NavbarConfig::template_with_header());
    out.push('\n');

    // [site.footer] section
    out.push_str(&FooterConfig::template_with_header());
    out.push('\n');

    out.push_str(ITEMS_EXAMPLE);
    out.push('\n');

    // [build] section
    out.push_str(&BuildConfig::template_with_header());
    out.push('\n');

    out.push_str(PRESET_EXAMPLE);

    out
}

/// Write default docsite.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write starter sidebars.toml and docs/intro.md.
///
/// Existing files are left alone so re-running init never clobbers
/// user content.
pub fn write_starter_docs(root: &Path) -> Result<()> {
    let sidebars = root.join(SIDEBARS_FILE);
    if !sidebars.exists() {
        fs::write(&sidebars, SIDEBARS_STARTER)
            .with_context(|| format!("Failed to write '{}'", sidebars.display()))?;
    }

    let intro = root.join("docs/intro.md");
    if !intro.exists() {
        fs::write(&intro, INTRO_DOC)
            .with_context(|| format!("Failed to write '{}'", intro.display()))?;
    }

    let css = root.join("src/css/custom.css");
    if !css.exists() {
        fs::write(&css, "/* Site-wide style overrides */\n")
            .with_context(|| format!("Failed to write '{}'", css.display()))?;
    }

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = ["/build/", "/.docsite/", ".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_has_all_sections() {
        let template = generate_config_template();
        assert!(template.contains("[site.info]"));
        assert!(template.contains("[site.links]"));
        assert!(template.contains("[site.navbar]"));
        assert!(template.contains("[site.footer]"));
        assert!(template.contains("[build]"));
        assert!(template.contains("[[preset]]"));
    }

    #[test]
    fn test_template_is_valid_toml_after_init() {
        // The scaffold must parse back into a SiteConfig
        let template = generate_config_template();
        let config = crate::config::SiteConfig::from_str(&template).unwrap();
        assert_eq!(config.site.info.base_url, "/");
        assert_eq!(config.presets.len(), 1);
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let config_path = temp.path().join("docsite.toml");
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site.info]"));
        assert!(content.contains("on_broken_links"));
    }

    #[test]
    fn test_write_starter_docs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::create_dir_all(temp.path().join("src/css")).unwrap();
        write_starter_docs(temp.path()).unwrap();

        let sidebars = fs::read_to_string(temp.path().join("sidebars.toml")).unwrap();
        assert!(sidebars.contains("intro"));
        assert!(temp.path().join("docs/intro.md").exists());
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
