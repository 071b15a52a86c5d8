//! Site check command.
//!
//! Resolves sidebar entries, navbar/footer routes, and markdown links
//! against the docs tree, then applies the configured broken-link
//! policies (`[site.links]`).

mod report;
mod scan;

use anyhow::{Result, bail};

use crate::cli::CheckArgs;
use crate::config::{ConfigError, SiteConfig};
use crate::core::LinkTarget;
use crate::log;
use crate::sidebar::{DocIndex, SidebarConfig};
use crate::utils::{plural_count, plural_s};

use report::CheckReport;
use scan::{DocLink, extract_links, resolve_relative};

/// Check sidebars, routes, and markdown links.
pub fn check_site(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    let sidebar_path = config.sidebars_path();
    if !sidebar_path.exists() {
        bail!(
            "sidebar file '{}' not found",
            config.root_relative(&sidebar_path).display()
        );
    }

    let sidebars = SidebarConfig::from_path(&sidebar_path)?;

    // Structural problems are hard errors regardless of link policy
    let mut diag = crate::config::ConfigDiagnostics::new();
    sidebars.validate(&mut diag);
    diag.into_result()
        .map_err(|e| ConfigError::Diagnostics(e))?;

    let index = DocIndex::scan(&config.build.docs_dir);
    crate::debug!("check"; "docs on disk: {}", index.sorted_ids().join(", "));
    log!(
        "check";
        "{} in {} sidebar{}, {} on disk",
        plural_count(sidebars.doc_count(), "doc reference"),
        sidebars.sidebars.len(),
        plural_s(sidebars.sidebars.len()),
        plural_count(index.len(), "doc")
    );

    let mut report = CheckReport::default();

    if args.check_sidebar() {
        check_sidebars(&sidebars, &index, &mut report);
        log_section_result("sidebar entries", report.sidebars.values().map(Vec::len).sum());
    }

    if args.check_routes() {
        check_routes(config, &index, &mut report);
        log_section_result("routes", report.routes.values().map(Vec::len).sum());
    }

    if args.check_markdown() {
        check_markdown(config, &index, &mut report);
        log_section_result("markdown links", report.markdown.values().map(Vec::len).sum());
    }

    report.print();
    apply_policies(config, &report)
}

fn log_section_result(what: &str, broken: usize) {
    if broken > 0 {
        log!("check"; "found {} broken {}", broken, what);
    } else {
        log!("check"; "all {} valid", what);
    }
}

/// Every sidebar doc leaf must name a document on disk.
fn check_sidebars(sidebars: &SidebarConfig, index: &DocIndex, report: &mut CheckReport) {
    for id in sidebars.ids() {
        for entry in &sidebars.sidebars[id] {
            entry.for_each_doc(&mut |doc| {
                if !index.contains(doc) {
                    report.add_sidebar(id.to_string(), doc.to_string(), "not found".to_string());
                }
            });
        }
    }
}

/// Navbar and footer internal routes must resolve into the docs tree.
fn check_routes(config: &SiteConfig, index: &DocIndex, report: &mut CheckReport) {
    let route_base = &config.build.route_base;

    for item in &config.site.navbar.items {
        if let Ok(LinkTarget::Internal(route)) = item.target()
            && let Err(reason) = resolve_route(&route, route_base, index)
        {
            report.add_route("site.navbar.items".to_string(), route, reason);
        }
    }

    for group in &config.site.footer.links {
        for link in &group.items {
            if let Ok(LinkTarget::Internal(route)) = LinkTarget::classify(&link.to, &link.href)
                && let Err(reason) = resolve_route(&route, route_base, index)
            {
                report.add_route(
                    format!("site.footer.links.{}", group.title),
                    route,
                    reason,
                );
            }
        }
    }
}

/// Resolve an internal route against the docs tree.
///
/// - `docs/` (the bare route base) resolves when the docs tree is non-empty
/// - `docs/<id>` resolves when `<id>` is a known doc
/// - routes outside the docs route base are skipped
fn resolve_route(route: &str, route_base: &str, index: &DocIndex) -> Result<(), String> {
    let trimmed = route.trim_matches('/');

    if trimmed == route_base {
        if index.is_empty() {
            return Err("docs tree is empty".to_string());
        }
        return Ok(());
    }

    if let Some(rest) = trimmed.strip_prefix(route_base).and_then(|r| r.strip_prefix('/')) {
        if !index.contains(rest) {
            return Err(format!("doc '{}' not found", rest));
        }
    }

    // Not under the docs route base: out of scope here
    Ok(())
}

/// Internal `.md`/`.mdx` links inside docs must point at known docs.
fn check_markdown(config: &SiteConfig, index: &DocIndex, report: &mut CheckReport) {
    let route_base = &config.build.route_base;

    let mut docs: Vec<(&str, &std::path::Path)> = index.iter().collect();
    docs.sort_unstable_by_key(|(id, _)| *id);

    for (id, path) in docs {
        let Ok(content) = std::fs::read_to_string(path) else {
            continue;
        };

        for dest in extract_links(&content) {
            match DocLink::parse(&dest) {
                DocLink::External | DocLink::Anchor => {}
                DocLink::SiteRoot(route) => {
                    if let Err(reason) = resolve_route(route, route_base, index) {
                        report.add_markdown(id.to_string(), dest.clone(), reason);
                    }
                }
                DocLink::Relative(rel) => {
                    // Only markdown-file links are checked; assets are not
                    if !rel.ends_with(".md") && !rel.ends_with(".mdx") {
                        continue;
                    }
                    match resolve_relative(id, rel) {
                        Some(target) if index.contains(&target) => {}
                        Some(target) => report.add_markdown(
                            id.to_string(),
                            dest.clone(),
                            format!("doc '{}' not found", target),
                        ),
                        None => report.add_markdown(
                            id.to_string(),
                            dest.clone(),
                            "escapes the docs directory".to_string(),
                        ),
                    }
                }
            }
        }
    }
}

/// Apply `[site.links]` policies to the collected report.
fn apply_policies(config: &SiteConfig, report: &CheckReport) -> Result<()> {
    let link_errors = report.link_error_count();
    let markdown_errors = report.markdown_error_count();

    let mut fatal = Vec::new();

    if link_errors > 0 {
        if config.site.links.on_broken_links.is_throw() {
            fatal.push(format!("{} broken", plural_count(link_errors, "link")));
        } else {
            log!("warning"; "{} broken (on_broken_links = \"warn\")",
                plural_count(link_errors, "link"));
        }
    }

    if markdown_errors > 0 {
        if config.site.links.on_broken_markdown_links.is_throw() {
            fatal.push(format!(
                "{} broken",
                plural_count(markdown_errors, "markdown link")
            ));
        } else {
            log!("warning"; "{} broken (on_broken_markdown_links = \"warn\")",
                plural_count(markdown_errors, "markdown link"));
        }
    }

    if !fatal.is_empty() {
        bail!("check failed: {}", fatal.join(", "));
    }

    log!("check"; "{report}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_route_bare_base() {
        let index = DocIndex::from_ids(["intro"]);
        assert!(resolve_route("docs/", "docs", &index).is_ok());

        let empty = DocIndex::from_ids(Vec::<String>::new());
        assert!(resolve_route("docs/", "docs", &empty).is_err());
    }

    #[test]
    fn test_resolve_route_doc_id() {
        let index = DocIndex::from_ids(["intro", "tutorials/train"]);
        assert!(resolve_route("docs/tutorials/train", "docs", &index).is_ok());
        assert!(resolve_route("/docs/intro", "docs", &index).is_ok());
        assert!(resolve_route("docs/missing", "docs", &index).is_err());
    }

    #[test]
    fn test_resolve_route_outside_base_skipped() {
        let index = DocIndex::from_ids(["intro"]);
        assert!(resolve_route("blog/", "docs", &index).is_ok());
        assert!(resolve_route("docsother/page", "docs", &index).is_ok());
    }

    #[test]
    fn test_check_sidebars_reports_missing() {
        let sidebars = SidebarConfig::from_str("docs = [\"intro\", \"missing\"]").unwrap();
        let index = DocIndex::from_ids(["intro"]);
        let mut report = CheckReport::default();
        check_sidebars(&sidebars, &index, &mut report);

        assert_eq!(report.link_error_count(), 1);
        assert_eq!(report.sidebars["docs"][0].target, "missing");
    }
}
