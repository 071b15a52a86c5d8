//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A single broken reference.
#[derive(Debug, Clone)]
pub struct CheckError {
    /// The doc id, route, or link that failed.
    pub target: String,
    /// Error reason/message.
    pub reason: String,
}

/// Unified check report for all error types.
///
/// Sections are grouped by source: sidebar id for sidebar errors,
/// config location for route errors, doc id for markdown errors.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Broken sidebar doc ids, grouped by sidebar id.
    pub sidebars: BTreeMap<String, Vec<CheckError>>,
    /// Broken navbar/footer routes, grouped by config location.
    pub routes: BTreeMap<String, Vec<CheckError>>,
    /// Broken markdown links, grouped by source doc id.
    pub markdown: BTreeMap<String, Vec<CheckError>>,
}

impl CheckReport {
    /// Add a broken sidebar entry.
    pub fn add_sidebar(&mut self, sidebar_id: String, doc_id: String, reason: String) {
        self.sidebars
            .entry(sidebar_id)
            .or_default()
            .push(CheckError {
                target: doc_id,
                reason,
            });
    }

    /// Add a broken navbar/footer route.
    pub fn add_route(&mut self, location: String, route: String, reason: String) {
        self.routes.entry(location).or_default().push(CheckError {
            target: route,
            reason,
        });
    }

    /// Add a broken markdown link.
    pub fn add_markdown(&mut self, source: String, link: String, reason: String) {
        self.markdown.entry(source).or_default().push(CheckError {
            target: link,
            reason,
        });
    }

    /// Total broken sidebar entries + routes (covered by `on_broken_links`).
    pub fn link_error_count(&self) -> usize {
        count(&self.sidebars) + count(&self.routes)
    }

    /// Total broken markdown links (covered by `on_broken_markdown_links`).
    pub fn markdown_error_count(&self) -> usize {
        count(&self.markdown)
    }

    pub fn total_error_count(&self) -> usize {
        self.link_error_count() + self.markdown_error_count()
    }

    /// Print the full report to stderr (sidebars -> routes -> markdown).
    pub fn print(&self) {
        self.print_section("sidebars", &self.sidebars);
        self.print_section("routes", &self.routes);
        self.print_section("markdown", &self.markdown);
    }

    fn print_section(&self, name: &str, errors: &BTreeMap<String, Vec<CheckError>>) {
        if errors.is_empty() {
            return;
        }
        eprintln!();

        let file_count = errors.len();
        let error_count = count(errors);

        // Section header
        eprintln!(
            "{} {}",
            name.red().bold(),
            format!(
                "({file_count} source{}, {error_count} error{})",
                plural_s(file_count),
                plural_s(error_count)
            )
            .dimmed()
        );

        for (source, errs) in errors {
            eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
            for e in errs {
                if e.reason.is_empty() {
                    eprintln!("{} {}", "→".red(), e.target);
                } else {
                    eprintln!("{} {} {}", "→".red(), e.target, e.reason);
                }
            }
        }
    }
}

fn count(errors: &BTreeMap<String, Vec<CheckError>>) -> usize {
    errors.values().map(|v| v.len()).sum()
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_error_count();
        if total == 0 {
            write!(f, "{}", "all checks passed".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{}", plural_s(total)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_policy_group() {
        let mut report = CheckReport::default();
        report.add_sidebar("docs".into(), "missing".into(), "not found".into());
        report.add_route("site.navbar".into(), "docs/nope".into(), "not found".into());
        report.add_markdown("intro".into(), "./gone.md".into(), "not found".into());

        assert_eq!(report.link_error_count(), 2);
        assert_eq!(report.markdown_error_count(), 1);
        assert_eq!(report.total_error_count(), 3);
    }

    #[test]
    fn test_display_all_passed() {
        let report = CheckReport::default();
        // Color escapes may wrap the text, so match on content only
        assert!(format!("{report}").contains("all checks passed"));

        let mut report = CheckReport::default();
        report.add_sidebar("docs".into(), "missing".into(), "not found".into());
        assert!(format!("{report}").contains('1'));
    }

    #[test]
    fn test_groups_by_source() {
        let mut report = CheckReport::default();
        report.add_sidebar("docs".into(), "a".into(), String::new());
        report.add_sidebar("docs".into(), "b".into(), String::new());
        report.add_sidebar("api".into(), "c".into(), String::new());

        assert_eq!(report.sidebars.len(), 2);
        assert_eq!(report.sidebars["docs"].len(), 2);
    }
}
