//! Structural validation of sidebar definitions.
//!
//! Checks shape only; whether doc ids exist on disk is the resolver's
//! job ([`super::resolve`]).

use super::{SidebarConfig, SidebarEntry};
use crate::config::{ConfigDiagnostics, FieldPath};
use regex::Regex;
use std::sync::LazyLock;

/// Doc ids are slash-separated segments of `[A-Za-z0-9._-]`.
static DOC_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+(?:/[A-Za-z0-9._-]+)*$").unwrap());

/// Build a FieldPath for a dynamic sidebar location.
fn field(path: String) -> FieldPath {
    FieldPath::from_string(path)
}

pub(super) fn validate_sidebars(config: &SidebarConfig, diag: &mut ConfigDiagnostics) {
    for id in config.ids() {
        if id.is_empty() {
            diag.error(FieldPath::new("sidebars"), "sidebar id must not be empty");
            continue;
        }
        validate_level(&config.sidebars[id], &format!("sidebars.{id}"), diag);
    }
}

/// Validate one nesting level: entry shapes plus duplicate doc ids.
///
/// Duplicates are checked per level only; the same doc may appear in
/// different categories.
fn validate_level(entries: &[SidebarEntry], path: &str, diag: &mut ConfigDiagnostics) {
    let mut seen: Vec<&str> = Vec::new();

    for entry in entries {
        match entry {
            SidebarEntry::Doc(id) => {
                if !DOC_ID.is_match(id) {
                    diag.error_with_hint(
                        field(path.to_string()),
                        format!("invalid doc id '{}'", id),
                        "doc ids are slash-separated segments of letters, digits, '.', '_', '-'",
                    );
                    continue;
                }
                if seen.contains(&id.as_str()) {
                    diag.error(
                        field(path.to_string()),
                        format!("duplicate doc id '{}' at the same level", id),
                    );
                } else {
                    seen.push(id);
                }
            }
            SidebarEntry::Category(cat) => {
                if cat.label.is_empty() {
                    diag.error(field(path.to_string()), "category label must not be empty");
                }
                if let Some(kind) = &cat.kind
                    && kind != "category"
                {
                    diag.error_with_hint(
                        field(path.to_string()),
                        format!("unknown entry type '{}'", kind),
                        "only \"category\" is supported",
                    );
                }
                if cat.items.is_empty() {
                    diag.error(
                        field(path.to_string()),
                        format!("category '{}' has no items", cat.label),
                    );
                }
                validate_level(&cat.items, &format!("{path}.{}", cat.label), diag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(content: &str) -> ConfigDiagnostics {
        let config = SidebarConfig::from_str(content).unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag
    }

    #[test]
    fn test_valid_sidebar() {
        let diag = validate(
            r#"docs = [
    "intro",
    { type = "category", label = "Tutorials", items = ["tutorials/train"] },
]"#,
        );
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_rejects_invalid_doc_id() {
        let diag = validate("docs = [\"bad id with spaces\"]");
        assert!(diag.has_errors());

        let diag = validate("docs = [\"trailing/\"]");
        assert!(diag.has_errors());
    }

    #[test]
    fn test_rejects_duplicate_at_same_level() {
        let diag = validate("docs = [\"intro\", \"intro\"]");
        assert!(diag.has_errors());
    }

    #[test]
    fn test_allows_duplicate_across_levels() {
        let diag = validate(
            r#"docs = [
    "intro",
    { label = "Extra", items = ["intro"] },
]"#,
        );
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_rejects_empty_category() {
        let diag = validate(r#"docs = [{ label = "Empty", items = [] }]"#);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_rejects_unknown_type() {
        let diag = validate(r#"docs = [{ type = "link", label = "X", items = ["a"] }]"#);
        assert!(diag.has_errors());
    }
}
