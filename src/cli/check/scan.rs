//! Markdown link extraction and classification.

use pulldown_cmark::{Event, Parser, Tag};

/// Extract link destinations from markdown source, in document order.
///
/// Images are skipped; only `[text](dest)` style links (inline,
/// reference, and autolink) are collected.
pub fn extract_links(content: &str) -> Vec<String> {
    Parser::new(content)
        .filter_map(|event| match event {
            Event::Start(Tag::Link { dest_url, .. }) => Some(dest_url.to_string()),
            _ => None,
        })
        .collect()
}

/// Classification of a markdown link destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocLink<'a> {
    /// Absolute URL or mail link; not checked.
    External,
    /// Same-page anchor (`#heading`); not checked.
    Anchor,
    /// Site-root route (`/docs/intro`).
    SiteRoot(&'a str),
    /// Relative to the source document (`../intro.md`).
    Relative(&'a str),
}

impl<'a> DocLink<'a> {
    pub fn parse(dest: &'a str) -> Self {
        if dest.starts_with("//") || dest.contains("://") || dest.starts_with("mailto:") {
            return Self::External;
        }
        if dest.starts_with('#') {
            return Self::Anchor;
        }
        // Strip query and fragment before path handling
        let path = dest.split(['#', '?']).next().unwrap_or(dest);
        if let Some(rooted) = path.strip_prefix('/') {
            Self::SiteRoot(rooted)
        } else {
            Self::Relative(path)
        }
    }
}

/// Resolve a relative markdown link against a source doc id.
///
/// `source_id` is the linking document's id (e.g. `tutorials/train`);
/// the link is resolved lexically against its directory and the
/// `.md`/`.mdx` extension is stripped. Returns `None` when `..` climbs
/// out of the docs tree.
///
/// ```text
/// ("tutorials/train", "../intro.md")   -> Some("intro")
/// ("tutorials/train", "eval.md")       -> Some("tutorials/eval")
/// ("intro", "../../outside.md")        -> None
/// ```
pub fn resolve_relative(source_id: &str, link: &str) -> Option<String> {
    let mut segments: Vec<&str> = source_id.split('/').collect();
    segments.pop(); // drop the file itself, keep its directory

    for part in link.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            _ => segments.push(part),
        }
    }

    let mut id = segments.join("/");
    for ext in [".md", ".mdx"] {
        if let Some(stripped) = id.strip_suffix(ext) {
            id = stripped.to_string();
            break;
        }
    }
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links() {
        let links = extract_links(
            "# Title\n\nSee [intro](intro.md) and [site](https://example.com).\n\n\
             ![logo](img/logo.svg)\n",
        );
        assert_eq!(links, vec!["intro.md", "https://example.com"]);
    }

    #[test]
    fn test_parse_classification() {
        assert_eq!(DocLink::parse("https://example.com"), DocLink::External);
        assert_eq!(DocLink::parse("mailto:a@b.c"), DocLink::External);
        assert_eq!(DocLink::parse("//cdn.example.com/x"), DocLink::External);
        assert_eq!(DocLink::parse("#heading"), DocLink::Anchor);
        assert_eq!(DocLink::parse("/docs/intro"), DocLink::SiteRoot("docs/intro"));
        assert_eq!(DocLink::parse("../intro.md"), DocLink::Relative("../intro.md"));
    }

    #[test]
    fn test_parse_strips_fragment() {
        assert_eq!(
            DocLink::parse("intro.md#setup"),
            DocLink::Relative("intro.md")
        );
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve_relative("tutorials/train", "../intro.md"),
            Some("intro".to_string())
        );
        assert_eq!(
            resolve_relative("tutorials/train", "eval.md"),
            Some("tutorials/eval".to_string())
        );
        assert_eq!(
            resolve_relative("intro", "tutorials/train.mdx"),
            Some("tutorials/train".to_string())
        );
        assert_eq!(resolve_relative("intro", "../../outside.md"), None);
    }
}
