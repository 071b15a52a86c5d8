//! Sidebar entry types.
//!
//! A sidebar is an ordered list of entries; an entry is either a bare
//! doc id or a labeled category holding nested entries.
//!
//! ```toml
//! docs = [
//!     "intro",
//!     { label = "Tutorials", items = ["tutorials/train", "tutorials/eval"] },
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// One sidebar entry: a doc leaf or a nested category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Bare doc id, e.g. `"tutorials/train"`.
    Doc(String),
    /// Labeled group of nested entries.
    Category(SidebarCategory),
}

/// A labeled category of sidebar entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarCategory {
    /// Discriminator, only `"category"` is accepted when present.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Display label.
    pub label: String,

    /// Nested entries, in render order.
    #[serde(default)]
    pub items: Vec<SidebarEntry>,
}

impl SidebarEntry {
    /// Visit every doc id in this entry, depth-first in render order.
    pub fn for_each_doc<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            Self::Doc(id) => f(id),
            Self::Category(cat) => {
                for entry in &cat.items {
                    entry.for_each_doc(f);
                }
            }
        }
    }

    /// Collect all doc ids in this entry, depth-first.
    pub fn doc_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.for_each_doc(&mut |id| ids.push(id));
        ids
    }
}
