//! Doc index: which doc ids exist on disk.

use jwalk::WalkDir;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Doc ids discovered under the docs directory, with their source paths.
///
/// A doc id is the file path relative to the docs dir, extension
/// stripped, with `/` separators (e.g. `docs/tutorials/train.md`
/// becomes `tutorials/train`).
#[derive(Debug, Default)]
pub struct DocIndex {
    docs: FxHashMap<String, PathBuf>,
}

const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

impl DocIndex {
    /// Scan a docs directory for markdown documents.
    ///
    /// A missing directory yields an empty index; the caller decides
    /// whether that is an error.
    pub fn scan(docs_dir: &Path) -> Self {
        let mut docs = FxHashMap::default();

        if !docs_dir.is_dir() {
            return Self { docs };
        }

        for entry in WalkDir::new(docs_dir).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !DOC_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
                continue;
            }
            if let Some(id) = doc_id(&path, docs_dir) {
                docs.insert(id, path);
            }
        }

        Self { docs }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate over (doc id, source path) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.docs.iter().map(|(id, path)| (id.as_str(), path.as_path()))
    }

    /// All known ids in sorted order.
    pub fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.docs.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    #[cfg(test)]
    pub fn from_ids<I: IntoIterator<Item = S>, S: Into<String>>(ids: I) -> Self {
        Self {
            docs: ids
                .into_iter()
                .map(|id| (id.into(), PathBuf::new()))
                .collect(),
        }
    }
}

/// Doc id for a file under `docs_dir`, or `None` if outside it.
fn doc_id(path: &Path, docs_dir: &Path) -> Option<String> {
    let rel = path.strip_prefix(docs_dir).ok()?;
    let stem = rel.with_extension("");
    let id = stem
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_strips_extension_and_uses_slashes() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(docs.join("tutorials")).unwrap();
        fs::write(docs.join("intro.md"), "# Intro").unwrap();
        fs::write(docs.join("tutorials/train.mdx"), "# Train").unwrap();
        fs::write(docs.join("notes.txt"), "not a doc").unwrap();

        let index = DocIndex::scan(&docs);
        assert_eq!(index.len(), 2);
        assert!(index.contains("intro"));
        assert!(index.contains("tutorials/train"));
        assert!(!index.contains("notes"));
    }

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let index = DocIndex::scan(&dir.path().join("nope"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_sorted_ids() {
        let index = DocIndex::from_ids(["b", "a", "c"]);
        assert_eq!(index.sorted_ids(), vec!["a", "b", "c"]);
    }
}
