//! Persisted shortlist of saved properties: a whole-document JSON list behind
//! a small repository trait so the backend stays swappable.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;

/// A saved property. `name` is the unique key (exact, case-sensitive match).
/// Field names follow the persisted camelCase JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistEntry {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub photo_uri: String,
    #[serde(default)]
    pub place_id: String,
}

/// Storage backend for the shortlist. Reads and writes the entire list;
/// fine for a human-curated list of tens of entries.
pub trait ShortlistRepo {
    /// Load the full list. Missing or unparsable content is the empty list,
    /// never an error.
    fn load(&self) -> Vec<ShortlistEntry>;

    /// Write back the full list
    fn store(&self, entries: &[ShortlistEntry]) -> Result<()>;
}

/// JSON-file backend under the data directory
pub struct FileRepo {
    path: PathBuf,
}

impl FileRepo {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Config::shortlist_path()?))
    }
}

impl ShortlistRepo for FileRepo {
    fn load(&self) -> Vec<ShortlistEntry> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn store(&self, entries: &[ShortlistEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        // Write-then-rename so a crash mid-write never corrupts the list
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Shortlist operations over a repository
pub struct ShortlistStore<R: ShortlistRepo> {
    repo: R,
}

impl ShortlistStore<FileRepo> {
    /// Store backed by the default shortlist file
    pub fn open() -> Result<Self> {
        Ok(Self::with_repo(FileRepo::open_default()?))
    }
}

impl<R: ShortlistRepo> ShortlistStore<R> {
    pub fn with_repo(repo: R) -> Self {
        Self { repo }
    }

    /// Append an entry unless one with the same name already exists.
    /// Returns whether the entry was inserted.
    pub fn add(&self, entry: ShortlistEntry) -> Result<bool> {
        let mut entries = self.repo.load();
        if entries.iter().any(|e| e.name == entry.name) {
            return Ok(false);
        }
        entries.push(entry);
        self.repo.store(&entries)?;
        Ok(true)
    }

    /// Remove all entries matching `name` exactly. Removing a name that is
    /// not present is a no-op. Returns whether anything was removed.
    pub fn remove(&self, name: &str) -> Result<bool> {
        let entries = self.repo.load();
        let before = entries.len();
        let kept: Vec<ShortlistEntry> =
            entries.into_iter().filter(|e| e.name != name).collect();
        let removed = kept.len() != before;
        self.repo.store(&kept)?;
        Ok(removed)
    }

    /// Save or unsave an entry
    pub fn toggle(&self, entry: ShortlistEntry, saved: bool) -> Result<()> {
        if saved {
            self.add(entry)?;
        } else {
            self.remove(&entry.name)?;
        }
        Ok(())
    }

    /// Full persisted list, insertion order preserved
    pub fn list(&self) -> Vec<ShortlistEntry> {
        self.repo.load()
    }

    /// Wipe the list
    pub fn clear(&self) -> Result<()> {
        self.repo.store(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory repo for unit tests
    struct MemRepo {
        entries: RefCell<Vec<ShortlistEntry>>,
    }

    impl MemRepo {
        fn empty() -> Self {
            Self { entries: RefCell::new(Vec::new()) }
        }
    }

    impl ShortlistRepo for MemRepo {
        fn load(&self) -> Vec<ShortlistEntry> {
            self.entries.borrow().clone()
        }

        fn store(&self, entries: &[ShortlistEntry]) -> Result<()> {
            *self.entries.borrow_mut() = entries.to_vec();
            Ok(())
        }
    }

    fn entry(name: &str) -> ShortlistEntry {
        ShortlistEntry {
            name: name.to_string(),
            location: "Goa".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let store = ShortlistStore::with_repo(MemRepo::empty());
        assert!(store.add(entry("Sea View Resort")).unwrap());
        assert!(!store.add(entry("Sea View Resort")).unwrap());
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_remove_is_complete_and_noop_on_absent() {
        let store = ShortlistStore::with_repo(MemRepo::empty());
        store.add(entry("A")).unwrap();
        store.add(entry("B")).unwrap();

        assert!(store.remove("A").unwrap());
        assert!(store.list().iter().all(|e| e.name != "A"));

        assert!(!store.remove("missing").unwrap());
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let store = ShortlistStore::with_repo(MemRepo::empty());
        store.add(entry("Lotus Inn")).unwrap();
        assert!(store.add(entry("lotus inn")).unwrap());
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_toggle_round_trip() {
        let store = ShortlistStore::with_repo(MemRepo::empty());
        store.add(entry("A")).unwrap();
        let before = store.list();

        store.toggle(entry("B"), true).unwrap();
        store.toggle(entry("B"), false).unwrap();

        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = ShortlistStore::with_repo(MemRepo::empty());
        for name in ["C", "A", "B"] {
            store.add(entry(name)).unwrap();
        }
        let names: Vec<_> = store.list().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
