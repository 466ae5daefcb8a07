//! In-memory word lists loaded from a data directory.
//!
//! Every file under the data directory becomes one category, named after
//! the file's base name (`bunnies.txt` → `bunnies`). Each non-blank line,
//! with trailing whitespace removed, is one entry. Entries keep file order.

pub mod store;

pub use store::{ReloadSummary, WordStore};

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{CacheError, CacheResult};

/// Mapping from category name to its lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCache {
    categories: BTreeMap<String, Vec<String>>,
}

impl WordCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every file under `dir` (recursively) into a new cache.
    ///
    /// Symlinks are followed. When two files share a base name, the one
    /// whose full path sorts later wins.
    pub fn load_dir(dir: &Path) -> CacheResult<Self> {
        if !dir.is_dir() {
            return Err(CacheError::DirNotFound(dir.to_path_buf()));
        }

        // Collect first so files load in full-path byte order rather than
        // the walk's per-directory order.
        let mut files = Vec::new();
        let walker = WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

        let mut cache = Self::new();
        for path in &files {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!(path = %path.display(), "skipping file with non UTF-8 name");
                continue;
            };

            let text = std::fs::read_to_string(path).map_err(|source| CacheError::Read {
                path: path.clone(),
                source,
            })?;
            let lines = parse_lines(&text);
            debug!(category = name, lines = lines.len(), "loaded word list");

            if cache.categories.insert(name.to_string(), lines).is_some() {
                warn!(
                    category = name,
                    path = %path.display(),
                    "duplicate category name, later file wins"
                );
            }
        }

        info!(
            dir = %dir.display(),
            categories = cache.len(),
            lines = cache.total_lines(),
            "word cache loaded"
        );
        Ok(cache)
    }

    /// Insert or replace a category.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .insert(name.into(), lines.into_iter().map(Into::into).collect());
    }

    /// Look up a category by name.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    /// Look up a category, failing with [`CacheError::MissingCategory`].
    pub fn category(&self, name: &str) -> CacheResult<&[String]> {
        self.get(name)
            .ok_or_else(|| CacheError::MissingCategory(name.to_string()))
    }

    /// Whether a category is loaded.
    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Category names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Category names with their line counts, sorted by name.
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.categories
            .iter()
            .map(|(k, v)| (k.as_str(), v.len()))
            .collect()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether no categories are loaded.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of lines across all categories.
    pub fn total_lines(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
