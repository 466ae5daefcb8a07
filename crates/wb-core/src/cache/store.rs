//! Owned, reloadable word store.

use std::path::{Path, PathBuf};

use tracing::info;

use super::WordCache;
use crate::error::CacheResult;

/// Outcome of a successful reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadSummary {
    /// Categories loaded.
    pub categories: usize,
    /// Lines loaded across all categories.
    pub lines: usize,
}

impl std::fmt::Display for ReloadSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} list{}, {} line{}",
            self.categories,
            if self.categories == 1 { "" } else { "s" },
            self.lines,
            if self.lines == 1 { "" } else { "s" },
        )
    }
}

/// A word cache bound to the directory it was loaded from.
///
/// Reloading builds a complete new cache before replacing the old one, so a
/// failed reload leaves the current contents in place.
#[derive(Debug, Clone)]
pub struct WordStore {
    dir: PathBuf,
    cache: WordCache,
}

impl WordStore {
    /// Load the store from `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> CacheResult<Self> {
        let dir = dir.into();
        let cache = WordCache::load_dir(&dir)?;
        Ok(Self { dir, cache })
    }

    /// Wrap an already-built cache. `reload` will read from `dir`.
    pub fn from_cache(dir: impl Into<PathBuf>, cache: WordCache) -> Self {
        Self {
            dir: dir.into(),
            cache,
        }
    }

    /// The directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The current cache contents.
    pub fn cache(&self) -> &WordCache {
        &self.cache
    }

    /// Re-read the data directory and replace the cache wholesale.
    pub fn reload(&mut self) -> CacheResult<ReloadSummary> {
        let fresh = WordCache::load_dir(&self.dir)?;
        self.cache = fresh;
        let summary = ReloadSummary {
            categories: self.cache.len(),
            lines: self.cache.total_lines(),
        };
        info!(dir = %self.dir.display(), %summary, "word cache reloaded");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reload_picks_up_new_contents() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ninjas.txt"), "old ninja\n").unwrap();
        let mut store = WordStore::open(dir.path()).unwrap();
        assert_eq!(store.cache().get("ninjas").unwrap(), ["old ninja"]);

        fs::write(dir.path().join("ninjas.txt"), "new ninja\nnewer ninja\n").unwrap();
        fs::write(dir.path().join("bunnies.txt"), "a bunny\n").unwrap();
        let summary = store.reload().unwrap();

        assert_eq!(summary, ReloadSummary { categories: 2, lines: 3 });
        assert_eq!(store.cache().get("ninjas").unwrap(), ["new ninja", "newer ninja"]);
        assert!(store.cache().contains("bunnies"));
    }

    #[test]
    fn reload_drops_removed_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "x\n").unwrap();
        fs::write(dir.path().join("b.txt"), "y\n").unwrap();
        let mut store = WordStore::open(dir.path()).unwrap();
        fs::remove_file(dir.path().join("b.txt")).unwrap();
        store.reload().unwrap();
        assert!(!store.cache().contains("b"));
        assert_eq!(store.cache().len(), 1);
    }

    #[test]
    fn failed_reload_keeps_old_cache() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "x\n").unwrap();
        let mut store = WordStore::open(dir.path()).unwrap();
        fs::write(dir.path().join("broken.txt"), [0xff, 0xff]).unwrap();

        assert!(store.reload().is_err());
        assert_eq!(store.cache().get("a").unwrap(), ["x"]);
        assert!(!store.cache().contains("broken"));
    }

    #[test]
    fn summary_display() {
        let one = ReloadSummary { categories: 1, lines: 1 };
        assert_eq!(one.to_string(), "1 list, 1 line");
        let many = ReloadSummary { categories: 3, lines: 40 };
        assert_eq!(many.to_string(), "3 lists, 40 lines");
    }
}
