//! Shared content handle with atomic snapshot replacement.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 SiteHandle (ArcSwap)                     │
//! │                                                          │
//! │   reader            reader             rebuild           │
//! │     │                 │                   │              │
//! │  current()         current()      index → ContentCache   │
//! │ (lock-free)       (lock-free)       (atomic replace)     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A reader that loaded the old cache keeps it alive until it drops its `Arc`.
//! Rebuilds are serialized; a failed rebuild leaves the current cache in place.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use parking_lot::Mutex;

use super::cache::ContentCache;
use super::types::{Snapshot, SnapshotStats};
use crate::config::FolioConfig;
use crate::content::{CommonMarkRenderer, ContentIndexer};
use crate::log;

/// Owner of the live [`ContentCache`].
#[derive(Debug)]
pub struct SiteHandle {
    cache: ArcSwap<ContentCache>,
    rebuild_lock: Mutex<()>,
}

impl SiteHandle {
    /// Index the content tree described by `config`.
    pub fn build(config: &FolioConfig) -> Result<Self> {
        Ok(Self::from_cache(index(config)?))
    }

    pub fn from_cache(cache: ContentCache) -> Self {
        Self {
            cache: ArcSwap::from_pointee(cache),
            rebuild_lock: Mutex::new(()),
        }
    }

    /// Current cache. Wait-free.
    #[inline]
    pub fn current(&self) -> Arc<ContentCache> {
        self.cache.load_full()
    }

    /// Re-index and swap in the new cache.
    ///
    /// # Errors
    ///
    /// Returns the indexing error; the previous cache stays current.
    pub fn rebuild(&self, config: &FolioConfig) -> Result<SnapshotStats> {
        let _guard = self.rebuild_lock.lock();
        let cache = match index(config) {
            Ok(cache) => cache,
            Err(err) => {
                log!("error"; "rebuild failed, keeping previous content: {:#}", err);
                return Err(err);
            }
        };
        let stats = cache.site_content().stats();
        self.cache.store(Arc::new(cache));
        Ok(stats)
    }

    /// Swap in a prebuilt cache, returning the one it replaced.
    pub fn replace(&self, cache: ContentCache) -> Arc<ContentCache> {
        let _guard = self.rebuild_lock.lock();
        self.cache.swap(Arc::new(cache))
    }

    /// Dump the current snapshot as JSON.
    pub fn write_snapshot(&self, path: &Path) -> Result<()> {
        self.current().site_content().write_to(path)
    }
}

impl From<Snapshot> for SiteHandle {
    fn from(snapshot: Snapshot) -> Self {
        Self::from_cache(ContentCache::new(snapshot))
    }
}

fn index(config: &FolioConfig) -> Result<ContentCache> {
    let renderer = CommonMarkRenderer::new(&config.markdown);
    let root = config.content_root();
    let snapshot = ContentIndexer::new(&config.content, &renderer)
        .build(root)
        .with_context(|| format!("Failed to index {}", root.display()))?;
    Ok(ContentCache::new(snapshot))
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{item, section};
    use super::*;
    use std::fs;
    use std::thread;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir) -> FolioConfig {
        crate::logger::set_quiet(true);
        let mut config = FolioConfig::default();
        config.content.root = dir.path().join("content");
        config
    }

    fn write(dir: &TempDir, rel: &str, text: &str) {
        let path = dir.path().join("content").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_build_and_rebuild() {
        let dir = TempDir::new().unwrap();
        write(&dir, "posts/one.md", "---\ntitle: One\n---\nBody\n");
        let config = config_for(&dir);

        let handle = SiteHandle::build(&config).unwrap();
        assert_eq!(handle.current().item_count(), 1);

        write(&dir, "posts/two.md", "---\ntitle: Two\n---\nBody\n");
        let stats = handle.rebuild(&config).unwrap();
        assert_eq!(stats.items, 2);
        assert_eq!(stats.sections, vec![("Posts".to_owned(), 2)]);
        assert!(handle.current().item_by_slug("posts", "two").is_some());
    }

    #[test]
    fn test_old_cache_survives_swap() {
        let handle = SiteHandle::from(Snapshot::from_sections(vec![section(
            "posts",
            "Posts",
            vec![item("posts", "a", "A", None)],
        )]));

        let old = handle.current();
        let replaced = handle.replace(ContentCache::default());

        assert!(Arc::ptr_eq(&old, &replaced));
        assert_eq!(old.item_count(), 1);
        assert!(old.item_by_slug("posts", "a").is_some());
        assert_eq!(handle.current().item_count(), 0);
    }

    #[test]
    fn test_failed_rebuild_keeps_current() {
        let dir = TempDir::new().unwrap();
        write(&dir, "posts/one.md", "Body\n");
        let config = config_for(&dir);
        let handle = SiteHandle::build(&config).unwrap();

        fs::remove_dir_all(dir.path().join("content")).unwrap();
        assert!(handle.rebuild(&config).is_err());
        assert_eq!(handle.current().item_count(), 1);
    }

    #[test]
    fn test_build_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        assert!(SiteHandle::build(&config_for(&dir)).is_err());
    }

    #[test]
    fn test_concurrent_readers() {
        let handle = Arc::new(SiteHandle::from(Snapshot::from_sections(vec![section(
            "posts",
            "Posts",
            vec![item("posts", "a", "A", None)],
        )])));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let cache = handle.current();
                        let count = cache.item_count();
                        assert!(count == 0 || count == 1);
                        assert_eq!(cache.all_items().len(), count);
                    }
                })
            })
            .collect();

        handle.replace(ContentCache::default());
        for reader in readers {
            reader.join().unwrap();
        }
    }

    #[test]
    fn test_write_snapshot() {
        let dir = TempDir::new().unwrap();
        let handle = SiteHandle::from(Snapshot::from_sections(vec![section(
            "posts",
            "Posts",
            vec![item("posts", "a", "A", None)],
        )]));
        let path = dir.path().join("snapshot.json");
        handle.write_snapshot(&path).unwrap();
        let back = Snapshot::read_from(&path).unwrap();
        assert_eq!(&back, handle.current().site_content());
    }
}
