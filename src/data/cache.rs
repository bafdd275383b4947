//! Read-only query surface over one [`Snapshot`].
//!
//! Lookup maps are built once at construction. Every query returns fresh
//! `Vec`s / `Arc` handles; the underlying items are immutable, so nothing a
//! caller does to a result can reach the cache.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::types::{Item, Section, Snapshot, item_key};

/// Immutable content index with O(1) keyed lookups.
#[derive(Debug, Default)]
pub struct ContentCache {
    snapshot: Snapshot,
    /// section slug → items in display order
    items_by_section: FxHashMap<String, Vec<Arc<Item>>>,
    /// "section/item" → item
    item_by_key: FxHashMap<String, Arc<Item>>,
    /// section slug → section
    section_by_slug: FxHashMap<String, Arc<Section>>,
}

impl ContentCache {
    pub fn new(snapshot: Snapshot) -> Self {
        let items_by_section = snapshot
            .sections
            .iter()
            .map(|s| (s.slug.clone(), s.items.clone()))
            .collect();
        let item_by_key = snapshot
            .all_items
            .iter()
            .map(|item| (item.key(), Arc::clone(item)))
            .collect();
        let section_by_slug = snapshot
            .sections
            .iter()
            .map(|s| (s.slug.clone(), Arc::clone(s)))
            .collect();

        Self {
            snapshot,
            items_by_section,
            item_by_key,
            section_by_slug,
        }
    }

    /// The complete wrapped snapshot.
    pub fn site_content(&self) -> &Snapshot {
        &self.snapshot
    }

    /// All sections, in display order.
    pub fn all_sections(&self) -> Vec<Arc<Section>> {
        self.snapshot.sections.clone()
    }

    pub fn section_by_slug(&self, slug: &str) -> Option<Arc<Section>> {
        self.section_by_slug.get(slug).cloned()
    }

    /// Items of one section; empty for an unknown section.
    pub fn items_by_section(&self, section: &str) -> Vec<Arc<Item>> {
        self.items_by_section
            .get(section)
            .cloned()
            .unwrap_or_default()
    }

    pub fn item_by_slug(&self, section: &str, item: &str) -> Option<Arc<Item>> {
        self.item_by_key.get(&item_key(section, item)).cloned()
    }

    /// Every item across all sections, in section order.
    pub fn all_items(&self) -> Vec<Arc<Item>> {
        self.snapshot.all_items.clone()
    }

    pub fn item_count(&self) -> usize {
        self.snapshot.all_items.len()
    }

    /// First item with `slug` in any section (section order).
    ///
    /// Linear scan; prefer [`ContentCache::item_by_slug`] when the section is known.
    pub fn find_item(&self, slug: &str) -> Option<Arc<Item>> {
        self.snapshot
            .all_items
            .iter()
            .find(|item| item.slug == slug)
            .cloned()
    }
}

impl From<Snapshot> for ContentCache {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{item, section};
    use super::*;

    fn cache() -> ContentCache {
        ContentCache::new(Snapshot::from_sections(vec![
            section(
                "notes",
                "Notes",
                vec![
                    item("notes", "new", "New", Some("2024-06-01")),
                    item("notes", "shared", "Shared Note", None),
                ],
            ),
            section(
                "posts",
                "Posts",
                vec![
                    item("posts", "old", "Old", Some("2023-06-01")),
                    item("posts", "shared", "Shared Post", None),
                ],
            ),
        ]))
    }

    #[test]
    fn test_all_sections() {
        let cache = cache();
        let slugs: Vec<_> = cache.all_sections().iter().map(|s| s.slug.clone()).collect();
        assert_eq!(slugs, vec!["notes", "posts"]);
    }

    #[test]
    fn test_section_by_slug() {
        let cache = cache();
        assert_eq!(cache.section_by_slug("posts").unwrap().title, "Posts");
        assert!(cache.section_by_slug("missing").is_none());
    }

    #[test]
    fn test_items_by_section() {
        let cache = cache();
        let items = cache.items_by_section("posts");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].slug, "old");
        assert!(cache.items_by_section("missing").is_empty());
    }

    #[test]
    fn test_item_by_slug_for_every_item() {
        let cache = cache();
        for section in cache.all_sections() {
            for item in &section.items {
                let found = cache.item_by_slug(&section.slug, &item.slug).unwrap();
                assert_eq!(found.slug, item.slug);
                assert_eq!(found.section, section.slug);
            }
        }
    }

    #[test]
    fn test_item_by_slug_absent() {
        let cache = cache();
        assert!(cache.item_by_slug("posts", "new").is_none());
        assert!(cache.item_by_slug("missing", "old").is_none());
        assert!(cache.item_by_slug("", "").is_none());
    }

    #[test]
    fn test_same_slug_in_two_sections() {
        let cache = cache();
        assert_eq!(cache.item_by_slug("notes", "shared").unwrap().title(), "Shared Note");
        assert_eq!(cache.item_by_slug("posts", "shared").unwrap().title(), "Shared Post");
        // Section order decides the cross-section search.
        assert_eq!(cache.find_item("shared").unwrap().title(), "Shared Note");
        assert!(cache.find_item("nothing").is_none());
    }

    #[test]
    fn test_all_items_and_count() {
        let cache = cache();
        assert_eq!(cache.item_count(), 4);
        let keys: Vec<_> = cache.all_items().iter().map(|i| i.key()).collect();
        assert_eq!(keys, vec!["notes/new", "notes/shared", "posts/old", "posts/shared"]);
    }

    #[test]
    fn test_returned_sequences_are_copies() {
        let cache = cache();

        let mut sections = cache.all_sections();
        sections.clear();
        let mut items = cache.items_by_section("posts");
        items.reverse();
        items.pop();
        let mut all = cache.all_items();
        all.truncate(1);

        assert_eq!(cache.all_sections().len(), 2);
        assert_eq!(cache.items_by_section("posts")[0].slug, "old");
        assert_eq!(cache.items_by_section("posts").len(), 2);
        assert_eq!(cache.all_items().len(), 4);
    }

    #[test]
    fn test_modified_clone_does_not_touch_cache() {
        let cache = cache();
        let mut copy = Item::clone(&cache.item_by_slug("posts", "old").unwrap());
        copy.metadata.title = "Changed".into();
        assert_eq!(cache.item_by_slug("posts", "old").unwrap().title(), "Old");
    }

    #[test]
    fn test_empty_cache() {
        let cache = ContentCache::default();
        assert_eq!(cache.item_count(), 0);
        assert!(cache.all_sections().is_empty());
        assert!(cache.find_item("anything").is_none());
    }

    #[test]
    fn test_cache_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ContentCache>();
    }
}
