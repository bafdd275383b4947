//! Content graph types.
//!
//! Built once by the indexer and never mutated afterwards. Items and sections
//! are shared through `Arc`, so every query hands out cheap handles to the
//! same immutable values.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::content::Metadata;

/// One indexed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// File stem, unique within the owning section
    pub slug: String,

    /// Owning section slug
    pub section: String,

    pub metadata: Metadata,

    /// Markdown body (frontmatter removed)
    pub body: String,

    /// Rendered body
    pub html: String,
}

impl Item {
    /// `"section/slug"` lookup key.
    pub fn key(&self) -> String {
        item_key(&self.section, &self.slug)
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }
}

/// Build the `"section/item"` lookup key.
#[inline]
pub fn item_key(section: &str, item: &str) -> String {
    format!("{section}/{item}")
}

/// A named group of items (one content directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub slug: String,

    /// Declared by the overview file, or derived from the slug
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Items in display order
    pub items: Vec<Arc<Item>>,
}

/// One complete build of the content graph.
///
/// `all_items` is the concatenation of every section's items, in section order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub sections: Vec<Arc<Section>>,
    pub all_items: Vec<Arc<Item>>,
}

impl Snapshot {
    /// Assemble a snapshot from ordered sections.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        let sections: Vec<Arc<Section>> = sections.into_iter().map(Arc::new).collect();
        let all_items = sections
            .iter()
            .flat_map(|section| section.items.iter().cloned())
            .collect();
        Self {
            sections,
            all_items,
        }
    }

    pub fn item_count(&self) -> usize {
        self.all_items.len()
    }

    /// Item count per section, in section order.
    pub fn stats(&self) -> SnapshotStats {
        SnapshotStats {
            sections: self
                .sections
                .iter()
                .map(|s| (s.title.clone(), s.items.len()))
                .collect(),
            items: self.all_items.len(),
        }
    }

    /// Whether `all_items` matches the sections' items.
    pub fn is_consistent(&self) -> bool {
        let flattened = self.sections.iter().flat_map(|s| s.items.iter());
        self.all_items.len() == self.sections.iter().map(|s| s.items.len()).sum::<usize>()
            && self
                .all_items
                .iter()
                .zip(flattened)
                .all(|(a, b)| Arc::ptr_eq(a, b) || a == b)
    }

    /// Pretty-printed JSON dump.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize snapshot")
    }

    /// Load a snapshot produced by [`Snapshot::to_json`].
    ///
    /// `allItems` is rebuilt from the sections so both views share the same items.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Self = serde_json::from_str(json).context("Failed to parse snapshot")?;
        let sections = raw
            .sections
            .into_iter()
            .map(Arc::unwrap_or_clone)
            .collect();
        Ok(Self::from_sections(sections))
    }

    /// Write the JSON dump to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))
    }

    /// Read a JSON dump from `path`.
    pub fn read_from(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        Self::from_json(&json)
    }
}

/// Summary of a snapshot, for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotStats {
    /// `(section title, item count)` in section order
    pub sections: Vec<(String, usize)>,
    pub items: usize,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build an item with only the fields the tests care about.
    pub fn item(section: &str, slug: &str, title: &str, date: Option<&str>) -> Item {
        Item {
            slug: slug.to_owned(),
            section: section.to_owned(),
            metadata: Metadata {
                title: title.to_owned(),
                date: date.map(str::to_owned),
                section: section.to_owned(),
                ..Default::default()
            },
            body: String::new(),
            html: format!("<p>{title}</p>\n"),
        }
    }

    pub fn section(slug: &str, title: &str, items: Vec<Item>) -> Section {
        Section {
            slug: slug.to_owned(),
            title: title.to_owned(),
            description: None,
            items: items.into_iter().map(Arc::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{item, section};
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Snapshot {
        Snapshot::from_sections(vec![
            section(
                "posts",
                "Posts",
                vec![
                    item("posts", "b", "B", Some("2024-01-01")),
                    item("posts", "a", "A", None),
                ],
            ),
            section("notes", "Notes", vec![item("notes", "n", "N", None)]),
        ])
    }

    #[test]
    fn test_all_items_is_concatenation() {
        let snapshot = sample();
        let keys: Vec<_> = snapshot.all_items.iter().map(|i| i.key()).collect();
        assert_eq!(keys, vec!["posts/b", "posts/a", "notes/n"]);
        assert_eq!(snapshot.item_count(), 3);
        assert!(snapshot.is_consistent());
    }

    #[test]
    fn test_items_shared_between_views() {
        let snapshot = sample();
        assert!(Arc::ptr_eq(&snapshot.all_items[0], &snapshot.sections[0].items[0]));
    }

    #[test]
    fn test_inconsistent_snapshot_detected() {
        let mut snapshot = sample();
        snapshot.all_items.pop();
        assert!(!snapshot.is_consistent());
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.items, 3);
        assert_eq!(
            stats.sections,
            vec![("Posts".to_owned(), 2), ("Notes".to_owned(), 1)]
        );
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"allItems\""));
        assert!(json.contains("\"sections\""));
    }

    #[test]
    fn test_json_round_trip_relinks_items() {
        let snapshot = sample();
        let back = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(back, snapshot);
        assert!(Arc::ptr_eq(&back.all_items[2], &back.sections[1].items[0]));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Snapshot::from_json("{").is_err());
    }

    #[test]
    fn test_write_and_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/data/snapshot.json");
        let snapshot = sample();
        snapshot.write_to(&path).unwrap();
        assert_eq!(Snapshot::read_from(&path).unwrap(), snapshot);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.item_count(), 0);
        assert!(snapshot.is_consistent());
    }
}
