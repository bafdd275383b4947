//! Content tree indexing.
//!
//! # Layout
//!
//! ```text
//! content/                     <- root (unreadable = build fails)
//! ├── posts/                   <- section "posts"
//! │   ├── index.md             <- overview: section title/description, not an item
//! │   ├── hello-world.md       <- item "posts/hello-world"
//! │   └── cover.png            <- ignored (extension)
//! └── technical-sessions/
//!     └── 2024-03-01-lexer.md
//! ```
//!
//! # Ordering
//!
//! - Items: dated items first (newest first), then undated items; ties and
//!   undated items by title, byte-wise, then by slug.
//! - Sections: by title, byte-wise, then by slug.
//!
//! Per-section and per-file failures are logged and skipped. Only an
//! unreadable root aborts the build.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use walkdir::WalkDir;

use super::frontmatter::{FrontmatterValue, parse_frontmatter};
use super::markdown::MarkupRenderer;
use super::metadata::Metadata;
use crate::config::ContentConfig;
use crate::data::{Item, Section, Snapshot};
use crate::log;
use crate::utils::date::ContentDate;
use crate::utils::slug::{slug_from_dir, slug_from_path, slug_to_title};

/// Fatal indexing errors.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("content root `{path}` is unreadable")]
    UnreadableRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IndexError {
    /// Path that caused the failure.
    pub fn path(&self) -> &Path {
        match self {
            Self::UnreadableRoot { path, .. } => path,
        }
    }
}

/// Builds a [`Snapshot`] from a two-level content tree.
pub struct ContentIndexer<'a> {
    config: &'a ContentConfig,
    renderer: &'a dyn MarkupRenderer,
}

impl<'a> ContentIndexer<'a> {
    pub fn new(config: &'a ContentConfig, renderer: &'a dyn MarkupRenderer) -> Self {
        Self { config, renderer }
    }

    /// Index every section below `root`.
    pub fn build(&self, root: &Path) -> Result<Snapshot, IndexError> {
        log!("index"; "indexing {}", root.display());

        let mut sections = Vec::new();
        for dir in self.section_dirs(root)? {
            let Some(slug) = slug_from_dir(&dir) else {
                log!("skip"; "section name is not valid UTF-8: {}", dir.display());
                continue;
            };

            match self.index_section(&dir, slug) {
                Ok(Some(section)) => {
                    log!("index"; "section {} ({} items)", section.slug, section.items.len());
                    sections.push(section);
                }
                Ok(None) => log!("skip"; "section {} has no items", slug),
                Err(err) => log!("skip"; "unreadable section {}: {}", dir.display(), err),
            }
        }

        sections.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.slug.cmp(&b.slug)));

        let snapshot = Snapshot::from_sections(sections);
        log!(
            "index";
            "{} section(s), {} item(s) total",
            snapshot.sections.len(),
            snapshot.item_count()
        );
        Ok(snapshot)
    }

    /// Immediate subdirectories of `root`, sorted by name.
    fn section_dirs(&self, root: &Path) -> Result<Vec<PathBuf>, IndexError> {
        let unreadable = |source: io::Error| IndexError::UnreadableRoot {
            path: root.to_path_buf(),
            source,
        };

        let mut dirs = Vec::new();
        for entry in fs::read_dir(root).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            if self.is_hidden(&entry.file_name()) {
                continue;
            }
            // Follows symlinks, like the per-section walk.
            if entry.path().is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    /// Index one section directory. `Ok(None)` when it holds no items.
    fn index_section(&self, dir: &Path, slug: &str) -> io::Result<Option<Section>> {
        let mut items = Vec::new();
        let mut overview = None;

        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                // The section directory itself could not be listed.
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    log!("skip"; "{}", err);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file()
                || self.is_hidden(entry.file_name())
                || !self.config.is_item_file(path)
            {
                continue;
            }

            let Some(item_slug) = slug_from_path(path) else {
                log!("skip"; "file name is not valid UTF-8: {}", path.display());
                continue;
            };

            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    log!("skip"; "unreadable file {}: {}", path.display(), err);
                    continue;
                }
            };

            if self.config.is_overview(item_slug) {
                overview = Some(parse_frontmatter(&text).fields);
                continue;
            }

            items.push(self.build_item(&text, item_slug, slug));
        }

        if items.is_empty() {
            return Ok(None);
        }

        let items = sort_items(items);

        let declared = |key: &str| {
            overview
                .as_ref()
                .and_then(|fields| fields.get(key))
                .and_then(FrontmatterValue::as_scalar)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };

        Ok(Some(Section {
            slug: slug.to_owned(),
            title: declared("title").unwrap_or_else(|| slug_to_title(slug)),
            description: declared("description"),
            items: items.into_iter().map(Arc::new).collect(),
        }))
    }

    /// Parse and render one document.
    pub fn build_item(&self, text: &str, slug: &str, section: &str) -> Item {
        let frontmatter = parse_frontmatter(text);
        let html = self.renderer.render(&frontmatter.body);
        Item {
            slug: slug.to_owned(),
            section: section.to_owned(),
            metadata: Metadata::from_fields(frontmatter.fields, slug, section),
            body: frontmatter.body,
            html,
        }
    }

    fn is_hidden(&self, name: &std::ffi::OsStr) -> bool {
        name.to_str().is_some_and(|name| self.config.is_hidden(name))
    }
}

/// Sort items for display: dated first (newest first), then by title and slug.
pub fn sort_items(items: Vec<Item>) -> Vec<Item> {
    // Parse each date once.
    let mut keyed: Vec<(Option<ContentDate>, Item)> = items
        .into_iter()
        .map(|item| (item.metadata.date(), item))
        .collect();

    keyed.sort_by(|(a_date, a), (b_date, b)| {
        compare_by_date(a_date.as_ref(), b_date.as_ref(), a.title(), b.title())
            .then_with(|| a.slug.cmp(&b.slug))
    });

    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Compare two items for sorting (newest first).
///
/// - Items with dates come before items without dates
/// - Items with the same date, and undated items, are sorted by title
pub fn compare_by_date(
    a_date: Option<&ContentDate>,
    b_date: Option<&ContentDate>,
    a_title: &str,
    b_title: &str,
) -> Ordering {
    match (a_date, b_date) {
        (Some(a), Some(b)) => b.cmp(a).then_with(|| a_title.cmp(b_title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a_title.cmp(b_title),
    }
}
