//! `[content]` section configuration.
//!
//! Describes where the content tree lives and which files are items.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `[content]` section in folio.toml - the two-level content tree.
///
/// # Example
/// ```toml
/// [content]
/// root = "content"     # one subdirectory per section
/// extension = "md"     # item files
/// overview = "index"   # reserved per-section overview file stem
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Content root containing one directory per section.
    #[serde(default = "defaults::content::root")]
    #[educe(Default = defaults::content::root())]
    pub root: PathBuf,

    /// Recognized item file extension, without the leading dot.
    #[serde(default = "defaults::content::extension")]
    #[educe(Default = defaults::content::extension())]
    pub extension: String,

    /// File stem of the per-section overview file. Never indexed as an item;
    /// its `title` and `description` are attached to the section.
    #[serde(default = "defaults::content::overview")]
    #[educe(Default = defaults::content::overview())]
    pub overview: String,

    /// Index entries whose name starts with a dot.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub include_hidden: bool,
}

impl ContentConfig {
    /// Whether `path` has the recognized item extension.
    pub fn is_item_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }

    /// Whether `slug` names the reserved overview file.
    pub fn is_overview(&self, slug: &str) -> bool {
        slug == self.overview
    }

    /// Whether a directory entry name should be skipped as hidden.
    pub fn is_hidden(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }
}
