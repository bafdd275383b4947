//! Document ingestion: frontmatter, metadata, markdown and the tree indexer.
//!
//! ```text
//! index.md ──► parse_frontmatter ──► (fields, body)
//!                                      │       │
//!                     Metadata::from_fields   MarkupRenderer::render
//!                                      │       │
//!                                      ▼       ▼
//!                               ContentIndexer ──► Snapshot
//! ```

pub mod frontmatter;
pub mod indexer;
pub mod markdown;
pub mod metadata;

pub use frontmatter::{Frontmatter, FrontmatterValue, parse_frontmatter};
pub use indexer::{ContentIndexer, IndexError};
pub use markdown::{CommonMarkRenderer, MarkupRenderer};
pub use metadata::Metadata;
