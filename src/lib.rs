//! Folio - content indexing and structured segmentation for markdown sites.
//!
//! # Pipeline
//!
//! ```text
//! content/<section>/<item>.md
//!        │
//!        ▼
//! ContentIndexer ──► Snapshot ──► ContentCache ──► SiteHandle (ArcSwap)
//!                                      │
//!                                      ▼
//!                schema_for_content ──► StructuredView (segment + heuristics)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use folio::{FolioConfig, SiteHandle, StructuredView};
//!
//! let config = FolioConfig::load_or_default(".".as_ref())?;
//! let site = SiteHandle::build(&config)?;
//! if let Some(item) = site.current().item_by_slug("technical-sessions", "day-3") {
//!     let view = StructuredView::for_item(&item);
//!     println!("{} subsections", view.entries.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod content;
pub mod data;
pub mod logger;
pub mod schema;
pub mod segment;
pub mod utils;

pub use config::{ConfigError, FolioConfig};
pub use content::{CommonMarkRenderer, ContentIndexer, IndexError, MarkupRenderer, Metadata};
pub use data::{ContentCache, Item, Section, SiteHandle, Snapshot, SnapshotStats};
pub use schema::{DisplaySchema, DisplaySchemaRegistry, LayoutKind, schema_for_content};
pub use segment::{StructuredView, Subsection, segment};
