//! In-memory content graph.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                                                                  │
//! │  ContentIndexer::build ──► Snapshot ──► ContentCache::new        │
//! │                                              │                   │
//! │                                              ▼                   │
//! │                                   SiteHandle (ArcSwap)           │
//! │                                     │                │           │
//! │                                 current()        rebuild()       │
//! │                                     │                            │
//! │                      item_by_slug / items_by_section / ...       │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A snapshot is never mutated after construction. Rebuilding produces a new
//! snapshot and swaps it in whole, so readers observe either the old graph or
//! the new one.

mod cache;
mod handle;
mod types;

pub use cache::ContentCache;
pub use handle::SiteHandle;
pub use types::{Item, Section, Snapshot, SnapshotStats, item_key};

#[cfg(test)]
pub(crate) use types::fixtures;
