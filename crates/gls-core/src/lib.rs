//! Core types for gls.
//!
//! This crate provides the directory entry model and the listing provider
//! used by the navigation panes, together with listing configuration and
//! error types.

mod config;
mod entry;
mod error;
mod listing;

pub use config::{ListingConfig, ListingConfigBuilder};
pub use entry::{Entry, EntryKind, PARENT_NAME};
pub use error::ListError;
pub use listing::{resolve_child, DirectoryProvider, FsProvider};
