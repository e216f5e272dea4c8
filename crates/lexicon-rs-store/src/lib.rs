//! # lexicon-rs-store
//!
//! Loading and caching of per-language term trees.
//!
//! - [`TermTree`] - one language's resource file, as a tagged tree
//! - [`ResourceLoader`] - the injected transport, with [`FileSystemLoader`] and
//!   [`InMemoryLoader`] built in
//! - [`ResourceStore`] - the language → tree cache with lazy loading and eviction
//! - [`LoadHandle`] - resolves when a load finishes
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use lexicon_rs_store::{InMemoryLoader, ResourceStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let loader = Arc::new(InMemoryLoader::new());
//! loader.add("resources.en-us.json", r#"{"user": {"name": "Name"}}"#);
//!
//! let store = ResourceStore::new("", loader);
//! store.load("en-us").await.unwrap();
//! assert_eq!(store.get("en-us").unwrap().lookup("user.name"), Some("Name"));
//! # }
//! ```

// - significant_drop_tightening: map guards are scoped to one statement already
#![allow(clippy::significant_drop_tightening)]

pub mod handle;
pub mod loader;
pub mod store;
pub mod tree;

pub use handle::LoadHandle;
pub use loader::{FileSystemLoader, InMemoryLoader, ResourceLoader};
pub use store::ResourceStore;
pub use tree::{TermNode, TermTree};
