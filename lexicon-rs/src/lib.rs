//! # lexicon-rs
//!
//! Resolves localization keys into strings for a default or selected
//! language, loading per-language resource files lazily.
//!
//! This is the meta-crate that re-exports all sub-crates. Depend on the
//! individual crates for finer-grained control.
//!
//! ```
//! use std::sync::Arc;
//! use lexicon_rs::{InMemoryLoader, ResourceStore, TranslationResolver};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let loader = Arc::new(InMemoryLoader::new());
//! loader.add("i18n/resources.en-us.json", r#"{"user": {"name": "Name"}}"#);
//!
//! let resolver = TranslationResolver::new(ResourceStore::new("i18n/", loader));
//! resolver.set_default_language("en-us").await.unwrap();
//! assert_eq!(resolver.get_term("user.name", None, &[]).as_deref(), Some("Name"));
//! # }
//! ```

/// Error types, settings, logging, and the diagnostics sink.
pub use lexicon_rs_core as core;

/// Term trees, resource loaders, and the resource store.
pub use lexicon_rs_store as store;

/// The translation resolver and view bindings.
pub use lexicon_rs_resolver as resolver;

/// Command framework and built-in commands.
#[cfg(feature = "cli")]
pub use lexicon_rs_cli as cli;

pub use lexicon_rs_core::{Diagnostics, LexiconError, LexiconResult, Settings};
pub use lexicon_rs_resolver::{translate, LanguageState, LazyTerm, TranslationResolver};
pub use lexicon_rs_store::{
    FileSystemLoader, InMemoryLoader, LoadHandle, ResourceLoader, ResourceStore, TermTree,
};
