//! # lexicon-rs-resolver
//!
//! Turns term keys into human-readable strings.
//!
//! - [`TranslationResolver`] - default/selected language state, lazy loads,
//!   nested lookup with fallback to the default language
//! - [`placeholder`] - `{0}`, `{1}`, ... substitution
//! - [`binding`] - projections for presentation code: [`translate`],
//!   [`LazyTerm`], and the `t` Tera function
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use lexicon_rs_resolver::TranslationResolver;
//! use lexicon_rs_store::{InMemoryLoader, ResourceStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let loader = Arc::new(InMemoryLoader::new());
//! loader.add("resources.en-us.json", r#"{"user": {"name": "Name"}}"#);
//! loader.add("resources.fr-fr.json", "{}");
//!
//! let resolver = TranslationResolver::new(ResourceStore::new("", loader));
//! resolver.set_default_language("en-us").await.unwrap();
//! resolver.set_selected_language("fr-fr").await.unwrap();
//!
//! // Missing in fr-fr, so it falls back to en-us (and logs a warning).
//! assert_eq!(resolver.get_term("user.name", None, &[]).as_deref(), Some("Name"));
//! # }
//! ```

// - significant_drop_tightening: state guards are dropped explicitly before loads
#![allow(clippy::significant_drop_tightening)]

pub mod binding;
pub mod placeholder;
pub mod resolver;

pub use binding::{register_tera_function, translate, LazyTerm, TermFunction};
pub use resolver::{LanguageState, TranslationResolver};
