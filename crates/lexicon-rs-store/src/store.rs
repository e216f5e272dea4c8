//! The resource store.
//!
//! [`ResourceStore`] maps language codes to loaded [`TermTree`]s. It loads
//! lazily through an injected [`ResourceLoader`] and reports failed loads
//! through an injected [`Diagnostics`] sink. Cloning a store is cheap and
//! every clone shares the same map.
//!
//! Loads are never cancelled. If two loads for one language are in flight,
//! whichever answer arrives last wins. Evicting a language (or clearing the
//! store) discards the result of every load of it that was already in flight.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use lexicon_rs_core::logging::load_span;
use lexicon_rs_core::settings::resource_address;
use lexicon_rs_core::{Diagnostics, LexiconError, TracingDiagnostics};
use tracing::Instrument;

use crate::handle::LoadHandle;
use crate::loader::ResourceLoader;
use crate::tree::TermTree;

/// Cached trees plus the eviction generation of every language.
///
/// A load records the generation of its language when it starts and only
/// stores its tree if the generation is unchanged when it finishes.
#[derive(Debug, Default)]
struct Cache {
    trees: HashMap<String, Arc<TermTree>>,
    generations: HashMap<String, u64>,
    epoch: u64,
}

impl Cache {
    fn generation(&self, language: &str) -> (u64, u64) {
        (self.epoch, self.generations.get(language).copied().unwrap_or_default())
    }

    fn bump(&mut self, language: &str) {
        *self.generations.entry(language.to_string()).or_default() += 1;
    }
}

/// In-memory cache of term trees, keyed by language code.
#[derive(Clone)]
pub struct ResourceStore {
    base_path: String,
    trees: Arc<RwLock<Cache>>,
    loader: Arc<dyn ResourceLoader>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl std::fmt::Debug for ResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("base_path", &self.base_path)
            .field("languages", &self.languages())
            .finish_non_exhaustive()
    }
}

impl ResourceStore {
    /// Creates an empty store that reports through [`TracingDiagnostics`].
    pub fn new(base_path: impl Into<String>, loader: Arc<dyn ResourceLoader>) -> Self {
        Self::with_diagnostics(base_path, loader, Arc::new(TracingDiagnostics))
    }

    /// Creates an empty store with an explicit diagnostics sink.
    pub fn with_diagnostics(
        base_path: impl Into<String>,
        loader: Arc<dyn ResourceLoader>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            trees: Arc::new(RwLock::new(Cache::default())),
            loader,
            diagnostics,
        }
    }

    /// The base path every resource address starts with.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The diagnostics sink this store reports through.
    pub fn diagnostics(&self) -> &Arc<dyn Diagnostics> {
        &self.diagnostics
    }

    /// Returns `<base_path>resources.<language>.json`.
    pub fn resource_address(&self, language: &str) -> String {
        resource_address(&self.base_path, language)
    }

    /// Loads the resources of `language` in the background.
    ///
    /// On success the parsed tree replaces any cached one and the handle
    /// resolves to `Ok`. On failure nothing is stored, an error naming the
    /// resource address goes to the diagnostics sink, and the handle resolves
    /// to [`LexiconError::ResourceLoadFailure`]. The handle never resolves
    /// before this call returns, even when the tree is already cached.
    ///
    /// If `language` is evicted while the load is in flight, the loaded tree
    /// is discarded and the handle still resolves to `Ok`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn load(&self, language: &str) -> LoadHandle {
        let address = self.resource_address(language);
        let (tx, handle) = LoadHandle::channel(language);
        let started = read(&self.trees).generation(language);

        let span = load_span(language, &address);
        let language = language.to_string();
        let trees = Arc::clone(&self.trees);
        let loader = Arc::clone(&self.loader);
        let diagnostics = Arc::clone(&self.diagnostics);

        tokio::spawn(
            async move {
                let outcome = match fetch_tree(loader.as_ref(), &address).await {
                    Ok(tree) => {
                        let mut map = write(&trees);
                        if map.generation(&language) == started {
                            tracing::debug!(terms = tree.len(), "resources loaded");
                            map.trees.insert(language, Arc::new(tree));
                        } else {
                            tracing::debug!("resources evicted while loading, discarded");
                        }
                        Ok(())
                    }
                    Err(err) => {
                        diagnostics.report(&err);
                        Err(err)
                    }
                };
                tx.send(outcome).ok();
            }
            .instrument(span),
        );

        handle
    }

    /// Returns `true` if a tree is cached for `language`.
    pub fn has(&self, language: &str) -> bool {
        read(&self.trees).trees.contains_key(language)
    }

    /// Returns the cached tree for `language`.
    pub fn get(&self, language: &str) -> Option<Arc<TermTree>> {
        read(&self.trees).trees.get(language).cloned()
    }

    /// Removes the cached tree for `language`, if any, and discards the
    /// result of any load of it still in flight.
    pub fn evict(&self, language: &str) {
        let mut map = write(&self.trees);
        map.bump(language);
        if map.trees.remove(language).is_some() {
            tracing::debug!(language, "resources evicted");
        }
    }

    /// Caches `tree` for `language` without going through the loader.
    pub fn insert(&self, language: impl Into<String>, tree: TermTree) {
        write(&self.trees).trees.insert(language.into(), Arc::new(tree));
    }

    /// Returns the cached language codes, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = read(&self.trees).trees.keys().cloned().collect();
        languages.sort_unstable();
        languages
    }

    /// Returns the number of cached languages.
    pub fn len(&self) -> usize {
        read(&self.trees).trees.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        read(&self.trees).trees.is_empty()
    }

    /// Drops every cached tree and discards every load still in flight.
    pub fn clear(&self) {
        let mut map = write(&self.trees);
        map.epoch += 1;
        map.trees.clear();
    }
}

async fn fetch_tree(loader: &dyn ResourceLoader, address: &str) -> Result<TermTree, LexiconError> {
    let content = loader.read_resource(address).await.map_err(|err| match err {
        LexiconError::ResourceLoadFailure { .. } => err,
        other => LexiconError::load_failure(address, other),
    })?;
    TermTree::from_json_str(&content).map_err(|reason| LexiconError::load_failure(address, reason))
}

fn read(trees: &RwLock<Cache>) -> std::sync::RwLockReadGuard<'_, Cache> {
    trees.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(trees: &RwLock<Cache>) -> std::sync::RwLockWriteGuard<'_, Cache> {
    trees.write().unwrap_or_else(PoisonError::into_inner)
}
