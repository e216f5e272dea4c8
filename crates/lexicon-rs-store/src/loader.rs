//! Resource loaders.
//!
//! A [`ResourceLoader`] turns a resource address into the raw content of a
//! resource file. The store never touches a transport directly; it depends
//! only on this trait, so file systems, HTTP clients, and bundled assets can
//! all sit behind it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use lexicon_rs_core::LexiconError;

/// Reads resource file content by address.
///
/// Implementations report every failure as
/// [`LexiconError::ResourceLoadFailure`]. Retry policy, if any, belongs here
/// and not in the store.
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    /// Reads the resource at `address`.
    async fn read_resource(&self, address: &str) -> Result<String, LexiconError>;
}

/// Reads resources from the file system.
///
/// Addresses are treated as paths, relative to the optional root.
#[derive(Debug, Clone, Default)]
pub struct FileSystemLoader {
    root: Option<PathBuf>,
}

impl FileSystemLoader {
    /// Creates a loader that resolves addresses against the working directory.
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Creates a loader that resolves addresses against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn path_for(&self, address: &str) -> PathBuf {
        self.root
            .as_ref()
            .map_or_else(|| PathBuf::from(address), |root| root.join(address))
    }
}

#[async_trait]
impl ResourceLoader for FileSystemLoader {
    async fn read_resource(&self, address: &str) -> Result<String, LexiconError> {
        let path = self.path_for(address);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LexiconError::load_failure(address, format!("{}: {e}", path.display())))
    }
}

/// Serves resources from an in-memory map of address to content.
///
/// This is useful for testing and for applications that bundle their
/// resource files into the binary. Every request is counted, hit or miss.
#[derive(Debug, Default)]
pub struct InMemoryLoader {
    resources: RwLock<HashMap<String, String>>,
    requests: RwLock<HashMap<String, usize>>,
}

impl InMemoryLoader {
    /// Creates a new empty `InMemoryLoader`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an `InMemoryLoader` from a map of addresses to content.
    pub fn from_map(resources: HashMap<String, String>) -> Self {
        Self {
            resources: RwLock::new(resources),
            requests: RwLock::default(),
        }
    }

    /// Adds or replaces a resource.
    pub fn add(&self, address: impl Into<String>, content: impl Into<String>) {
        self.resources
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(address.into(), content.into());
    }

    /// Removes a resource so later reads fail.
    pub fn remove(&self, address: &str) {
        self.resources
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(address);
    }

    /// Returns how many times `address` has been requested.
    pub fn requests(&self, address: &str) -> usize {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(address)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the total number of requests across all addresses.
    pub fn total_requests(&self) -> usize {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .sum()
    }
}

#[async_trait]
impl ResourceLoader for InMemoryLoader {
    async fn read_resource(&self, address: &str) -> Result<String, LexiconError> {
        *self
            .requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(address.to_string())
            .or_insert(0) += 1;

        self.resources
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(address)
            .cloned()
            .ok_or_else(|| LexiconError::load_failure(address, "no such resource"))
    }
}
