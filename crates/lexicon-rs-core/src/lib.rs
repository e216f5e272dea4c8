//! # lexicon-rs-core
//!
//! Core types shared by every lexicon-rs crate: the error taxonomy, settings,
//! settings loading, logging setup, and the diagnostics sink the resolver
//! reports through.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Resolver settings (base path, languages, logging)
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration
//! - [`diagnostics`] - The injected diagnostics sink and its built-in implementations

pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use diagnostics::{Diagnostics, MemoryDiagnostics, Severity, TracingDiagnostics};
pub use error::{LexiconError, LexiconResult};
pub use settings::Settings;
