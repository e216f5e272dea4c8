//! The diagnostics sink.
//!
//! The resolver never prints or logs directly. It reports missing keys,
//! unconfigured languages, missing terms, and failed resource loads through a
//! [`Diagnostics`] implementation injected at construction time.
//!
//! - [`TracingDiagnostics`] forwards everything to [`tracing`] (the default)
//! - [`MemoryDiagnostics`] records entries in memory (suitable for testing)

use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::error::LexiconError;

/// The tracing target used for resolver diagnostics.
pub const TARGET: &str = "lexicon";

/// Severity of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// A bad lookup: an empty term key, or a term absent from a language.
    Warning,
    /// A configuration or resource problem, such as no language being set
    /// or a resource file that could not be loaded.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A sink for resolver diagnostics.
///
/// Implementations must be `Send + Sync` because resource loads report
/// failures from spawned tasks.
pub trait Diagnostics: Send + Sync {
    /// Reports a warning.
    fn warn(&self, message: &str);

    /// Reports an error.
    fn error(&self, message: &str);

    /// Reports a [`LexiconError`] at the severity its variant calls for.
    fn report(&self, err: &LexiconError) {
        let message = err.to_string();
        if err.is_warning() {
            self.warn(&message);
        } else {
            self.error(&message);
        }
    }
}

/// Forwards diagnostics to `tracing` under the [`TARGET`] target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!(target: TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: TARGET, "{message}");
    }
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    /// The severity the entry was reported at.
    pub severity: Severity,
    /// The rendered message.
    pub message: String,
}

/// Records diagnostics in memory.
///
/// Entries are kept in the order they were reported.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl MemoryDiagnostics {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, severity: Severity, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DiagnosticEntry {
                severity,
                message: message.to_string(),
            });
    }

    /// Returns a snapshot of every recorded entry.
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the messages recorded at [`Severity::Warning`].
    pub fn warnings(&self) -> Vec<String> {
        self.messages_at(Severity::Warning)
    }

    /// Returns the messages recorded at [`Severity::Error`].
    pub fn errors(&self) -> Vec<String> {
        self.messages_at(Severity::Error)
    }

    fn messages_at(&self, severity: Severity) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.severity == severity)
            .map(|e| e.message.clone())
            .collect()
    }

    /// Returns the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards every recorded entry.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn warn(&self, message: &str) {
        self.push(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }
}
