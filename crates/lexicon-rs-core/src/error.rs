//! Core error types for lexicon-rs.
//!
//! [`LexiconError`] covers every failure the resolver can observe. None of
//! them interrupt the host application: lookups recover locally and degrade
//! to a missing-text result, and the error value only determines the
//! diagnostic that gets reported.

use thiserror::Error;

/// The primary error type for lexicon-rs.
///
/// The first four variants form the resolution taxonomy. The remaining ones
/// come from configuration and I/O around the resolver.
#[derive(Error, Debug)]
pub enum LexiconError {
    // ── Resolution ───────────────────────────────────────────────────

    /// An empty term key was passed to a lookup.
    #[error("Missing term key")]
    MissingTermKey,

    /// Neither an override nor a selected language was available.
    #[error("No language configured")]
    NoLanguageConfigured,

    /// The dotted key did not resolve to a string leaf in `language`.
    #[error("Translation not found for '{key}' in language '{language}'")]
    TermNotFound {
        /// The language that was searched.
        language: String,
        /// The term key that missed.
        key: String,
    },

    /// The resource loader could not produce a usable term tree.
    #[error("Resource file not found or malformed: {address} ({reason})")]
    ResourceLoadFailure {
        /// The resource address that was requested.
        address: String,
        /// What went wrong, as reported by the loader or the parser.
        reason: String,
    },

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LexiconError {
    /// Builds a [`LexiconError::TermNotFound`].
    pub fn term_not_found(language: impl Into<String>, key: impl Into<String>) -> Self {
        Self::TermNotFound {
            language: language.into(),
            key: key.into(),
        }
    }

    /// Builds a [`LexiconError::ResourceLoadFailure`].
    pub fn load_failure(address: impl Into<String>, reason: impl ToString) -> Self {
        Self::ResourceLoadFailure {
            address: address.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns `true` for errors that are reported at warning severity.
    ///
    /// Missing keys and missing terms are expected during development and
    /// are warnings; everything else is an error.
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::MissingTermKey | Self::TermNotFound { .. })
    }
}

/// A convenience type alias for `Result<T, LexiconError>`.
pub type LexiconResult<T> = Result<T, LexiconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_not_found_display() {
        let err = LexiconError::term_not_found("fr-fr", "user.name");
        assert_eq!(
            err.to_string(),
            "Translation not found for 'user.name' in language 'fr-fr'"
        );
    }

    #[test]
    fn test_load_failure_display_includes_address() {
        let err = LexiconError::load_failure("i18n/resources.de.json", "not found");
        let text = err.to_string();
        assert!(text.contains("i18n/resources.de.json"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn test_severity_mapping() {
        assert!(LexiconError::MissingTermKey.is_warning());
        assert!(LexiconError::term_not_found("en", "x").is_warning());
        assert!(!LexiconError::NoLanguageConfigured.is_warning());
        assert!(!LexiconError::load_failure("a", "b").is_warning());
        assert!(!LexiconError::ConfigurationError("x".into()).is_warning());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LexiconError = io_err.into();
        assert!(err.to_string().contains("file missing"));
    }
}
