//! Settings for lexicon-rs.
//!
//! [`Settings`] holds everything a host needs to bring a resolver up: where
//! resource files live, which language is the default, which language to
//! select initially, and how to log. There is no global instance; construct
//! one per session and hand it to the resolver.

use serde::{Deserialize, Serialize};

/// The fixed prefix of every resource address.
pub const RESOURCE_PREFIX: &str = "resources.";

/// The fixed suffix of every resource address.
pub const RESOURCE_SUFFIX: &str = ".json";

/// The complete set of resolver settings.
///
/// # Examples
///
/// ```
/// use lexicon_rs_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.base_path.is_empty());
/// assert_eq!(settings.default_language, "en-us");
/// assert_eq!(settings.resource_address("fr-fr"), "resources.fr-fr.json");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Resources ────────────────────────────────────────────────────

    /// Prepended verbatim to every resource address (include the trailing `/`).
    pub base_path: String,

    // ── Languages ────────────────────────────────────────────────────

    /// The language configured as default at startup.
    pub default_language: String,
    /// An optional language to select after the default is configured.
    pub selected_language: Option<String>,

    // ── Logging ──────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,
    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            default_language: "en-us".to_string(),
            selected_language: None,
            debug: true,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Returns the resource address for `language` under these settings.
    pub fn resource_address(&self, language: &str) -> String {
        resource_address(&self.base_path, language)
    }
}

/// Builds `<base_path>resources.<language>.json`.
///
/// No normalization is applied to either part.
pub fn resource_address(base_path: &str, language: &str) -> String {
    format!("{base_path}{RESOURCE_PREFIX}{language}{RESOURCE_SUFFIX}")
}
