//! Logging integration for lexicon-rs.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-load spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level` (e.g. "debug", "info", "warn",
/// "error"). In debug mode a pretty, human-readable format is used; otherwise
/// a structured JSON format is used. Installing twice is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for a single resource load.
///
/// Every event emitted while the load is in flight carries the language and
/// the resource address.
///
/// # Examples
///
/// ```
/// use lexicon_rs_core::logging::load_span;
///
/// let span = load_span("fr-fr", "resources.fr-fr.json");
/// let _guard = span.enter();
/// tracing::debug!("fetching");
/// ```
pub fn load_span(language: &str, address: &str) -> tracing::Span {
    tracing::debug_span!("resource_load", language = language, address = address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_is_harmless() {
        let settings = Settings {
            log_level: "not a valid filter ][".to_string(),
            ..Settings::default()
        };
        setup_logging(&settings);
        setup_logging(&Settings::default());
    }

    #[test]
    fn test_load_span_enter() {
        let span = load_span("en-us", "resources.en-us.json");
        let _guard = span.enter();
        tracing::debug!("inside load span");
    }
}
