//! The translation resolver.
//!
//! [`TranslationResolver`] owns the two-tier language state (default and
//! selected), drives lazy loads through a [`ResourceStore`], and turns term
//! keys into strings.
//!
//! ## Language state
//!
//! | State | Meaning |
//! |---|---|
//! | `Unconfigured` | no default language yet |
//! | `DefaultOnly` | selected == default |
//! | `Diverged` | selected != default |
//!
//! `set_default_language` moves any state to `DefaultOnly`.
//! `set_selected_language` moves between `DefaultOnly` and `Diverged`.
//!
//! ## Resolution
//!
//! A lookup runs in the override language if one is given, otherwise in the
//! selected language. A miss there is retried in the default language. Every
//! miss is reported to the diagnostics sink, except that a miss in a language
//! equal to the default is only reported once.

use std::fmt::{self, Display};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lexicon_rs_core::{Diagnostics, LexiconError, LexiconResult, Settings, TracingDiagnostics};
use lexicon_rs_store::{LoadHandle, ResourceLoader, ResourceStore};

use crate::placeholder::substitute;

/// Where the resolver sits in its language state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageState {
    /// No default language has been set.
    Unconfigured,
    /// The selected language is the default language.
    DefaultOnly,
    /// The selected language differs from the default language.
    Diverged,
}

#[derive(Debug, Default)]
struct ResolverState {
    default_language: Option<String>,
    selected_language: Option<String>,
}

/// Resolves term keys into strings for a default or selected language.
///
/// Cloning is cheap; clones share the state and the store. Construct one per
/// application session.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lexicon_rs_resolver::TranslationResolver;
/// use lexicon_rs_store::{InMemoryLoader, ResourceStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let loader = Arc::new(InMemoryLoader::new());
/// loader.add("resources.en-us.json", r#"{"greet": "Hi {0}, meet {1}"}"#);
///
/// let resolver = TranslationResolver::new(ResourceStore::new("", loader));
/// resolver.set_default_language("en-us").await.unwrap();
///
/// let term = resolver.get_term("greet", None, &[&"Ann", &"Bob"]);
/// assert_eq!(term.as_deref(), Some("Hi Ann, meet Bob"));
/// # }
/// ```
#[derive(Clone)]
pub struct TranslationResolver {
    store: ResourceStore,
    state: Arc<RwLock<ResolverState>>,
}

impl fmt::Debug for TranslationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read_state();
        f.debug_struct("TranslationResolver")
            .field("default_language", &state.default_language)
            .field("selected_language", &state.selected_language)
            .field("store", &self.store)
            .finish()
    }
}

impl TranslationResolver {
    /// Creates an unconfigured resolver on top of `store`.
    pub fn new(store: ResourceStore) -> Self {
        Self {
            store,
            state: Arc::new(RwLock::new(ResolverState::default())),
        }
    }

    /// Creates an unconfigured resolver whose store uses `settings.base_path`
    /// and reports through [`TracingDiagnostics`].
    ///
    /// Call [`configure`](Self::configure) to apply the configured languages.
    pub fn from_settings(settings: &Settings, loader: Arc<dyn ResourceLoader>) -> Self {
        Self::new(ResourceStore::with_diagnostics(
            settings.base_path.clone(),
            loader,
            Arc::new(TracingDiagnostics),
        ))
    }

    /// Applies the default and, if configured, the selected language from
    /// `settings`, waiting for each load in turn.
    pub async fn configure(&self, settings: &Settings) -> LexiconResult<()> {
        self.set_default_language(&settings.default_language).await?;
        if let Some(selected) = &settings.selected_language {
            self.set_selected_language(selected).await?;
        }
        Ok(())
    }

    /// The store this resolver loads into.
    pub const fn store(&self) -> &ResourceStore {
        &self.store
    }

    fn diagnostics(&self) -> &Arc<dyn Diagnostics> {
        self.store.diagnostics()
    }

    // ── Language state ───────────────────────────────────────────────

    /// Makes `language` both the default and the selected language, then
    /// loads its resources.
    ///
    /// Calling this again redefines both languages. The previous default and
    /// the previous selection are evicted unless they equal `language`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn set_default_language(&self, language: &str) -> LoadHandle {
        {
            let mut state = self.write_state();
            for previous in [&state.default_language, &state.selected_language]
                .into_iter()
                .flatten()
            {
                if previous != language {
                    self.store.evict(previous);
                }
            }
            state.default_language = Some(language.to_string());
            state.selected_language = Some(language.to_string());
        }
        tracing::info!(language, "default language set");
        self.store.load(language)
    }

    /// Switches the selected language.
    ///
    /// A previously selected language that is neither the default nor the
    /// new target is evicted first. If the target differs from both the
    /// default and the current selection it becomes selected and is loaded.
    /// Otherwise nothing is loaded and the handle resolves on a later turn;
    /// selecting the default while diverged returns to the default.
    ///
    /// Without a default language nothing changes and the handle resolves to
    /// [`LexiconError::NoLanguageConfigured`].
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn set_selected_language(&self, language: &str) -> LoadHandle {
        let mut state = self.write_state();

        let Some(default) = state.default_language.clone() else {
            drop(state);
            let err = LexiconError::NoLanguageConfigured;
            self.diagnostics().report(&err);
            return LoadHandle::failed(language, err);
        };

        if let Some(selected) = state.selected_language.as_deref() {
            if selected != default && selected != language {
                self.store.evict(selected);
            }
        }

        let is_default = language == default;
        let is_selected = state.selected_language.as_deref() == Some(language);

        if !is_default && !is_selected {
            state.selected_language = Some(language.to_string());
            drop(state);
            tracing::info!(language, "selected language set");
            return self.store.load(language);
        }

        if is_default && !is_selected {
            state.selected_language = Some(default);
            tracing::info!(language, "selected language reset to default");
        }
        drop(state);
        LoadHandle::ready(language)
    }

    /// The default language, if configured.
    pub fn default_language(&self) -> Option<String> {
        self.read_state().default_language.clone()
    }

    /// The selected language, if configured.
    pub fn selected_language(&self) -> Option<String> {
        self.read_state().selected_language.clone()
    }

    /// Where the resolver sits in its language state machine.
    pub fn state(&self) -> LanguageState {
        let state = self.read_state();
        match (&state.default_language, &state.selected_language) {
            (None, _) => LanguageState::Unconfigured,
            (Some(default), Some(selected)) if default != selected => LanguageState::Diverged,
            (Some(_), _) => LanguageState::DefaultOnly,
        }
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// Resolves `key` and substitutes `args` into the result.
    ///
    /// `language` overrides the selected language for this call only; an
    /// empty override counts as none. Every failure is reported to the
    /// diagnostics sink and yields `None`.
    pub fn get_term(
        &self,
        key: &str,
        language: Option<&str>,
        args: &[&dyn Display],
    ) -> Option<String> {
        self.try_get_term(key, language, args).ok()
    }

    /// Like [`get_term`](Self::get_term), but returns the error that ended
    /// resolution.
    ///
    /// The same diagnostics are reported either way.
    pub fn try_get_term(
        &self,
        key: &str,
        language: Option<&str>,
        args: &[&dyn Display],
    ) -> LexiconResult<String> {
        let term = self.resolve(key, language)?;
        Ok(substitute(&term, args))
    }

    /// Returns `true` if `key` resolves in `language` (or the selected
    /// language) without falling back. Reports nothing.
    pub fn has_term(&self, key: &str, language: Option<&str>) -> bool {
        self.effective_language(language)
            .is_some_and(|effective| self.lookup(&effective, key).is_some())
    }

    fn resolve(&self, key: &str, language: Option<&str>) -> LexiconResult<String> {
        if key.is_empty() {
            return Err(self.report(LexiconError::MissingTermKey));
        }

        let Some(effective) = self.effective_language(language) else {
            return Err(self.report(LexiconError::NoLanguageConfigured));
        };

        if let Some(term) = self.lookup(&effective, key) {
            return Ok(term);
        }

        match self.default_language() {
            Some(default) if default != effective => {
                self.report(LexiconError::term_not_found(&effective, key));
                self.lookup(&default, key)
                    .ok_or_else(|| self.report(LexiconError::term_not_found(&default, key)))
            }
            Some(default) => Err(self.report(LexiconError::term_not_found(default, key))),
            None => Err(self.report(LexiconError::term_not_found(effective, key))),
        }
    }

    fn effective_language(&self, language: Option<&str>) -> Option<String> {
        language
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .or_else(|| self.selected_language())
    }

    fn lookup(&self, language: &str, key: &str) -> Option<String> {
        self.store
            .get(language)
            .and_then(|tree| tree.lookup(key).map(str::to_string))
    }

    fn report(&self, err: LexiconError) -> LexiconError {
        self.diagnostics().report(&err);
        err
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ResolverState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ResolverState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use lexicon_rs_core::MemoryDiagnostics;
    use lexicon_rs_store::InMemoryLoader;

    use super::*;

    struct Fixture {
        resolver: TranslationResolver,
        loader: Arc<InMemoryLoader>,
        diagnostics: Arc<MemoryDiagnostics>,
    }

    fn fixture() -> Fixture {
        let loader = Arc::new(InMemoryLoader::new());
        loader.add(
            "resources.en-us.json",
            r#"{"user": {"name": "Name", "age": "Age"}, "greet": "Hi {0}, meet {1}", "one": "Only {0}"}"#,
        );
        loader.add("resources.fr-fr.json", r#"{"user": {"age": "Âge"}}"#);
        loader.add("resources.de-de.json", r#"{"user": {"name": "Name (de)"}}"#);
        loader.add("resources.es-es.json", "{}");

        let diagnostics = Arc::new(MemoryDiagnostics::new());
        let store = ResourceStore::with_diagnostics("", loader.clone(), diagnostics.clone());
        Fixture {
            resolver: TranslationResolver::new(store),
            loader,
            diagnostics,
        }
    }

    // ── State machine ───────────────────────────────────────────────

    #[test]
    fn test_unconfigured() {
        let f = fixture();
        assert_eq!(f.resolver.state(), LanguageState::Unconfigured);
        assert!(f.resolver.default_language().is_none());
        assert!(f.resolver.selected_language().is_none());
    }

    #[tokio::test]
    async fn test_set_default_sets_both() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        assert_eq!(f.resolver.default_language().as_deref(), Some("en-us"));
        assert_eq!(f.resolver.selected_language().as_deref(), Some("en-us"));
        assert_eq!(f.resolver.state(), LanguageState::DefaultOnly);
        assert!(f.resolver.store().has("en-us"));
    }

    #[tokio::test]
    async fn test_set_default_again_resets() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();
        assert_eq!(f.resolver.state(), LanguageState::Diverged);

        f.resolver.set_default_language("de-de").await.unwrap();
        assert_eq!(f.resolver.state(), LanguageState::DefaultOnly);
        assert_eq!(f.resolver.selected_language().as_deref(), Some("de-de"));
    }

    #[tokio::test]
    async fn test_set_default_again_evicts_unused_languages() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();

        let handle = f.resolver.set_default_language("de-de");
        assert!(!f.resolver.store().has("en-us"));
        assert!(!f.resolver.store().has("fr-fr"));
        handle.await.unwrap();

        f.resolver.set_selected_language("es-es").await.unwrap();
        assert_eq!(f.resolver.store().languages(), vec!["de-de", "es-es"]);
    }

    #[tokio::test]
    async fn test_set_same_default_keeps_it_cached() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();

        let handle = f.resolver.set_default_language("en-us");
        assert!(f.resolver.store().has("en-us"));
        assert!(!f.resolver.store().has("fr-fr"));
        handle.await.unwrap();
        assert_eq!(f.resolver.store().languages(), vec!["en-us"]);
    }

    #[tokio::test]
    async fn test_unawaited_selections_leave_only_the_last() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        let fr = f.resolver.set_selected_language("fr-fr");
        let de = f.resolver.set_selected_language("de-de");

        fr.await.unwrap();
        de.await.unwrap();
        assert_eq!(f.resolver.store().languages(), vec!["de-de", "en-us"]);
    }

    #[tokio::test]
    async fn test_state_mutates_before_load_completes() {
        let f = fixture();
        let handle = f.resolver.set_default_language("en-us");
        assert_eq!(f.resolver.default_language().as_deref(), Some("en-us"));
        assert!(!f.resolver.store().has("en-us"));
        handle.await.unwrap();
        assert!(f.resolver.store().has("en-us"));
    }

    #[tokio::test]
    async fn test_select_other_language_diverges() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();
        assert_eq!(f.resolver.state(), LanguageState::Diverged);
        assert_eq!(f.resolver.selected_language().as_deref(), Some("fr-fr"));
        assert!(f.resolver.store().has("fr-fr"));
    }

    #[tokio::test]
    async fn test_select_same_language_twice_is_idempotent() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();

        assert_eq!(f.loader.requests("resources.fr-fr.json"), 1);
        assert!(f.resolver.store().has("fr-fr"));
        assert_eq!(f.resolver.selected_language().as_deref(), Some("fr-fr"));
    }

    #[tokio::test]
    async fn test_select_default_does_not_load() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("en-us").await.unwrap();
        assert_eq!(f.loader.requests("resources.en-us.json"), 1);
        assert_eq!(f.resolver.state(), LanguageState::DefaultOnly);
    }

    #[tokio::test]
    async fn test_select_default_while_diverged_returns_to_default() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();
        f.resolver.set_selected_language("en-us").await.unwrap();

        assert_eq!(f.resolver.state(), LanguageState::DefaultOnly);
        assert!(!f.resolver.store().has("fr-fr"));
        assert!(f.resolver.store().has("en-us"));
        assert_eq!(f.loader.requests("resources.en-us.json"), 1);
    }

    #[tokio::test]
    async fn test_eviction_of_previous_selection() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();
        f.resolver.set_selected_language("de-de").await.unwrap();

        let store = f.resolver.store();
        assert!(!store.has("fr-fr"));
        assert!(store.has("en-us"));
        assert!(store.has("de-de"));
    }

    #[tokio::test]
    async fn test_eviction_is_synchronous() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();

        let handle = f.resolver.set_selected_language("de-de");
        assert!(!f.resolver.store().has("fr-fr"));
        assert_eq!(f.resolver.selected_language().as_deref(), Some("de-de"));
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_select_without_default() {
        let f = fixture();
        let err = f.resolver.set_selected_language("fr-fr").await.unwrap_err();
        assert!(matches!(err, LexiconError::NoLanguageConfigured));
        assert_eq!(f.resolver.state(), LanguageState::Unconfigured);
        assert!(f.resolver.selected_language().is_none());
        assert_eq!(f.loader.total_requests(), 0);
        assert_eq!(f.diagnostics.errors(), vec!["No language configured"]);
    }

    #[tokio::test]
    async fn test_select_missing_resource_still_selects() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        let result = f.resolver.set_selected_language("xx-xx").await;

        assert!(result.is_err());
        assert_eq!(f.resolver.selected_language().as_deref(), Some("xx-xx"));
        assert!(f.diagnostics.errors()[0].contains("resources.xx-xx.json"));
        // Lookups fall back to the default.
        assert_eq!(f.resolver.get_term("user.name", None, &[]).as_deref(), Some("Name"));
    }

    // ── Lookup ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_lookup_in_default() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        assert_eq!(f.resolver.get_term("user.name", None, &[]).as_deref(), Some("Name"));
        assert_eq!(f.resolver.get_term("user.age", None, &[]).as_deref(), Some("Age"));
        assert!(f.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_empty_key() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();

        assert!(f.resolver.get_term("", None, &[]).is_none());
        assert_eq!(f.diagnostics.warnings(), vec!["Missing term key"]);
        assert!(f.diagnostics.errors().is_empty());
    }

    #[tokio::test]
    async fn test_empty_key_checked_before_language() {
        let f = fixture();
        let err = f.resolver.try_get_term("", None, &[]).unwrap_err();
        assert!(matches!(err, LexiconError::MissingTermKey));
    }

    #[tokio::test]
    async fn test_no_language_configured() {
        let f = fixture();
        let err = f.resolver.try_get_term("user.name", None, &[]).unwrap_err();
        assert!(matches!(err, LexiconError::NoLanguageConfigured));
        assert_eq!(f.diagnostics.errors(), vec!["No language configured"]);
    }

    #[tokio::test]
    async fn test_selected_hit() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();
        assert_eq!(f.resolver.get_term("user.age", None, &[]).as_deref(), Some("Âge"));
        assert!(f.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_selected_miss_falls_back_with_one_warning() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();

        assert_eq!(f.resolver.get_term("user.name", None, &[]).as_deref(), Some("Name"));
        assert_eq!(
            f.diagnostics.warnings(),
            vec!["Translation not found for 'user.name' in language 'fr-fr'"]
        );
    }

    #[tokio::test]
    async fn test_override_miss_falls_back_with_one_warning() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.store().load("es-es").await.unwrap();

        let term = f.resolver.get_term("user.name", Some("es-es"), &[]);
        assert_eq!(term.as_deref(), Some("Name"));
        assert_eq!(
            f.diagnostics.warnings(),
            vec!["Translation not found for 'user.name' in language 'es-es'"]
        );
    }

    #[tokio::test]
    async fn test_override_hit() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.store().load("de-de").await.unwrap();

        let term = f.resolver.get_term("user.name", Some("de-de"), &[]);
        assert_eq!(term.as_deref(), Some("Name (de)"));
        // The override does not change state.
        assert_eq!(f.resolver.selected_language().as_deref(), Some("en-us"));
    }

    #[tokio::test]
    async fn test_empty_override_uses_selected() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        assert_eq!(f.resolver.get_term("user.name", Some(""), &[]).as_deref(), Some("Name"));
    }

    #[tokio::test]
    async fn test_override_not_loaded_falls_back() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        let term = f.resolver.get_term("user.name", Some("it-it"), &[]);
        assert_eq!(term.as_deref(), Some("Name"));
        assert_eq!(f.diagnostics.warnings().len(), 1);
    }

    #[tokio::test]
    async fn test_miss_everywhere() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();

        let err = f.resolver.try_get_term("nope", None, &[]).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::TermNotFound { ref language, .. } if language == "en-us"
        ));
        assert_eq!(
            f.diagnostics.warnings(),
            vec![
                "Translation not found for 'nope' in language 'fr-fr'",
                "Translation not found for 'nope' in language 'en-us'",
            ]
        );
    }

    #[tokio::test]
    async fn test_miss_in_default_reports_once() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();

        assert!(f.resolver.get_term("nope", None, &[]).is_none());
        assert_eq!(
            f.diagnostics.warnings(),
            vec!["Translation not found for 'nope' in language 'en-us'"]
        );
    }

    #[tokio::test]
    async fn test_branch_key_is_a_miss() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        assert!(f.resolver.get_term("user", None, &[]).is_none());
    }

    #[tokio::test]
    async fn test_lookup_before_load_completes() {
        let f = fixture();
        let handle = f.resolver.set_default_language("en-us");
        assert!(f.resolver.get_term("user.name", None, &[]).is_none());
        handle.await.unwrap();
        assert_eq!(f.resolver.get_term("user.name", None, &[]).as_deref(), Some("Name"));
    }

    // ── Substitution ────────────────────────────────────────────────

    #[tokio::test]
    async fn test_substitution() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        assert_eq!(
            f.resolver.get_term("greet", None, &[&"Ann", &"Bob"]).as_deref(),
            Some("Hi Ann, meet Bob")
        );
        assert_eq!(
            f.resolver.get_term("one", None, &[&"Ann", &"Bob"]).as_deref(),
            Some("Only Ann")
        );
    }

    #[tokio::test]
    async fn test_substitution_applies_to_fallback() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();
        assert_eq!(
            f.resolver.get_term("greet", None, &[&"Ann", &2]).as_deref(),
            Some("Hi Ann, meet 2")
        );
    }

    // ── Misc ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_has_term_reports_nothing() {
        let f = fixture();
        f.resolver.set_default_language("en-us").await.unwrap();
        f.resolver.set_selected_language("fr-fr").await.unwrap();

        assert!(f.resolver.has_term("user.age", None));
        assert!(!f.resolver.has_term("user.name", None));
        assert!(f.resolver.has_term("user.name", Some("en-us")));
        assert!(f.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_configure_from_settings() {
        let f = fixture();
        let settings = Settings {
            selected_language: Some("fr-fr".to_string()),
            ..Settings::default()
        };
        f.resolver.configure(&settings).await.unwrap();
        assert_eq!(f.resolver.default_language().as_deref(), Some("en-us"));
        assert_eq!(f.resolver.selected_language().as_deref(), Some("fr-fr"));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let f = fixture();
        let other = f.resolver.clone();
        f.resolver.set_default_language("en-us").await.unwrap();
        assert_eq!(other.get_term("user.name", None, &[]).as_deref(), Some("Name"));
    }

    #[test]
    fn test_debug_output() {
        let f = fixture();
        let debug = format!("{:?}", f.resolver);
        assert!(debug.contains("TranslationResolver"));
        assert!(debug.contains("default_language"));
    }
}
