//! View bindings.
//!
//! Thin projections of [`TranslationResolver::get_term`] for presentation
//! code. None of them add resolution logic of their own.
//!
//! - [`translate`] - `(key, language) -> term`
//! - [`LazyTerm`] - a term that resolves each time it is displayed
//! - [`TermFunction`] - the `t(key=..., lang=..., args=[...])` Tera function

use std::collections::HashMap;
use std::fmt::{self, Display};

use tera::Value;

use crate::resolver::TranslationResolver;

/// Resolves `key` in `language` (or the selected language) with no arguments.
pub fn translate(
    resolver: &TranslationResolver,
    key: &str,
    language: Option<&str>,
) -> Option<String> {
    resolver.get_term(key, language, &[])
}

/// A lazily-resolved term.
///
/// The lookup runs each time the term is displayed, against whatever
/// language the resolver has selected at that moment. Unresolved terms
/// display as an empty string.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lexicon_rs_resolver::{LazyTerm, TranslationResolver};
/// use lexicon_rs_store::{InMemoryLoader, ResourceStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let loader = Arc::new(InMemoryLoader::new());
/// loader.add("resources.en.json", r#"{"ok": "OK"}"#);
/// loader.add("resources.de.json", r#"{"ok": "Gut"}"#);
///
/// let resolver = TranslationResolver::new(ResourceStore::new("", loader));
/// let label = LazyTerm::new(&resolver, "ok");
///
/// resolver.set_default_language("en").await.unwrap();
/// assert_eq!(label.to_string(), "OK");
///
/// resolver.set_selected_language("de").await.unwrap();
/// assert_eq!(label.to_string(), "Gut");
/// # }
/// ```
#[derive(Clone)]
pub struct LazyTerm {
    resolver: TranslationResolver,
    key: String,
    language: Option<String>,
}

impl LazyTerm {
    /// Creates a lazy term for `key` in the selected language.
    pub fn new(resolver: &TranslationResolver, key: impl Into<String>) -> Self {
        Self {
            resolver: resolver.clone(),
            key: key.into(),
            language: None,
        }
    }

    /// Pins the term to `language` instead of the selected language.
    #[must_use]
    pub fn in_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// The term key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolves the term now.
    pub fn evaluate(&self) -> Option<String> {
        translate(&self.resolver, &self.key, self.language.as_deref())
    }
}

impl Display for LazyTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.evaluate().unwrap_or_default())
    }
}

impl fmt::Debug for LazyTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyTerm")
            .field("key", &self.key)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl PartialEq for LazyTerm {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.language == other.language
    }
}

impl Eq for LazyTerm {}

impl From<LazyTerm> for String {
    fn from(term: LazyTerm) -> Self {
        term.evaluate().unwrap_or_default()
    }
}

/// The `t` template function.
///
/// Arguments: `key` (string), optional `lang` (string), optional `args`
/// (array, or a single value). Returns the term, or `null` when it does not
/// resolve.
#[derive(Debug, Clone)]
pub struct TermFunction {
    resolver: TranslationResolver,
}

impl TermFunction {
    /// Creates the function over `resolver`.
    pub fn new(resolver: &TranslationResolver) -> Self {
        Self {
            resolver: resolver.clone(),
        }
    }
}

impl tera::Function for TermFunction {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let key = args.get("key").and_then(Value::as_str).unwrap_or_default();
        let language = args.get("lang").and_then(Value::as_str);
        let values: Vec<String> = match args.get("args") {
            Some(Value::Array(items)) => items.iter().map(value_text).collect(),
            Some(single) => vec![value_text(single)],
            None => Vec::new(),
        };
        let display: Vec<&dyn Display> = values.iter().map(|v| v as &dyn Display).collect();

        Ok(self
            .resolver
            .get_term(key, language, &display)
            .map_or(Value::Null, Value::String))
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Registers [`TermFunction`] as `t` on `tera`.
pub fn register_tera_function(tera: &mut tera::Tera, resolver: &TranslationResolver) {
    tera.register_function("t", TermFunction::new(resolver));
}
