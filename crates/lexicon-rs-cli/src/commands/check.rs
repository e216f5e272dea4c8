//! The `check` command.
//!
//! Compares a language's resource file against the default language's and
//! reports keys that would fall back (missing) or are never used (extra).

use std::collections::BTreeSet;

use async_trait::async_trait;
use lexicon_rs_core::{LexiconError, Settings};
use lexicon_rs_store::TermTree;

use crate::command::ManagementCommand;
use crate::commands::keys::load_tree;

/// Checks a language for keys missing relative to the default language.
pub struct CheckCommand;

/// The difference between a language and the default language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyReport {
    /// Keys in the default language that the checked language lacks.
    pub missing: Vec<String>,
    /// Keys in the checked language that the default language lacks.
    pub extra: Vec<String>,
}

impl KeyReport {
    /// Returns `true` if both languages define the same keys.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Compares the keys of `language` against those of `default`.
pub fn compare_keys(default: &TermTree, language: &TermTree) -> KeyReport {
    let default_keys: BTreeSet<String> = default.keys().into_iter().collect();
    let language_keys: BTreeSet<String> = language.keys().into_iter().collect();

    KeyReport {
        missing: default_keys.difference(&language_keys).cloned().collect(),
        extra: language_keys.difference(&default_keys).cloned().collect(),
    }
}

#[async_trait]
impl ManagementCommand for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn help(&self) -> &'static str {
        "Report keys missing from a language relative to the default language"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("language")
                .required(true)
                .help("Language code to check"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), LexiconError> {
        let language = matches
            .get_one::<String>("language")
            .map(String::as_str)
            .unwrap_or_default();

        let default = load_tree(settings, &settings.default_language).await?;
        let checked = load_tree(settings, language).await?;
        let report = compare_keys(&default, &checked);

        if report.is_clean() {
            tracing::info!("{language} defines every key of {}", settings.default_language);
            return Ok(());
        }

        for key in &report.missing {
            println!("missing: {key}");
        }
        for key in &report.extra {
            println!("extra: {key}");
        }

        tracing::info!(
            "{language}: {} missing, {} extra relative to {}",
            report.missing.len(),
            report.extra.len(),
            settings.default_language
        );

        if report.missing.is_empty() {
            return Ok(());
        }
        Err(LexiconError::ConfigurationError(format!(
            "{language} is missing {} key(s)",
            report.missing.len()
        )))
    }
}
