//! The `lookup` command.
//!
//! Resolves one term the same way an application would: configure the
//! default (and selected) language from settings, then look the key up with
//! fallback and placeholder substitution.

use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use lexicon_rs_core::{LexiconError, Settings};
use lexicon_rs_resolver::TranslationResolver;
use lexicon_rs_store::FileSystemLoader;

use crate::command::ManagementCommand;

/// Resolves a term key and prints the result.
pub struct LookupCommand;

/// Configures a resolver from `settings` and resolves `key`.
///
/// A failed load of the selected language is not fatal; lookups fall back
/// to the default language.
pub async fn lookup(
    settings: &Settings,
    key: &str,
    language: Option<&str>,
    args: &[String],
) -> Result<String, LexiconError> {
    let resolver = TranslationResolver::from_settings(settings, Arc::new(FileSystemLoader::new()));
    resolver.set_default_language(&settings.default_language).await?;
    if let Some(selected) = &settings.selected_language {
        resolver.set_selected_language(selected).await.ok();
    }
    if let Some(language) = language {
        resolver.store().load(language).await.ok();
    }

    let display: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();
    resolver.try_get_term(key, language, &display)
}

#[async_trait]
impl ManagementCommand for LookupCommand {
    fn name(&self) -> &'static str {
        "lookup"
    }

    fn help(&self) -> &'static str {
        "Resolve a term key"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("key")
                .required(true)
                .help("Dotted term key, e.g. user.name"),
        )
        .arg(
            clap::Arg::new("lang")
                .long("lang")
                .short('l')
                .help("Resolve in this language instead of the selected one"),
        )
        .arg(
            clap::Arg::new("arg")
                .long("arg")
                .short('a')
                .action(clap::ArgAction::Append)
                .help("Positional placeholder value; repeat for {0}, {1}, ..."),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), LexiconError> {
        let key = matches
            .get_one::<String>("key")
            .map(String::as_str)
            .unwrap_or_default();
        let language = matches.get_one::<String>("lang").map(String::as_str);
        let args: Vec<String> = matches
            .get_many::<String>("arg")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let term = lookup(settings, key, language, &args).await?;
        println!("{term}");
        Ok(())
    }
}
