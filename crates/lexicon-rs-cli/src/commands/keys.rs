//! The `keys` command.

use std::sync::Arc;

use async_trait::async_trait;
use lexicon_rs_core::{LexiconError, Settings};
use lexicon_rs_store::{FileSystemLoader, ResourceStore, TermTree};

use crate::command::ManagementCommand;

/// Lists every term key of one language.
pub struct KeysCommand;

/// Loads the resource file of `language` under `settings`.
pub async fn load_tree(settings: &Settings, language: &str) -> Result<Arc<TermTree>, LexiconError> {
    let store = ResourceStore::new(settings.base_path.clone(), Arc::new(FileSystemLoader::new()));
    store.load(language).await?;
    store
        .get(language)
        .ok_or_else(|| LexiconError::load_failure(store.resource_address(language), "evicted"))
}

#[async_trait]
impl ManagementCommand for KeysCommand {
    fn name(&self) -> &'static str {
        "keys"
    }

    fn help(&self) -> &'static str {
        "List every term key of a language"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("language")
                .help("Language code; defaults to the default language"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), LexiconError> {
        let language = matches
            .get_one::<String>("language")
            .unwrap_or(&settings.default_language);

        let tree = load_tree(settings, language).await?;
        for key in tree.keys() {
            println!("{key}");
        }
        tracing::info!(language = %language, terms = tree.len(), "listed keys");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_tree() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("resources.en-us.json"),
            r#"{"b": "B", "a": {"x": "X"}}"#,
        )
        .unwrap();
        let settings = Settings {
            base_path: format!("{}/", dir.path().display()),
            ..Settings::default()
        };

        let tree = load_tree(&settings, "en-us").await.unwrap();
        assert_eq!(tree.keys(), vec!["a.x", "b"]);
    }

    #[tokio::test]
    async fn test_load_tree_missing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            base_path: format!("{}/", dir.path().display()),
            ..Settings::default()
        };
        assert!(load_tree(&settings, "en-us").await.is_err());
    }
}
