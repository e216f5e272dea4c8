//! Command framework for the lexicon CLI.
//!
//! [`ManagementCommand`] defines one subcommand; [`CommandRegistry`] collects
//! them, builds the clap interface, and dispatches parsed arguments.
//!
//! ## Defining a Custom Command
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use lexicon_rs_cli::command::ManagementCommand;
//! use lexicon_rs_core::{LexiconError, Settings};
//!
//! struct WhereCommand;
//!
//! #[async_trait]
//! impl ManagementCommand for WhereCommand {
//!     fn name(&self) -> &str { "where" }
//!     fn help(&self) -> &str { "Print the default resource address" }
//!
//!     async fn handle(
//!         &self,
//!         _matches: &clap::ArgMatches,
//!         settings: &Settings,
//!     ) -> Result<(), LexiconError> {
//!         println!("{}", settings.resource_address(&settings.default_language));
//!         Ok(())
//!     }
//! }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use lexicon_rs_core::{settings_loader, LexiconError, Settings};

/// A command that can be registered and invoked through the CLI.
#[async_trait]
pub trait ManagementCommand: Send + Sync {
    /// Returns the name of this command (used to invoke it from the CLI).
    fn name(&self) -> &str;

    /// Returns a short help description for this command.
    fn help(&self) -> &str;

    /// Adds custom arguments to the clap command.
    ///
    /// The default implementation returns the command unchanged.
    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Executes the command with the given argument matches and settings.
    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), LexiconError>;
}

/// A registry of commands, keyed by name.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn ManagementCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a command, replacing any command with the same name.
    pub fn register(&mut self, command: Box<dyn ManagementCommand>) {
        let name = command.name().to_string();
        self.commands.insert(name, command);
    }

    /// Returns the command with the given name, if registered.
    pub fn get(&self, name: &str) -> Option<&dyn ManagementCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// Returns a sorted list of all registered command names.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the top-level clap `Command` with every registered subcommand
    /// and the global configuration options.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("lexicon")
            .about("Resolve and inspect localization terms")
            .subcommand_required(true)
            .arg(
                clap::Arg::new("config")
                    .long("config")
                    .short('c')
                    .global(true)
                    .help("Settings file (.toml or .json)"),
            )
            .arg(
                clap::Arg::new("base-path")
                    .long("base-path")
                    .global(true)
                    .help("Prefix for resource addresses, e.g. \"assets/i18n/\""),
            )
            .arg(
                clap::Arg::new("default-language")
                    .long("default-language")
                    .global(true)
                    .help("Default language code"),
            );

        let mut entries: Vec<_> = self.commands.iter().collect();
        entries.sort_by_key(|(name, _)| (*name).clone());

        for (name, cmd) in entries {
            // clap wants &'static str names; commands are registered once at startup.
            let static_name: &'static str = Box::leak(name.clone().into_boxed_str());
            let subcmd = clap::Command::new(static_name).about(cmd.help().to_string());
            let subcmd = cmd.add_arguments(subcmd);
            app = app.subcommand(subcmd);
        }

        app
    }

    /// Dispatches to the subcommand named in `matches`.
    pub async fn execute(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), LexiconError> {
        let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
            LexiconError::ConfigurationError("No subcommand specified".to_string())
        })?;

        let cmd = self.get(name).ok_or_else(|| {
            LexiconError::ConfigurationError(format!("Unknown command: {name}"))
        })?;

        cmd.handle(sub_matches, settings).await
    }
}

/// Builds settings from the global options.
///
/// Starts from `--config` (or defaults), applies environment overrides, then
/// the command-line options on top.
pub fn settings_from_matches(matches: &clap::ArgMatches) -> Result<Settings, LexiconError> {
    let mut settings = match matches.get_one::<String>("config") {
        Some(path) => settings_loader::from_file_with_env(path)?,
        None => settings_loader::from_env(),
    };

    if let Some(base_path) = matches.get_one::<String>("base-path") {
        settings.base_path.clone_from(base_path);
    }
    if let Some(language) = matches.get_one::<String>("default-language") {
        settings.default_language.clone_from(language);
    }

    Ok(settings)
}
