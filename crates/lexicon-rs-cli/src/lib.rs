//! # lexicon-rs-cli
//!
//! Command-line tooling for lexicon-rs.
//!
//! - **Command framework** - [`ManagementCommand`] and [`CommandRegistry`]
//! - **Built-in commands** - `lookup` (resolve a term), `keys` (list a
//!   language's keys), `check` (compare a language against the default)
//!
//! ## Quick Start
//!
//! ```rust
//! use lexicon_rs_cli::command::CommandRegistry;
//! use lexicon_rs_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//!
//! let names = registry.list_commands();
//! assert!(names.contains(&"lookup"));
//! assert!(names.contains(&"check"));
//! ```

// - result_large_err: LexiconError is the crate-wide error type
// - unused_async: command handlers keep consistent async signatures
#![allow(clippy::result_large_err)]
#![allow(clippy::unused_async)]

pub mod command;
pub mod commands;

pub use command::{settings_from_matches, CommandRegistry, ManagementCommand};
