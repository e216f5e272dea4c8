//! Built-in commands.
//!
//! Each command implements the
//! [`ManagementCommand`](crate::command::ManagementCommand) trait.

pub mod check;
pub mod keys;
pub mod lookup;

pub use check::CheckCommand;
pub use keys::KeysCommand;
pub use lookup::LookupCommand;

use crate::command::CommandRegistry;

/// Registers all built-in commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(LookupCommand));
    registry.register(Box::new(KeysCommand));
    registry.register(Box::new(CheckCommand));
}
