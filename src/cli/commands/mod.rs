pub mod balance;
pub mod budget;
pub mod chat;
pub mod config;
pub mod pantry;
pub mod seed;
pub mod shutdown;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "balance",
    "budget",
    "pantries",
    "pantry",
    "shutdown",
    "checklist",
    "ask",
    "chat",
    "starters",
    "seed",
    "config",
    "help",
    "version",
    "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(balance::definitions());
    commands.extend(budget::definitions());
    commands.extend(pantry::definitions());
    commands.extend(shutdown::definitions());
    commands.extend(chat::definitions());
    commands.extend(seed::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn registry() -> CommandRegistry {
    CommandRegistry::ordered(all_entries(), ROOT_COMMAND_ORDER)
}

#[cfg(test)]
mod tests;
