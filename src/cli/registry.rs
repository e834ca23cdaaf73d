use strsim::levenshtein;

use crate::cli::context::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Largest edit distance still offered as a "did you mean" suggestion.
const SUGGESTION_DISTANCE: usize = 3;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Commands in menu order. Names are matched case-insensitively.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry listing `entries` in `order`; unlisted names go last.
    pub fn ordered(mut entries: Vec<CommandEntry>, order: &[&str]) -> Self {
        entries.sort_by_key(|entry| {
            order
                .iter()
                .position(|name| entry.name.eq_ignore_ascii_case(name))
                .unwrap_or(order.len())
        });
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry);
        }
        registry
    }

    /// Adds `entry`, replacing an earlier command of the same name in place.
    pub fn register(&mut self, entry: CommandEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(entry.name))
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn list(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    /// Closest command name to a mistyped `input`, if any is near enough.
    pub fn closest(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_lowercase();
        self.names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .map(|(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    fn registry() -> CommandRegistry {
        CommandRegistry::ordered(
            vec![
                CommandEntry::new("exit", "Exit", "exit", noop),
                CommandEntry::new("pantries", "List pantries", "pantries", noop),
                CommandEntry::new("balance", "Show balance", "balance", noop),
            ],
            &["balance", "pantries"],
        )
    }

    #[test]
    fn ordered_follows_menu_order() {
        let names: Vec<_> = registry().names().collect();
        assert_eq!(names, vec!["balance", "pantries", "exit"]);
    }

    #[test]
    fn lookup_ignores_case() {
        assert!(registry().get("BALANCE").is_some());
        assert!(registry().handler("Pantries").is_some());
        assert!(registry().get("budget").is_none());
    }

    #[test]
    fn closest_suggests_only_near_names() {
        let registry = registry();
        assert_eq!(registry.closest("balanse"), Some("balance"));
        assert_eq!(registry.closest("PANTRYS"), Some("pantries"));
        assert_eq!(registry.closest("checklist"), None);
    }
}
