use oasis_config::Config;

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show_config(context),
        [action] if action.eq_ignore_ascii_case("show") => show_config(context),
        [action, key, value @ ..] if action.eq_ignore_ascii_case("set") && !value.is_empty() => {
            set_config_value(context, key, &value.join(" "))
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "Usage: config [show|set <key> <value>]. Keys: {}",
            Config::KEYS.join(", ")
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    let mut rows = Vec::with_capacity(Config::KEYS.len());
    for key in Config::KEYS {
        let value = context.config.get_value(key)?;
        let value = if value.is_empty() {
            "(default)".to_string()
        } else {
            value
        };
        rows.push((key, value));
    }
    output::fields(&rows);
    output::hint(format!(
        "Config file: {}",
        context.config_manager.config_path().display()
    ));
    output::hint(format!(
        "Data directory: {}",
        context.storage.data_dir().display()
    ));
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let key = key.to_lowercase();
    let mut updated = context.config.clone();
    updated.set_value(&key, value)?;
    context.config = updated;
    context.persist_config()?;
    if key == "data_root" {
        context.reopen_storage()?;
    }
    output::success(format!(
        "Configuration updated: {} = {}",
        key,
        context.config.get_value(&key)?
    ));
    Ok(())
}
