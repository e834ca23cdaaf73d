use oasis_core::{AssistantService, ConversationService, CoreError};
use oasis_domain::{Message, NavigationAction, Role};

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "ask",
            "Ask ZENO a question (or `ask <n>` for a suggested question)",
            "ask <message>",
            cmd_ask,
        ),
        CommandEntry::new(
            "chat",
            "Show the conversation with ZENO so far",
            "chat",
            cmd_chat,
        ),
        CommandEntry::new(
            "starters",
            "List suggested questions for ZENO",
            "starters",
            cmd_starters,
        ),
    ]
}

fn cmd_ask(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let text = resolve_question(&args.join(" "));

    let next = match context.assistant_context() {
        Ok(assistant_context) => ConversationService::submit(
            &context.conversation,
            &text,
            &context.assistant,
            &assistant_context,
            context.clock.as_ref(),
        ),
        Err(_) => ConversationService::record_failure(
            &context.conversation,
            &text,
            context.clock.as_ref(),
        ),
    }
    .map_err(|err| match err {
        CoreError::Validation(_) => {
            CommandError::InvalidArguments("Usage: ask <message>".into())
        }
        other => other.into(),
    })?;
    context.conversation = next;

    if let Some(reply) = context.conversation.last() {
        print_message(reply);
    }
    Ok(())
}

fn cmd_chat(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Chat with ZENO");
    for message in context.conversation.messages() {
        print_message(message);
    }
    Ok(())
}

fn cmd_starters(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Try asking");
    for (idx, starter) in AssistantService::conversation_starters().iter().enumerate() {
        output::line(format!("  {}. {}", idx + 1, starter));
    }
    output::hint("Use `ask <n>` to send one of these.");
    Ok(())
}

/// `ask 2` sends the second conversation starter; anything else is sent verbatim.
fn resolve_question(input: &str) -> String {
    let starters = AssistantService::conversation_starters();
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=starters.len()).contains(&n) => starters[n - 1].to_string(),
        _ => input.to_string(),
    }
}

fn print_message(message: &Message) {
    let speaker = format!("{}:", message.role);
    match message.role {
        Role::User => output::line(format!("{speaker} {}", message.content)),
        Role::Assistant => {
            output::line(speaker);
            for line in message.content.lines() {
                output::line(format!("  {line}"));
            }
        }
    }
    for action in &message.suggested_actions {
        output::hint(format!(
            "{} -> `{}`",
            action.label,
            command_for(action.action)
        ));
    }
}

/// The shell command that plays the role of each in-app destination.
pub(crate) fn command_for(action: NavigationAction) -> &'static str {
    match action {
        NavigationAction::NavigateBalance => "balance",
        NavigationAction::NavigateMap => "pantries",
        NavigationAction::NavigateBudget => "budget",
        NavigationAction::NavigateShutdown => "shutdown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_question_selects_starter() {
        assert_eq!(resolve_question("1"), "What's my EBT balance?");
        assert_eq!(resolve_question(" 4 "), "What if there's a government shutdown?");
        assert_eq!(resolve_question("5"), "5");
        assert_eq!(resolve_question("0"), "0");
        assert_eq!(resolve_question("I need food"), "I need food");
    }
}
