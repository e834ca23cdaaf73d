use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use colored::Colorize;
use oasis_config::Config;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use thiserror::Error;
use tracing::debug;

use crate::cli::context::{CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::errors::CliError;

pub const SCRIPT_ENV: &str = "OASIS_CLI_SCRIPT";

/// Commands whose argument is free text (apostrophes and all), passed through unsplit.
const FREE_TEXT_COMMANDS: &[&str] = &["ask"];

const PANTRY_FILTERS: &[&str] = &["all", "open", "walk-in"];

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => {
            let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
            editor.set_helper(Some(CommandHelper::new(context.registry.list())));
            context.print_banner();
            run_loop(&mut context, &mut EditorSource { editor })
        }
        CliMode::Script => {
            let mut source = ReaderSource {
                lines: io::stdin().lock().lines(),
            };
            run_loop(&mut context, &mut source)
        }
    }
}

enum Input {
    Line(String),
    Interrupted,
    Closed,
}

/// Where shell lines come from: the line editor or a plain reader.
trait LineSource {
    fn next_input(&mut self, prompt: &str) -> Result<Input, CliError>;
}

struct EditorSource {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl LineSource for EditorSource {
    fn next_input(&mut self, prompt: &str) -> Result<Input, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed).ok();
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Closed),
            Err(err) => Err(err.into()),
        }
    }
}

struct ReaderSource<B> {
    lines: io::Lines<B>,
}

impl<B: BufRead> LineSource for ReaderSource<B> {
    fn next_input(&mut self, _prompt: &str) -> Result<Input, CliError> {
        match self.lines.next() {
            Some(line) => Ok(Input::Line(line?)),
            None => Ok(Input::Closed),
        }
    }
}

fn run_loop(context: &mut ShellContext, source: &mut dyn LineSource) -> Result<(), CliError> {
    while context.running {
        match source.next_input(&context.prompt())? {
            Input::Line(line) => match handle_line(context, &line) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(err) => context.report_error(err),
            },
            Input::Interrupted => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Input::Closed => {
                if context.mode == CliMode::Interactive {
                    output::info("Goodbye.");
                }
                break;
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_line(
    context: &mut ShellContext,
    line: &str,
) -> Result<LoopControl, CommandError> {
    let parsed = match CommandLine::parse(line) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => return Ok(LoopControl::Continue),
        Err(err) => {
            output::warning(err);
            return Ok(LoopControl::Continue);
        }
    };

    let command = parsed.name.to_lowercase();
    let args: Vec<&str> = parsed.args.iter().map(String::as_str).collect();
    debug!(command = %command, args = args.len(), "dispatching");

    match context.dispatch(&command, &parsed.name, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

/// One tokenized shell line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

#[derive(Debug, Error)]
#[error("Could not parse command: {0}")]
pub(crate) struct ParseError(String);

impl CommandLine {
    /// Splits `input` shell-style. Free-text commands keep their argument
    /// whole, minus one pair of surrounding quotes. Blank input is `None`.
    pub(crate) fn parse(input: &str) -> Result<Option<Self>, ParseError> {
        let trimmed = input.trim();
        let (head, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        if head.is_empty() {
            return Ok(None);
        }

        if FREE_TEXT_COMMANDS
            .iter()
            .any(|name| head.eq_ignore_ascii_case(name))
        {
            let text = strip_matching_quotes(rest.trim());
            let args = if text.is_empty() {
                Vec::new()
            } else {
                vec![text.to_string()]
            };
            return Ok(Some(Self {
                name: head.to_string(),
                args,
            }));
        }

        let mut tokens = shell_words::split(trimmed)
            .map_err(|err| ParseError(err.to_string()))?
            .into_iter();
        Ok(tokens.next().map(|name| Self {
            name,
            args: tokens.collect(),
        }))
    }
}

fn strip_matching_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Completion and usage hints for the line editor.
struct CommandHelper {
    /// `(name, usage)` pairs in menu order.
    commands: Vec<(String, String)>,
}

impl CommandHelper {
    fn new(entries: &[CommandEntry]) -> Self {
        Self {
            commands: entries
                .iter()
                .map(|entry| (entry.name.to_ascii_lowercase(), entry.usage.to_string()))
                .collect(),
        }
    }

    /// Values accepted after `command` once `args` have been typed.
    fn argument_candidates(&self, command: &str, args: &[&str]) -> Vec<String> {
        let values: Vec<&str> = match (command, args) {
            ("pantries", []) => PANTRY_FILTERS.to_vec(),
            ("seed", []) => vec!["--force"],
            ("config", []) => vec!["show", "set"],
            ("config", [action]) if action.eq_ignore_ascii_case("set") => Config::KEYS.to_vec(),
            ("help", []) => self.commands.iter().map(|(name, _)| name.as_str()).collect(),
            _ => Vec::new(),
        };
        values.into_iter().map(str::to_string).collect()
    }

    /// Usage text after the command name, e.g. `[all|open|walk-in]` for `pantries`.
    fn usage_tail(&self, name: &str) -> Option<String> {
        let (_, usage) = self
            .commands
            .iter()
            .find(|(command, _)| command.eq_ignore_ascii_case(name))?;
        usage.split_once(' ').map(|(_, tail)| tail.to_string())
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let words: Vec<&str> = prefix.split_whitespace().collect();
        let (typed, partial) = match words.split_last() {
            Some((last, rest)) if !prefix.ends_with(char::is_whitespace) => (rest, *last),
            _ => (words.as_slice(), ""),
        };

        let pool = match typed.split_first() {
            None => self.commands.iter().map(|(name, _)| name.clone()).collect(),
            Some((command, args)) => {
                self.argument_candidates(&command.to_ascii_lowercase(), args)
            }
        };

        let needle = partial.to_ascii_lowercase();
        let candidates = pool
            .into_iter()
            .filter(|value| value.to_ascii_lowercase().starts_with(&needle))
            .map(|value| Pair {
                display: value.clone(),
                replacement: value,
            })
            .collect();
        Ok((pos - partial.len(), candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let name = line.trim_start().strip_suffix(' ')?;
        if name.is_empty() || name.contains(char::is_whitespace) {
            return None;
        }
        self.usage_tail(name)
    }
}

impl Highlighter for CommandHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }
}

impl Validator for CommandHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> CommandLine {
        CommandLine::parse(input).unwrap().expect("command line")
    }

    #[test]
    fn quoted_arguments_stay_together() {
        let line = parse("config set location \"Memphis, TN\"");
        assert_eq!(line.name, "config");
        assert_eq!(line.args, vec!["set", "location", "Memphis, TN"]);
    }

    #[test]
    fn ask_keeps_apostrophes_intact() {
        assert_eq!(parse("ask What's my balance?").args, vec!["What's my balance?"]);

        let quoted = parse("ASK \"I can't afford food\"");
        assert_eq!(quoted.name, "ASK");
        assert_eq!(quoted.args, vec!["I can't afford food"]);

        assert!(parse("ask   ").args.is_empty());
    }

    #[test]
    fn unbalanced_quotes_are_reported() {
        assert!(CommandLine::parse("pantry \"1").is_err());
    }

    #[test]
    fn blank_line_is_skipped() {
        assert_eq!(CommandLine::parse("   ").unwrap(), None);
    }

    fn helper() -> CommandHelper {
        CommandHelper {
            commands: vec![
                ("pantries".into(), "pantries [all|open|walk-in]".into()),
                ("pantry".into(), "pantry <id>".into()),
                ("config".into(), "config [show|set <key> <value>]".into()),
                ("exit".into(), "exit".into()),
            ],
        }
    }

    #[test]
    fn arguments_complete_per_command() {
        let helper = helper();
        assert_eq!(
            helper.argument_candidates("pantries", &[]),
            vec!["all", "open", "walk-in"]
        );
        assert!(helper
            .argument_candidates("config", &["set"])
            .contains(&"family_size".to_string()));
        assert!(helper.argument_candidates("pantry", &[]).is_empty());
        assert_eq!(helper.argument_candidates("help", &[]).len(), 4);
    }

    #[test]
    fn usage_tail_skips_command_name() {
        let helper = helper();
        assert_eq!(
            helper.usage_tail("pantries").as_deref(),
            Some("[all|open|walk-in]")
        );
        assert_eq!(helper.usage_tail("exit"), None);
        assert_eq!(helper.usage_tail("budget"), None);
    }
}
