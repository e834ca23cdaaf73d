//! Shell state, dispatch, and error reporting.

use std::path::PathBuf;

use dialoguer::{theme::ColorfulTheme, Confirm};
use oasis_config::{Config, ConfigError, ConfigManager};
use oasis_core::{
    format::{CurrencyFormatter, DateFormatter},
    storage::OasisStorage,
    AssistantService, Clock, ConversationService, CoreError, ResponseLatency,
};
use oasis_domain::{AssistantContext, BenefitBalance, Conversation};
use oasis_storage_json::JsonOasisStorage;
use thiserror::Error;
use tracing::{info, warn};

use crate::cli::commands;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::system_clock::SystemClock;
use crate::currency::LocaleFormatter;
use crate::errors::{CliError, OasisError};
use crate::utils::{build_info, paths};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] OasisError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Core(OasisError::from(err))
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Core(OasisError::from(err))
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(inner) => CliError::Core(inner),
            CommandError::InvalidArguments(message) => CliError::Input(message),
            other => CliError::Command(other.to_string()),
        }
    }
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub storage: JsonOasisStorage,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub clock: Box<dyn Clock>,
    pub assistant: AssistantService,
    pub conversation: Conversation,
    pub formatter: LocaleFormatter,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(paths::app_home())?;
        let config = config_manager.load()?;
        let data_dir = paths::data_dir(&config);
        Self::build(mode, config_manager, config, data_dir, Box::new(SystemClock))
    }

    pub(crate) fn build(
        mode: CliMode,
        config_manager: ConfigManager,
        config: Config,
        data_dir: PathBuf,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let registry = commands::registry();

        let storage = JsonOasisStorage::new(data_dir)?;
        output::apply_config(&config);
        info!(data_dir = %storage.data_dir().display(), ?mode, "shell ready");

        let conversation = ConversationService::start(clock.as_ref());
        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            storage,
            config_manager,
            assistant: AssistantService::new(latency_for(&config)),
            formatter: LocaleFormatter::new(&config.locale),
            config,
            clock,
            conversation,
            running: true,
        })
    }

    pub(crate) fn prompt(&self) -> String {
        "oasis> ".to_string()
    }

    pub(crate) fn print_banner(&self) {
        output::section(format!("Oasis {}", build_info::current().short()));
        output::line("Your EBT balance, budget, food pantries and shutdown alerts in one place.");
        output::hint("Type `help` to list commands or `ask <question>` to talk to ZENO.");
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(name) = self.registry.closest(input) {
            output::hint(format!("Did you mean `{}`?", name));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit Oasis?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(OasisError::DataNotFound(path)) => {
                output::error(format!("No data found at {}.", path));
                output::hint("Run `seed` to install the demo data set.");
            }
            other => output::error(other),
        }
    }

    pub(crate) fn money(&self, amount: f64) -> String {
        self.formatter.format_amount(amount, &self.config.currency)
    }

    pub(crate) fn per_day(&self, amount: f64) -> String {
        self.formatter
            .format_daily_rate(amount, &self.config.currency)
    }

    pub(crate) fn date(&self, date: chrono::NaiveDate) -> String {
        self.formatter.format_date(date)
    }

    /// `date` relative to the clock's today.
    pub(crate) fn countdown(&self, date: chrono::NaiveDate) -> String {
        self.formatter.format_countdown(date, self.clock.today())
    }

    /// Context handed to ZENO. Falls back to zeros when no balance snapshot
    /// exists yet; an unreadable snapshot is an error.
    pub(crate) fn assistant_context(&self) -> Result<AssistantContext, CoreError> {
        let (ebt_balance, days_until_refill) = match self.storage.load_balance() {
            Ok(snapshot) => (snapshot.balance, snapshot.days_until_refill),
            Err(CoreError::DataNotFound(_)) => (0.0, 0),
            Err(err) => {
                warn!(error = %err, "balance snapshot unreadable for assistant context");
                return Err(err);
            }
        };
        Ok(AssistantContext {
            ebt_balance,
            days_until_refill,
            family_size: self.config.family_size,
            location: self.config.location.clone(),
        })
    }

    pub(crate) fn load_balance(&self) -> Result<BenefitBalance, CommandError> {
        Ok(self.storage.load_balance()?)
    }

    /// Persists the config and re-applies the settings that live outside it.
    pub(crate) fn persist_config(&mut self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        output::apply_config(&self.config);
        self.assistant = AssistantService::new(latency_for(&self.config));
        self.formatter = LocaleFormatter::new(&self.config.locale);
        Ok(())
    }

    /// Points storage at the directory the current config resolves to.
    pub(crate) fn reopen_storage(&mut self) -> CommandResult {
        let data_dir = paths::data_dir(&self.config);
        if data_dir != self.storage.data_dir() {
            info!(data_dir = %data_dir.display(), "switching data directory");
            self.storage = JsonOasisStorage::new(data_dir)?;
        }
        Ok(())
    }
}

fn latency_for(config: &Config) -> ResponseLatency {
    ResponseLatency::from_millis(
        config.assistant.matched_delay_ms,
        config.assistant.fallback_delay_ms,
    )
}

#[cfg(test)]
pub(crate) fn test_context(base: &std::path::Path) -> ShellContext {
    use chrono::{TimeZone, Utc};
    use oasis_core::time::FixedClock;

    let config_manager =
        ConfigManager::with_base_dir(base.to_path_buf()).expect("config manager");
    let mut config = Config::default();
    config.assistant.matched_delay_ms = 0;
    config.assistant.fallback_delay_ms = 0;
    config.ui_color_enabled = false;
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 11, 5, 12, 0, 0).unwrap());
    ShellContext::build(
        CliMode::Script,
        config_manager,
        config,
        base.join("data"),
        Box::new(clock),
    )
    .expect("shell context")
}

#[cfg(test)]
pub(crate) fn process_script(context: &mut ShellContext, lines: &[&str]) {
    for line in lines {
        match crate::cli::shell::handle_line(context, line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
}
