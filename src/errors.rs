use oasis_config::ConfigError;
use oasis_core::CoreError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Unified error type for core/domain/storage/config layers.
#[derive(Error, Debug)]
pub enum OasisError {
    #[error("No data available: {0}")]
    DataNotFound(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] OasisError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CoreError> for OasisError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DataNotFound(path) => OasisError::DataNotFound(path),
            CoreError::PantryNotFound(id) => {
                OasisError::NotFound(format!("no food pantry with id `{id}`"))
            }
            CoreError::ChecklistItemNotFound(id) => {
                OasisError::NotFound(format!("no checklist item with id `{id}`"))
            }
            err @ (CoreError::InvalidRefillWindow(_)
            | CoreError::InvalidBalance(_)
            | CoreError::NoSpendingProjection(_)) => OasisError::InvalidInput(err.to_string()),
            CoreError::Validation(message) => OasisError::InvalidInput(message),
            CoreError::Serde(message) => OasisError::StorageError(message),
            CoreError::Io(err) => OasisError::StorageError(err.to_string()),
        }
    }
}

impl From<ConfigError> for OasisError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => OasisError::StorageError(io.to_string()),
            ConfigError::Serde(message) => OasisError::ConfigError(message),
            err @ (ConfigError::UnknownKey(_) | ConfigError::InvalidValue { .. }) => {
                OasisError::InvalidInput(err.to_string())
            }
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(OasisError::from(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(OasisError::from(err))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Input(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_user_facing_variants() {
        assert!(matches!(
            OasisError::from(CoreError::DataNotFound("balance.json".into())),
            OasisError::DataNotFound(_)
        ));
        assert!(matches!(
            OasisError::from(CoreError::PantryNotFound("9".into())),
            OasisError::NotFound(_)
        ));
        let invalid = OasisError::from(CoreError::InvalidRefillWindow(0));
        assert!(invalid.to_string().contains("Days until refill must be positive"));
    }

    #[test]
    fn config_errors_map_to_user_facing_variants() {
        assert!(matches!(
            OasisError::from(ConfigError::UnknownKey("theme".into())),
            OasisError::InvalidInput(_)
        ));
        assert!(matches!(
            CliError::from(ConfigError::Serde("bad".into())),
            CliError::Core(OasisError::ConfigError(_))
        ));
    }
}
