//! oasis-config
//!
//! User preferences for Oasis: display locale and currency, household details
//! handed to ZENO, assistant reply latency and where snapshots are stored.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AssistantSettings, Config};
