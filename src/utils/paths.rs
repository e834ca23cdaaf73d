use dirs::home_dir;
use std::{env, path::PathBuf};

use oasis_config::Config;

pub const HOME_ENV: &str = "OASIS_HOME";

const DEFAULT_DIR_NAME: &str = ".oasis";
const DATA_DIR: &str = "data";

/// Root for the config directory: `OASIS_HOME`, else `~/.oasis`.
pub fn app_home() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the JSON snapshots. `OASIS_HOME` wins over the configured
/// `data_root`, which in turn wins over the platform data directory.
pub fn data_dir(config: &Config) -> PathBuf {
    match env::var_os(HOME_ENV) {
        Some(custom) => PathBuf::from(custom).join(DATA_DIR),
        None => config.resolve_data_root(),
    }
}
