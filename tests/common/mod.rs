use std::{path::PathBuf, sync::Mutex};

use assert_cmd::Command;
use oasis::config::{Config, ConfigManager};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated Oasis home with instant assistant replies and colors off.
pub fn setup_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let manager = ConfigManager::with_base_dir(base.clone()).expect("config manager");
    let mut config = Config::default();
    config.ui_color_enabled = false;
    config.assistant.matched_delay_ms = 0;
    config.assistant.fallback_delay_ms = 0;
    manager.save(&config).expect("write test config");

    base
}

/// Script-mode CLI bound to `home`.
pub fn cli(home: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("oasis_cli").expect("oasis_cli binary");
    cmd.env("OASIS_CLI_SCRIPT", "1")
        .env("OASIS_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}
