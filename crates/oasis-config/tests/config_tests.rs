use oasis_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert_eq!(cfg.assistant.matched_delay_ms, 800);
    assert_eq!(cfg.assistant.fallback_delay_ms, 1000);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.location = "Memphis, TN".to_string();
    cfg.family_size = 4;
    cfg.assistant.matched_delay_ms = 0;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
    assert!(manager.config_path().starts_with(dir.path()));
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"locale":"en-US","currency":"USD"}"#).expect("write");

    let loaded = ConfigManager::new(path).load().expect("load");
    assert_eq!(loaded.assistant, Default::default());
    assert_eq!(loaded.location, "Jackson, TN");
    assert!(loaded.ui_color_enabled);
}

#[test]
fn set_value_validates_input() {
    let mut cfg = Config::default();

    cfg.set_value("assistant.matched_delay_ms", "0").expect("set delay");
    assert_eq!(cfg.assistant.matched_delay_ms, 0);
    cfg.set_value("currency", "usd").expect("set currency");
    assert_eq!(cfg.get_value("currency").unwrap(), "USD");

    assert!(matches!(
        cfg.set_value("family_size", "0"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set_value("family_size", "many"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set_value("theme", "dark"),
        Err(ConfigError::UnknownKey(_))
    ));
}

#[test]
fn every_listed_key_is_readable() {
    let cfg = Config::default();
    for key in Config::KEYS {
        assert!(cfg.get_value(key).is_ok(), "{key} not readable");
    }
}
