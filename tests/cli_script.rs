mod common;

use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn script_mode_walks_the_demo_data() {
    let home = common::setup_home();

    common::cli(&home)
        .write_stdin("seed\nbalance\npantries walk-in\nshutdown\nexit\n")
        .assert()
        .success()
        .stdout(contains("Demo data installed"))
        .stdout(contains("$127.43"))
        .stdout(contains("Jackson Dream Center"))
        .stdout(contains("St. Mary's Catholic Church").not())
        .stdout(contains("Shutdown Risk"));

    assert!(home.join("data").join("balance.json").exists());
}

#[test]
fn ask_prints_zeno_reply() {
    let home = common::setup_home();

    common::cli(&home)
        .write_stdin("ask What's my balance?\nchat\nexit\n")
        .assert()
        .success()
        .stdout(contains("ZENO:"))
        .stdout(contains("check your EBT balance"))
        .stdout(contains("What's my balance?"));
}

#[test]
fn typo_suggests_closest_command() {
    let home = common::setup_home();

    common::cli(&home)
        .write_stdin("balanse\nexit\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `balance`?"));
}

#[test]
fn missing_snapshot_points_at_seed() {
    let home = common::setup_home();

    common::cli(&home)
        .write_stdin("balance\nexit\n")
        .assert()
        .success()
        .stdout(contains("Run `seed`"));
}

#[test]
fn config_set_is_saved_under_home() {
    let home = common::setup_home();

    common::cli(&home)
        .write_stdin("config set family_size 3\nconfig show\nexit\n")
        .assert()
        .success()
        .stdout(contains("family_size"));

    let json = std::fs::read_to_string(home.join("config").join("config.json")).unwrap();
    assert!(json.contains("\"family_size\": 3"));
}
