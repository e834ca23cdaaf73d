use oasis_config::ConfigManager;
use oasis_core::storage::OasisStorage;
use oasis_core::{AssistantService, CoreError};
use oasis_domain::{NavigationAction, Role};
use oasis_storage_json::BALANCE_FILE;
use tempfile::tempdir;

use crate::cli::commands::chat::command_for;
use crate::cli::context::{process_script, test_context};

#[test]
fn registry_lists_commands_in_menu_order() {
    let dir = tempdir().unwrap();
    let context = test_context(dir.path());
    let names: Vec<&str> = context.registry.names().collect();

    assert_eq!(names.first(), Some(&"balance"));
    assert_eq!(names.last(), Some(&"exit"));
    assert_eq!(names.len(), super::ROOT_COMMAND_ORDER.len());
}

#[test]
fn suggested_actions_point_at_registered_commands() {
    let dir = tempdir().unwrap();
    let context = test_context(dir.path());
    for action in [
        NavigationAction::NavigateBalance,
        NavigationAction::NavigateMap,
        NavigationAction::NavigateBudget,
        NavigationAction::NavigateShutdown,
    ] {
        assert!(context.command(command_for(action)).is_some());
    }
}

#[test]
fn seed_installs_demo_data_once() {
    let dir = tempdir().unwrap();
    let mut context = test_context(dir.path());

    process_script(&mut context, &["seed"]);
    let balance = context.storage.load_balance().expect("balance seeded");
    assert_eq!(balance.last_checked, context.clock.now());
    assert_eq!(context.storage.load_pantries().unwrap().len(), 5);

    let mut edited = balance.clone();
    edited.balance = 10.0;
    context.storage.save_balance(&edited).unwrap();

    process_script(&mut context, &["seed"]);
    assert_eq!(context.storage.load_balance().unwrap().balance, 10.0);

    process_script(&mut context, &["seed --force"]);
    assert_eq!(context.storage.load_balance().unwrap().balance, 127.43);
}

#[test]
fn checklist_toggle_is_persisted() {
    let dir = tempdir().unwrap();
    let mut context = test_context(dir.path());
    process_script(&mut context, &["seed", "checklist 1"]);

    let risk = context.storage.load_shutdown_risk().unwrap();
    let first = &risk.preparation_checklist[0];
    assert_eq!(first.id, "1");
    assert!(first.completed);

    process_script(&mut context, &["checklist 1", "checklist 99"]);
    let risk = context.storage.load_shutdown_risk().unwrap();
    assert!(!risk.preparation_checklist[0].completed);
}

#[test]
fn ask_appends_question_and_reply() {
    let dir = tempdir().unwrap();
    let mut context = test_context(dir.path());
    assert_eq!(context.conversation.len(), 1);

    process_script(&mut context, &["ask What's my balance?"]);
    assert_eq!(context.conversation.len(), 3);
    let messages = context.conversation.messages();
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "What's my balance?");
    assert_eq!(messages[2].role, Role::Assistant);
    assert!(messages[2].content.contains("EBT balance"));

    process_script(&mut context, &["ask", "ask    "]);
    assert_eq!(context.conversation.len(), 3);

    process_script(&mut context, &["ask 3"]);
    assert_eq!(
        context.conversation.messages()[3].content,
        "Help me budget my benefits"
    );
}

#[test]
fn ask_without_balance_uses_zeroed_context() {
    let dir = tempdir().unwrap();
    let mut context = test_context(dir.path());

    let assistant_context = context.assistant_context().unwrap();
    assert_eq!(assistant_context.ebt_balance, 0.0);
    assert_eq!(assistant_context.days_until_refill, 0);

    process_script(&mut context, &["ask hello"]);
    assert_eq!(context.conversation.messages()[2].role, Role::Assistant);
    assert_ne!(
        context.conversation.messages()[2].content,
        AssistantService::connection_error_reply().content
    );
}

#[test]
fn ask_with_corrupt_balance_records_apology() {
    let dir = tempdir().unwrap();
    let mut context = test_context(dir.path());
    std::fs::write(context.storage.data_dir().join(BALANCE_FILE), "{ not json").unwrap();

    assert!(matches!(
        context.assistant_context(),
        Err(CoreError::Serde(_))
    ));

    process_script(&mut context, &["ask What's my balance?"]);
    let messages = context.conversation.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].content, "What's my balance?");
    assert_eq!(
        messages[2].content,
        AssistantService::connection_error_reply().content
    );

    process_script(&mut context, &["ask   "]);
    assert_eq!(context.conversation.len(), 3);
}

#[test]
fn config_set_persists_and_rejects_bad_values() {
    let dir = tempdir().unwrap();
    let mut context = test_context(dir.path());

    process_script(
        &mut context,
        &["config set location \"Memphis, TN\"", "config set family_size 0"],
    );
    assert_eq!(context.config.location, "Memphis, TN");
    assert_eq!(context.config.family_size, 1);

    let stored = ConfigManager::with_base_dir(dir.path().to_path_buf())
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(stored.location, "Memphis, TN");
    assert_eq!(context.assistant_context().unwrap().location, "Memphis, TN");
}

#[test]
fn config_set_data_root_reopens_storage() {
    let dir = tempdir().unwrap();
    let mut context = test_context(dir.path());
    let elsewhere = dir.path().join("elsewhere");

    let line = format!("config set data_root \"{}\"", elsewhere.display());
    process_script(&mut context, &[line.as_str()]);

    if std::env::var_os(crate::utils::paths::HOME_ENV).is_none() {
        assert_eq!(context.storage.data_dir(), elsewhere.as_path());
    }
}

#[test]
fn exit_stops_the_script() {
    let dir = tempdir().unwrap();
    let mut context = test_context(dir.path());

    process_script(&mut context, &["balanse", "exit", "ask hello"]);
    assert!(!context.running);
    assert_eq!(context.conversation.len(), 1);
}
