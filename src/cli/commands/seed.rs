//! Installs the bundled demo snapshots so a fresh install has something to show.

use oasis_core::{storage::OasisStorage, CoreError};
use oasis_domain::{BenefitBalance, FoodPantry, MealPlan, ShutdownRisk};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const DEMO_BALANCE: &str = include_str!("../../../data/demo/balance.json");
const DEMO_PANTRIES: &str = include_str!("../../../data/demo/pantries.json");
const DEMO_SHUTDOWN: &str = include_str!("../../../data/demo/shutdown.json");
const DEMO_MEAL_PLAN: &str = include_str!("../../../data/demo/meal_plan.json");

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "seed",
        "Install demo data for Jackson, TN (keeps existing files unless --force)",
        "seed [--force]",
        cmd_seed,
    )]
}

fn cmd_seed(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let force = match args {
        [] => false,
        [flag] if *flag == "--force" => true,
        _ => return Err(CommandError::InvalidArguments("Usage: seed [--force]".into())),
    };

    let now = context.clock.now();
    let storage = &context.storage;
    let mut written = Vec::new();

    if force || is_missing(storage.load_balance())? {
        let mut balance: BenefitBalance = parse_demo(DEMO_BALANCE)?;
        balance.last_checked = now;
        storage.save_balance(&balance)?;
        written.push("balance");
    }
    if force || is_missing(storage.load_pantries())? {
        let pantries: Vec<FoodPantry> = parse_demo(DEMO_PANTRIES)?;
        storage.save_pantries(&pantries)?;
        written.push("pantries");
    }
    if force || is_missing(storage.load_shutdown_risk())? {
        let mut risk: ShutdownRisk = parse_demo(DEMO_SHUTDOWN)?;
        risk.last_updated = now;
        storage.save_shutdown_risk(&risk)?;
        written.push("shutdown");
    }
    if force || is_missing(storage.load_meal_plan())? {
        let plan: MealPlan = parse_demo(DEMO_MEAL_PLAN)?;
        storage.save_meal_plan(&plan)?;
        written.push("meal plan");
    }

    if written.is_empty() {
        output::info("Data already present. Use `seed --force` to overwrite it.");
    } else {
        info!(?written, force, "demo data installed");
        output::success(format!(
            "Demo data installed ({}) in {}",
            written.join(", "),
            storage.data_dir().display()
        ));
    }
    Ok(())
}

/// `true` when the snapshot does not exist yet. Unreadable snapshots are errors.
fn is_missing<T>(loaded: Result<T, CoreError>) -> Result<bool, CommandError> {
    match loaded {
        Ok(_) => Ok(false),
        Err(CoreError::DataNotFound(_)) => Ok(true),
        Err(err) => Err(err.into()),
    }
}

fn parse_demo<T: DeserializeOwned>(raw: &str) -> Result<T, CommandError> {
    serde_json::from_str(raw).map_err(|err| CoreError::Serde(err.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_demo_data_parses() {
        let balance: BenefitBalance = parse_demo(DEMO_BALANCE).unwrap();
        assert_eq!(balance.days_until_refill, 23);
        assert_eq!(balance.transactions.len(), 5);

        let pantries: Vec<FoodPantry> = parse_demo(DEMO_PANTRIES).unwrap();
        assert_eq!(pantries.len(), 5);

        let risk: ShutdownRisk = parse_demo(DEMO_SHUTDOWN).unwrap();
        assert_eq!(risk.preparation_checklist.len(), 4);

        let plan: MealPlan = parse_demo(DEMO_MEAL_PLAN).unwrap();
        assert_eq!(plan.days.len(), 3);
    }
}
