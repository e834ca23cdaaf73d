use oasis_core::{storage::OasisStorage, BudgetService, CoreError};
use oasis_domain::MealPlan;

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const SAVING_TIPS: &[(&str, &str)] = &[
    (
        "Shop Store Brands",
        "Save 30-40% by choosing store brands over name brands",
    ),
    (
        "Buy in Bulk",
        "Rice, beans, pasta cost less per serving in larger quantities",
    ),
    (
        "Plan Your Meals",
        "Planning prevents impulse purchases and food waste",
    ),
    (
        "Use Your Freezer",
        "Buy meat on sale and freeze for later use",
    ),
    (
        "Stock Up on Sales",
        "Buy non-perishables when they're on sale",
    ),
    (
        "Check Unit Prices",
        "Bigger isn't always cheaper - compare per-ounce costs",
    ),
];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "budget",
        "Show the daily budget, a low-cost meal plan and saving tips",
        "budget",
        cmd_budget,
    )]
}

fn cmd_budget(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.load_balance()?;
    let daily = BudgetService::daily_budget(snapshot.balance, snapshot.days_until_refill)?;

    output::section("Your Daily Food Budget");
    output::line(format!(
        "  {} for {} days ({} left)",
        context.per_day(daily),
        snapshot.days_until_refill,
        context.money(snapshot.balance)
    ));

    match load_meal_plan(context)? {
        Some(plan) if !plan.days.is_empty() => print_meal_plan(context, &plan, daily),
        _ => output::hint("No meal plan saved yet. Run `seed` for a sample plan."),
    }

    output::section("Money-Saving Tips");
    for (title, description) in SAVING_TIPS {
        output::line(format!("  * {title}: {description}"));
    }
    Ok(())
}

fn load_meal_plan(context: &ShellContext) -> Result<Option<MealPlan>, CommandError> {
    match context.storage.load_meal_plan() {
        Ok(plan) => Ok(Some(plan)),
        Err(CoreError::DataNotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn print_meal_plan(context: &ShellContext, plan: &MealPlan, daily: f64) {
    let summary = BudgetService::meal_plan_summary(plan);

    output::section(format!("{}-Day Meal Plan", plan.days.len()));
    for (day, (_, total)) in plan.days.iter().zip(&summary.day_totals) {
        output::line(format!("  {} ({})", day.day, context.money(*total)));
        for meal in &day.meals {
            output::line(format!(
                "    {:<10} {:<30} {}",
                meal.name,
                meal.items,
                context.money(meal.cost)
            ));
        }
    }

    output::fields(&[
        ("Plan total", context.money(summary.total)),
        (
            "Average per day",
            context.money(summary.average_per_day),
        ),
    ]);
    if summary.fits(daily) {
        output::success("This plan fits within your daily budget.");
    } else {
        output::warning("This plan costs more per day than your budget allows.");
    }
}
