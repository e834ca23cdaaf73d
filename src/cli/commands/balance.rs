use oasis_core::BudgetService;
use oasis_domain::Transaction;

use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const RECENT_TRANSACTIONS: usize = 5;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "balance",
        "Show EBT balance, spending pace and recent transactions",
        "balance",
        cmd_balance,
    )]
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.load_balance()?;
    let overview = BudgetService::overview(&snapshot, context.clock.today())?;

    output::section("EBT Balance");
    output::fields(&[
        ("Available", context.money(overview.balance)),
        ("Refill", context.countdown(overview.next_refill_date)),
        (
            "Last deposit",
            format!(
                "{} on {}",
                context.money(snapshot.last_deposit.amount),
                context.date(snapshot.last_deposit.date)
            ),
        ),
    ]);

    output::section("Budget Insights");
    output::fields(&[
        ("Daily budget", context.per_day(overview.daily_budget)),
        (
            "Average spending",
            context.per_day(overview.average_daily_spending),
        ),
        (
            "Runs out",
            overview
                .run_out_date
                .map(|date| context.countdown(date))
                .unwrap_or_else(|| "not enough spending history".to_string()),
        ),
    ]);
    if overview.over_budget {
        output::warning(format!(
            "You're spending {} more per day than recommended",
            context.money(overview.daily_overspend)
        ));
    } else {
        output::success("You're on track to make it to your next refill.");
    }

    output::section("Recent Transactions");
    if snapshot.transactions.is_empty() {
        output::line("  No transactions yet.");
    }
    for txn in snapshot.transactions.iter().take(RECENT_TRANSACTIONS) {
        output::line(transaction_row(context, txn));
    }

    output::hint(format!(
        "Last updated {}",
        snapshot.last_checked.format("%Y-%m-%d %H:%M UTC")
    ));
    Ok(())
}

fn transaction_row(context: &ShellContext, txn: &Transaction) -> String {
    let sign = if txn.is_purchase() { "-" } else { "+" };
    format!(
        "  {:<13} {:<28} {}{}",
        context.date(txn.date),
        txn.merchant,
        sign,
        context.money(txn.magnitude())
    )
}
