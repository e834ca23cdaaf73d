//! Benefit budgeting: daily allowance, spending pace and run-out projection.

use chrono::{Days, NaiveDate};
use tracing::warn;

use oasis_domain::{BenefitBalance, MealPlan, Transaction};

use crate::CoreError;

/// Figures shown on the balance screen, computed from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOverview {
    pub balance: f64,
    pub daily_budget: f64,
    pub average_daily_spending: f64,
    /// `None` when no purchases exist to project from.
    pub run_out_date: Option<NaiveDate>,
    pub next_refill_date: NaiveDate,
    pub over_budget: bool,
    /// How much more per day is being spent than recommended; zero when on budget.
    pub daily_overspend: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanSummary {
    pub day_totals: Vec<(String, f64)>,
    pub total: f64,
    pub average_per_day: f64,
}

impl MealPlanSummary {
    pub fn fits(&self, daily_budget: f64) -> bool {
        self.average_per_day <= daily_budget
    }
}

pub struct BudgetService;

impl BudgetService {
    /// Recommended spend per day so the balance lasts until the next refill.
    pub fn daily_budget(balance: f64, days_until_refill: i64) -> Result<f64, CoreError> {
        ensure_balance(balance)?;
        if days_until_refill <= 0 {
            warn!(days_until_refill, "rejecting daily budget for non-positive refill window");
            return Err(CoreError::InvalidRefillWindow(days_until_refill));
        }
        Ok(balance / days_until_refill as f64)
    }

    /// Mean absolute amount of purchase entries; deposits are ignored.
    pub fn average_daily_spending(transactions: &[Transaction]) -> f64 {
        let (total, count) = transactions
            .iter()
            .filter(|txn| txn.is_purchase())
            .fold((0.0, 0usize), |(total, count), txn| {
                (total + txn.magnitude(), count + 1)
            });
        if count == 0 {
            return 0.0;
        }
        total / count as f64
    }

    /// Date the balance runs out at the given pace: `floor(balance / average)` days after `today`.
    pub fn projected_run_out_date(
        balance: f64,
        average_daily_spending: f64,
        today: NaiveDate,
    ) -> Result<NaiveDate, CoreError> {
        ensure_balance(balance)?;
        if !average_daily_spending.is_finite() || average_daily_spending <= 0.0 {
            warn!(
                average_daily_spending,
                "rejecting run-out projection for non-positive spending"
            );
            return Err(CoreError::NoSpendingProjection(average_daily_spending));
        }
        let days = (balance / average_daily_spending).floor();
        if days > u32::MAX as f64 {
            return Err(CoreError::NoSpendingProjection(average_daily_spending));
        }
        today
            .checked_add_days(Days::new(days as u64))
            .ok_or(CoreError::NoSpendingProjection(average_daily_spending))
    }

    pub fn overview(snapshot: &BenefitBalance, today: NaiveDate) -> Result<BudgetOverview, CoreError> {
        let daily_budget = Self::daily_budget(snapshot.balance, snapshot.days_until_refill)?;
        let average_daily_spending = Self::average_daily_spending(&snapshot.transactions);
        let run_out_date = if average_daily_spending > 0.0 {
            Self::projected_run_out_date(snapshot.balance, average_daily_spending, today).ok()
        } else {
            None
        };
        let next_refill_date = today
            .checked_add_days(Days::new(snapshot.days_until_refill as u64))
            .ok_or(CoreError::InvalidRefillWindow(snapshot.days_until_refill))?;
        let over_budget = average_daily_spending > daily_budget;
        Ok(BudgetOverview {
            balance: snapshot.balance,
            daily_budget,
            average_daily_spending,
            run_out_date,
            next_refill_date,
            over_budget,
            daily_overspend: (average_daily_spending - daily_budget).max(0.0),
        })
    }

    pub fn meal_plan_summary(plan: &MealPlan) -> MealPlanSummary {
        let day_totals: Vec<(String, f64)> = plan
            .days
            .iter()
            .map(|day| (day.day.clone(), day.total()))
            .collect();
        let total: f64 = day_totals.iter().map(|(_, amount)| amount).sum();
        let average_per_day = if day_totals.is_empty() {
            0.0
        } else {
            total / day_totals.len() as f64
        };
        MealPlanSummary {
            day_totals,
            total,
            average_per_day,
        }
    }
}

fn ensure_balance(balance: f64) -> Result<(), CoreError> {
    if balance.is_finite() && balance >= 0.0 {
        Ok(())
    } else {
        warn!(balance, "rejecting invalid balance");
        Err(CoreError::InvalidBalance(balance))
    }
}
