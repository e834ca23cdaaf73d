//! Benefit balance snapshot as reported by the EBT card lookup.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Most recent benefit deposit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deposit {
    pub amount: f64,
    pub date: NaiveDate,
}

/// Point-in-time view of a benefit account. Snapshots are replaced whole,
/// never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenefitBalance {
    pub balance: f64,
    pub last_deposit: Deposit,
    /// Signed so that malformed snapshots stay representable; the budget
    /// calculator rejects non-positive values.
    pub days_until_refill: i64,
    /// Ordered most recent first.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub last_checked: DateTime<Utc>,
}

impl BenefitBalance {
    pub fn latest_transaction(&self) -> Option<&Transaction> {
        self.transactions.first()
    }
}
