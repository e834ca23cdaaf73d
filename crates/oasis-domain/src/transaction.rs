//! EBT card activity recorded against a benefit balance.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// A single card movement. The sign of `amount` encodes direction:
/// purchases are negative and deposits positive in recorded history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub merchant: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn purchase(
        id: impl Into<String>,
        date: NaiveDate,
        merchant: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            merchant: merchant.into(),
            amount: -amount.abs(),
            kind: TransactionKind::Purchase,
        }
    }

    pub fn deposit(
        id: impl Into<String>,
        date: NaiveDate,
        merchant: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            merchant: merchant.into(),
            amount: amount.abs(),
            kind: TransactionKind::Deposit,
        }
    }

    pub fn is_purchase(&self) -> bool {
        matches!(self.kind, TransactionKind::Purchase)
    }

    /// Magnitude of the movement regardless of its recorded sign.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {} [{}]", self.date, self.merchant, self.kind)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Direction of a card movement.
pub enum TransactionKind {
    Purchase,
    Deposit,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Purchase => "Purchase",
            TransactionKind::Deposit => "Deposit",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_normalize_sign() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        let purchase = Transaction::purchase("1", date, "Kroger #2891", 45.67);
        let deposit = Transaction::deposit("2", date, "SNAP Benefits Deposit", -234.0);

        assert_eq!(purchase.amount, -45.67);
        assert!(purchase.is_purchase());
        assert_eq!(deposit.amount, 234.0);
        assert!(!deposit.is_purchase());
        assert_eq!(purchase.magnitude(), 45.67);
    }

    #[test]
    fn kind_serializes_as_type_field() {
        let json = r#"{"id":"5","date":"2025-11-01","merchant":"SNAP Benefits Deposit","amount":234.0,"type":"deposit"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.kind, TransactionKind::Deposit);

        let encoded = serde_json::to_string(&txn).unwrap();
        assert!(encoded.contains("\"type\":\"deposit\""));
    }
}
