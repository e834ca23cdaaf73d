use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Days until refill must be positive, got {0}")]
    InvalidRefillWindow(i64),
    #[error("Balance must be a finite, non-negative amount, got {0}")]
    InvalidBalance(f64),
    #[error("No run-out projection possible for average daily spending of {0}")]
    NoSpendingProjection(f64),
    #[error("Food pantry not found: {0}")]
    PantryNotFound(String),
    #[error("Checklist item not found: {0}")]
    ChecklistItemNotFound(String),
    #[error("Data not found: {0}")]
    DataNotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
