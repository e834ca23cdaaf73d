//! oasis-domain
//!
//! Pure domain models (benefit balance, transactions, assistant replies, pantries, shutdown risk).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod assistant;
pub mod balance;
pub mod common;
pub mod conversation;
pub mod meal_plan;
pub mod pantry;
pub mod shutdown;
pub mod transaction;

pub use assistant::*;
pub use balance::*;
pub use common::*;
pub use conversation::*;
pub use meal_plan::*;
pub use pantry::*;
pub use shutdown::*;
pub use transaction::*;
