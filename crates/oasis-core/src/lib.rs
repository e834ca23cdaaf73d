//! oasis-core
//!
//! Business logic and services for Oasis.
//! Depends on oasis-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod assistant_service;
pub mod budget_service;
pub mod conversation_service;
pub mod error;
pub mod format;
pub mod pantry_service;
pub mod shutdown_service;
pub mod storage;
pub mod time;

pub use assistant_service::*;
pub use budget_service::*;
pub use conversation_service::*;
pub use error::CoreError;
pub use pantry_service::*;
pub use shutdown_service::*;
pub use time::Clock;
