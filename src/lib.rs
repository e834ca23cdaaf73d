#![doc(test(attr(deny(warnings))))]

//! Oasis helps benefit recipients track their EBT balance, stretch it to the
//! next refill, find nearby food pantries, and prepare for shutdown-related
//! benefit disruptions, with the ZENO assistant answering common questions.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod utils;

pub use oasis_config as config;
pub use oasis_core as core;
pub use oasis_domain as domain;
pub use oasis_storage_json as storage;

/// Sets up logging for the process. Safe to call more than once.
pub fn init() {
    utils::init_tracing();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
