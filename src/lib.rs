#![doc(test(attr(deny(warnings))))]

//! Pizza Order implements a validated order form: a declarative schema for
//! the customer's name and pizza size, topping selection from a fixed
//! catalog, and a submit gate that stays in sync with every change.

pub mod cli;
pub mod config;
pub mod errors;
pub mod order;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pizza Order tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
