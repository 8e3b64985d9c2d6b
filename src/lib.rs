#![doc(test(attr(deny(warnings))))]

//! Budget Engine offers the projection, funding, and rollup primitives that
//! power budgeting dashboards: debt amortization forecasts, savings-goal
//! health, and per-category budget aggregation.

pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Engine tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
