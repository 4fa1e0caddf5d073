//! Core logic for the console recharge panel and settings forms:
//! settings diff/batch-persist against the key/value options API, and
//! preset pricing with currency projection.

pub mod config;
pub mod options;
pub mod pricing;
pub mod rebate;
pub mod telemetry;
pub mod view;
