//! Core module: credit aggregation and the collaborators around it

pub mod aggregator;
pub mod comparison;
pub mod config;
pub mod models;
pub mod report;
pub mod sheet;

pub use aggregator::{compute_totals, Totals};
pub use models::lookup_requirement;

/// Returns the current version of the `CreditTally` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
