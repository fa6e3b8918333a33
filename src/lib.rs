//! Shared library for `CreditTally`
//! Contains the credit aggregation core and the collaborators used by the CLI

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;
