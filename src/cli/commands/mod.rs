//! CLI command handlers for `CreditTally`.
//!
//! Each command group is implemented in its own submodule.

pub mod config;
pub mod report;
pub mod sheet;

use std::io::{self, Write};

/// Ask a yes/no question on stdin. Anything but `y`/`yes` counts as no.
pub fn confirm(question: &str) -> bool {
    print!("{question} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    if io::stdin().read_line(&mut response).is_err() {
        return false;
    }
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

/// Print a failure and exit with status 1
pub fn fail(message: &str) -> ! {
    credit_tally::error!("{message}");
    eprintln!("✗ {message}");
    std::process::exit(1);
}
