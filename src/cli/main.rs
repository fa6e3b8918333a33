//! Command-line interface entry point for `CreditTally`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use credit_tally::config::Config;
use credit_tally::info;
use credit_tally::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path =
        (!config.logging.file.is_empty()).then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let sheet_path = PathBuf::from(&config.paths.sheet_file);

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Set { field, credits } => commands::sheet::run_set(&sheet_path, &field, &credits),
        Command::Unset { field } => commands::sheet::run_unset(&sheet_path, &field),
        Command::Select { selector, value } => {
            commands::sheet::run_select(&sheet_path, &selector, value.as_deref());
        }
        Command::Fields => commands::sheet::run_fields(&sheet_path),
        Command::Show => commands::sheet::run_show(&sheet_path),
        Command::Report { output, format } => {
            commands::report::run(&sheet_path, output.as_deref(), &format, &config);
        }
        Command::Clear { yes } => commands::sheet::run_clear(&sheet_path, yes),
    }
}
