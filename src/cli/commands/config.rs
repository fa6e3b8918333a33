//! Config command handler

use crate::args::ConfigSubcommand;
use crate::commands::{confirm, fail};
use credit_tally::config::Config;
use credit_tally::info;

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Print one value, or the whole configuration when no key is given
pub fn handle_config_get(config: &Config, key: Option<&str>) {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => println!("{value}"),
            None => fail(&format!("Unknown config key: '{k}'")),
        },
        None => {
            println!("\n=== Configuration ===");
            println!("({})\n", Config::get_config_file_path().display());
            print!("{config}");
        }
    }
}

fn persist(config: &Config) {
    if let Err(e) = config.save() {
        fail(&format!("Failed to save config: {e}"));
    }
}

/// Set a value and save the config file
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        fail(&e);
    }
    persist(config);
    info!("Config key '{key}' set");
    println!("✓ Set {key} = {value}");
}

/// Restore one value from the defaults and save the config file
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        fail(&e);
    }
    persist(config);
    println!("✓ Reset {key} to default");
}

/// Delete the config file after confirmation
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    if !confirm("Are you sure you want to reset config to defaults?") {
        println!("✗ Reset cancelled");
        return;
    }

    if let Err(e) = Config::reset() {
        fail(&format!("Failed to remove config file: {e}"));
    }
    println!("✓ Config reset to defaults");
}
