//! CLI argument definitions for `CreditTally`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use credit_tally::config::ConfigOverrides;
use credit_tally::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `sheet_file`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Record completed credits for one field.
    ///
    /// Use `fields` to list the field keys. An empty value clears the field.
    Set {
        /// Field key (e.g., `hiyoshi12x`, `english`, `amc_related`)
        #[arg(value_name = "FIELD")]
        field: String,
        /// Completed credits
        #[arg(value_name = "CREDITS")]
        credits: String,
    },
    /// Clear one field.
    Unset {
        /// Field key
        #[arg(value_name = "FIELD")]
        field: String,
    },
    /// Choose the department, grade, or second language.
    ///
    /// Omit VALUE (or pass `none`) to clear the selector.
    Select {
        /// Selector: department, grade, or language
        #[arg(value_name = "SELECTOR")]
        selector: String,
        /// Department code, grade 1-4, or language code
        #[arg(value_name = "VALUE")]
        value: Option<String>,
    },
    /// List field keys, their labels, and whether they count right now.
    Fields,
    /// Print the earned-versus-required table.
    Show,
    /// Write the earned-versus-required table to a report file.
    Report {
        /// Output file path (optional; defaults to `credit_report.<ext>` in the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md), html, or text (txt)
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
    /// Clear every selector and field.
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "credittally",
    about = "Tally completed credits against graduation requirements",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config sheet file
    #[arg(long = "config-sheet-file", value_name = "PATH")]
    pub config_sheet_file: Option<PathBuf>,

    /// Override config sheet file (short form)
    #[arg(long = "sheet", visible_alias = "sheet-file", value_name = "PATH")]
    pub sheet: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--sheet`) take precedence over long-form flags
    /// (e.g., `--config-sheet-file`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            sheet_file: path_string(self.sheet.as_ref().or(self.config_sheet_file.as_ref())),
            reports_dir: path_string(
                self.reports_dir
                    .as_ref()
                    .or(self.config_reports_dir.as_ref()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_sheet_file: None,
            sheet: None,
            config_reports_dir: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Show).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.sheet_file.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli(Command::Show);
        cli.config_level = Some(LogLevelArg::Info);
        cli.config_sheet_file = Some(PathBuf::from("/long/sheet.toml"));
        cli.sheet = Some(PathBuf::from("/short/sheet.toml"));
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("info".to_string()));
        assert_eq!(overrides.sheet_file, Some("/short/sheet.toml".to_string()));
        assert_eq!(overrides.reports_dir, Some("/long/reports".to_string()));
    }

    #[test]
    fn test_parse_select_without_value() {
        let cli = Cli::try_parse_from(["credittally", "select", "language"]).expect("parse");
        match cli.command {
            Command::Select { selector, value } => {
                assert_eq!(selector, "language");
                assert!(value.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_sheet_flag() {
        let cli = Cli::try_parse_from(["credittally", "--sheet", "/tmp/s.toml", "set", "math", "4"])
            .expect("parse");
        assert_eq!(cli.sheet, Some(PathBuf::from("/tmp/s.toml")));
        assert!(matches!(cli.command, Command::Set { .. }));
    }

    #[test]
    fn test_parse_sheet_file_alias() {
        let cli = Cli::try_parse_from(["credittally", "--sheet-file", "/tmp/a.toml", "show"])
            .expect("parse");
        assert_eq!(cli.sheet, Some(PathBuf::from("/tmp/a.toml")));
        assert_eq!(
            cli.to_config_overrides().sheet_file,
            Some("/tmp/a.toml".to_string())
        );
    }
}
