//! Report command handler
//!
//! Writes the earned-versus-required comparison to a file in the requested
//! format.

use crate::commands::sheet::load_or_exit;
use credit_tally::config::Config;
use credit_tally::core::report::{ReportContext, ReportFormat};
use credit_tally::{error, info, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Base name for reports written to the reports directory
const DEFAULT_REPORT_STEM: &str = "credit_report";

/// Run the report command.
///
/// # Arguments
/// * `sheet_path` - Sheet to report on
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html, text)
/// * `config` - Configuration containing the default reports directory
pub fn run(sheet_path: &Path, output_file: Option<&Path>, format_str: &str, config: &Config) {
    match generate_report(sheet_path, output_file, format_str, config) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            info!("Report exported to: {}", path.display());
        }
        Err(err) => {
            error!("Report generation failed: {err}");
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

/// Where the report goes when `-o` is not given
#[must_use]
pub fn default_output_path(config: &Config, format: ReportFormat) -> PathBuf {
    PathBuf::from(&config.paths.reports_dir)
        .join(format!("{DEFAULT_REPORT_STEM}.{}", format.extension()))
}

fn generate_report(
    sheet_path: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("{e}. Use: markdown, html, or text"))?;

    let sheet = load_or_exit(sheet_path);
    let ctx = ReportContext::new(&sheet);

    let output_path =
        output_file.map_or_else(|| default_output_path(config, format), Path::to_path_buf);

    format
        .reporter()
        .generate(&ctx, &output_path)
        .map_err(|e| format!("Failed to generate {format} report: {e}"))?;

    if ctx.fields.is_empty() {
        warn!("The sheet is empty; the report shows zero credits");
    }

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let mut config = Config::default();
        config.paths.reports_dir = "/reports".to_string();
        assert_eq!(
            default_output_path(&config, ReportFormat::Markdown),
            PathBuf::from("/reports/credit_report.md")
        );
    }

    #[test]
    fn test_unknown_format_rejected_before_loading() {
        let config = Config::default();
        let err = generate_report(Path::new("/nonexistent/sheet.toml"), None, "pdf", &config)
            .unwrap_err();
        assert!(err.contains("Unknown report format"));
    }
}
