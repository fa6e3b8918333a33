//! HTML report generator
//!
//! Renders a self-contained HTML page (embedded CSS, no scripts) from the
//! askama template in `templates/report.html`.

use crate::core::comparison::ComparisonRow;
use crate::core::report::{credits_or_blank, FieldLine, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

/// One comparison row with display strings precomputed
struct HtmlRow {
    label: &'static str,
    earned: u32,
    required: String,
    remaining: String,
    status: &'static str,
}

impl From<&ComparisonRow> for HtmlRow {
    fn from(row: &ComparisonRow) -> Self {
        let status = match row.is_met() {
            Some(true) => "met",
            Some(false) => "unmet",
            None => "unknown",
        };
        Self {
            label: row.label,
            earned: row.earned,
            required: credits_or_blank(row.required),
            remaining: credits_or_blank(row.remaining()),
            status,
        }
    }
}

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReport<'a> {
    department: String,
    grade: String,
    language: &'a str,
    rows: Vec<HtmlRow>,
    all_met: bool,
    fields: &'a [FieldLine],
    free_elective: u32,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let page = HtmlReport {
            department: ctx.department_name(),
            grade: ctx.grade_label(),
            language: ctx.language_label(),
            rows: ctx.comparison.rows.iter().map(HtmlRow::from).collect(),
            all_met: ctx.comparison.all_met(),
            fields: &ctx.fields,
            free_elective: ctx.free_elective(),
        };
        Ok(page.render()?)
    }
}
