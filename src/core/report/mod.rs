//! Report generation for credit sheets
//!
//! Renders the earned-versus-required comparison, plus the entered fields, in
//! several formats (Markdown, HTML, plain text).

pub mod formats;

use crate::core::aggregator::Totals;
use crate::core::comparison::Comparison;
use crate::core::models::{lookup_requirement, Category, Selectors};
use crate::core::sheet::Sheet;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Placeholder shown for unset selectors and unknown requirements
pub const BLANK: &str = "-";

/// One entered field as shown in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLine {
    /// Field key
    pub key: &'static str,
    /// Transcript label
    pub label: &'static str,
    /// Entered credits
    pub credits: u32,
    /// Whether the value counts under the current selectors
    pub counted: bool,
}

/// Data context for report generation
///
/// Everything a renderer needs, computed once from the sheet.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Selectors in effect
    pub selectors: &'a Selectors,
    /// Totals computed from the sheet
    pub totals: Totals,
    /// Earned-versus-required table
    pub comparison: Comparison,
    /// Fields that hold a value, in sheet order
    pub fields: Vec<FieldLine>,
}

impl<'a> ReportContext<'a> {
    /// Build the context for a sheet
    #[must_use]
    pub fn new(sheet: &'a Sheet) -> Self {
        let totals = sheet.totals();
        let comparison = Comparison::new(&totals, &sheet.requirement());
        let fields = Category::ALL
            .into_iter()
            .filter_map(|category| {
                sheet.credits.get(category).map(|credits| FieldLine {
                    key: category.key(),
                    label: category.label_for(&sheet.selectors),
                    credits,
                    counted: category.is_active(&sheet.selectors),
                })
            })
            .collect();
        Self {
            selectors: &sheet.selectors,
            totals,
            comparison,
            fields,
        }
    }

    /// Department name, or the code if it is not in the table
    #[must_use]
    pub fn department_name(&self) -> String {
        self.selectors
            .department
            .as_deref()
            .map_or_else(
                || BLANK.to_string(),
                |code| lookup_requirement(code).map_or_else(|| code.to_string(), |d| d.name.to_string()),
            )
    }

    /// Grade as shown in the header
    #[must_use]
    pub fn grade_label(&self) -> String {
        self.selectors
            .grade
            .map_or_else(|| BLANK.to_string(), |g| format!("{g}年"))
    }

    /// Second language as shown in the header
    #[must_use]
    pub fn language_label(&self) -> &'static str {
        self.selectors
            .second_language
            .map_or(BLANK, |lang| lang.display_name())
    }

    /// Free-elective credits entered (informational only)
    #[must_use]
    pub fn free_elective(&self) -> u32 {
        self.fields
            .iter()
            .find(|line| line.key == Category::FreeElective.key())
            .map_or(0, |line| line.credits)
    }
}

/// Format an optional credit count, blank when unknown
#[must_use]
pub fn credits_or_blank(value: Option<u32>) -> String {
    value.map_or_else(|| BLANK.to_string(), |v| v.to_string())
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sheet::SelectorKind;

    fn sample_sheet() -> Sheet {
        let mut sheet = Sheet::default();
        sheet.select(SelectorKind::Department, "J").expect("department");
        sheet.select(SelectorKind::Grade, "2").expect("grade");
        sheet.set_credit("english", "6").expect("english");
        sheet.set_credit("hiyoshi34x", "4").expect("stale");
        sheet.set_credit("fec", "3").expect("fec");
        sheet
    }

    #[test]
    fn test_context_fields() {
        let sheet = sample_sheet();
        let ctx = ReportContext::new(&sheet);
        let keys: Vec<&str> = ctx.fields.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["hiyoshi34x", "english", "fec"]);
        assert!(!ctx.fields[0].counted);
        assert!(ctx.fields[1].counted);
        assert_eq!(ctx.free_elective(), 3);
    }

    #[test]
    fn test_header_labels() {
        let sheet = sample_sheet();
        let ctx = ReportContext::new(&sheet);
        assert_eq!(ctx.department_name(), "情報工学科");
        assert_eq!(ctx.grade_label(), "2年");
        assert_eq!(ctx.language_label(), BLANK);
    }

    #[test]
    fn test_credits_or_blank() {
        assert_eq!(credits_or_blank(Some(14)), "14");
        assert_eq!(credits_or_blank(None), BLANK);
    }
}
