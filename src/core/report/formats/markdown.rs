//! Markdown report generator
//!
//! Renders the comparison as Markdown tables. These reports render well in
//! GitHub, GitLab, and VS Code.

use crate::core::report::{credits_or_blank, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{department}}", &ctx.department_name());
        output = output.replace("{{grade}}", &ctx.grade_label());
        output = output.replace("{{language}}", ctx.language_label());
        output = output.replace("{{comparison_table}}", &Self::generate_comparison_table(ctx));
        output = output.replace("{{status}}", &Self::generate_status(ctx));
        output = output.replace("{{field_table}}", &Self::generate_field_table(ctx));
        output = output.replace("{{free_elective}}", &ctx.free_elective().to_string());

        output
    }

    /// Generate the earned/required/remaining table
    fn generate_comparison_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| 区分 | 取得単位数 | 卒業条件 | 不足 |\n");
        table.push_str("|---|---:|---:|---:|\n");

        for row in &ctx.comparison.rows {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                row.label,
                row.earned,
                credits_or_blank(row.required),
                credits_or_blank(row.remaining())
            );
        }

        table
    }

    /// Summary line under the table
    fn generate_status(ctx: &ReportContext) -> String {
        let unmet = ctx.comparison.unmet();
        if unmet.is_empty() {
            "✅ すべての卒業条件を満たしています。".to_string()
        } else {
            let labels: Vec<&str> = unmet.iter().map(|row| row.label).collect();
            format!("⚠️ 未達: {}", labels.join(", "))
        }
    }

    /// Generate the entered-fields table
    fn generate_field_table(ctx: &ReportContext) -> String {
        if ctx.fields.is_empty() {
            return "_入力なし_".to_string();
        }

        let mut table = String::new();
        table.push_str("| キー | 分野 | 単位数 | 算入 |\n");
        table.push_str("|---|---|---:|---|\n");

        for line in &ctx.fields {
            let counted = if line.counted { "○" } else { "×" };
            let _ = writeln!(
                table,
                "| `{}` | {} | {} | {counted} |",
                line.key, line.label, line.credits
            );
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sheet::{SelectorKind, Sheet};

    #[test]
    fn test_render_substitutes_everything() {
        let mut sheet = Sheet::default();
        sheet.select(SelectorKind::Grade, "1").expect("grade");
        sheet.set_credit("math", "8").expect("math");
        let ctx = ReportContext::new(&sheet);
        let output = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(!output.contains("{{"));
        assert!(output.contains("| 基礎教育科目 | 8 | 28 | 20 |"));
        assert!(output.contains("| 専門基礎科目 必修 | 0 | - | - |"));
        assert!(output.contains("| `math` |"));
        assert!(output.contains("⚠️ 未達"));
    }

    #[test]
    fn test_render_empty_sheet() {
        let sheet = Sheet::default();
        let ctx = ReportContext::new(&sheet);
        let output = MarkdownReporter::new().render(&ctx).expect("render");
        assert!(output.contains("_入力なし_"));
        assert!(output.contains("| 合計 | 0 | 138 | 138 |"));
    }
}
