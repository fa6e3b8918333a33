//! Plain-text report generator
//!
//! Fixed-width table for the terminal. Column padding uses display width so
//! full-width labels line up.

use crate::core::report::{credits_or_blank, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const NUMBER_WIDTH: usize = 6;

/// Pad `text` on the right to `width` display columns
fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Plain-text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn comparison_table(ctx: &ReportContext) -> String {
        let label_width = ctx
            .comparison
            .rows
            .iter()
            .map(|row| row.label.width())
            .max()
            .unwrap_or(0)
            .max("区分".width());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}  {:>w$}  {:>w$}  {:>w$}",
            pad_right("区分", label_width),
            "取得",
            "条件",
            "不足",
            w = NUMBER_WIDTH - 2
        );
        let _ = writeln!(out, "{}", "-".repeat(label_width + 3 * (NUMBER_WIDTH + 2)));

        for row in &ctx.comparison.rows {
            let marker = match row.is_met() {
                Some(true) => " ✓",
                Some(false) => " ✗",
                None => "",
            };
            let _ = writeln!(
                out,
                "{}  {:>w$}  {:>w$}  {:>w$}{marker}",
                pad_right(row.label, label_width),
                row.earned,
                credits_or_blank(row.required),
                credits_or_blank(row.remaining()),
                w = NUMBER_WIDTH
            );
        }
        out
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "学科: {}   学年: {}   第二外国語: {}\n",
            ctx.department_name(),
            ctx.grade_label(),
            ctx.language_label()
        );
        out.push_str(&Self::comparison_table(ctx));

        let stale: Vec<&str> = ctx
            .fields
            .iter()
            .filter(|line| !line.counted)
            .map(|line| line.key)
            .collect();
        if !stale.is_empty() {
            let _ = writeln!(out, "\n算入されない入力: {}", stale.join(", "));
        }
        let _ = writeln!(out, "自由科目（卒業単位対象外）: {}", ctx.free_elective());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sheet::{SelectorKind, Sheet};

    #[test]
    fn test_pad_right_uses_display_width() {
        assert_eq!(pad_right("合計", 6), "合計  ");
        assert_eq!(pad_right("abc", 2), "abc");
    }

    #[test]
    fn test_render_lists_stale_fields() {
        let mut sheet = Sheet::default();
        sheet.select(SelectorKind::Grade, "1").expect("grade");
        sheet.set_credit("amc_elective", "4").expect("stale");
        let ctx = ReportContext::new(&sheet);
        let text = TextReporter::new().render(&ctx).expect("render");

        assert!(text.contains("算入されない入力: amc_elective"));
        assert!(text.contains("1年"));
        assert!(text.lines().any(|line| line.starts_with("合計")));
    }
}
