//! Earned-versus-required comparison
//!
//! Pairs each total with its graduation requirement, in table column order.

use crate::core::aggregator::Totals;
use crate::core::models::RequirementRow;

/// One column of the comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    /// Column heading
    pub label: &'static str,
    /// Credits earned
    pub earned: u32,
    /// Credits required, if known
    pub required: Option<u32>,
}

impl ComparisonRow {
    /// Credits still missing (never negative). `None` when the requirement is unknown.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.required.map(|req| req.saturating_sub(self.earned))
    }

    /// Whether the requirement is met. `None` when the requirement is unknown.
    #[must_use]
    pub fn is_met(&self) -> Option<bool> {
        self.required.map(|req| self.earned >= req)
    }
}

/// Full comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Category columns followed by the total column
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Build the table from totals and the requirement row
    #[must_use]
    pub fn new(totals: &Totals, requirement: &RequirementRow) -> Self {
        let row = |label, earned, required| ComparisonRow {
            label,
            earned,
            required,
        };
        let rows = vec![
            row(
                "総合教育科目",
                totals.general_education,
                Some(requirement.general_education),
            ),
            row("外国語科目", totals.language, Some(requirement.language)),
            row(
                "基礎教育科目",
                totals.foundational,
                Some(requirement.foundational),
            ),
            row(
                "専門基礎科目 必修",
                totals.basic_major_required,
                requirement.basic_major_required,
            ),
            row(
                "専門基礎科目 選択",
                totals.basic_major_elective,
                requirement.basic_major_elective,
            ),
            row(
                "学科専門科目 必修",
                totals.advanced_major_required,
                requirement.advanced_major_required,
            ),
            row(
                "学科専門科目 選択",
                totals.advanced_major_elective,
                requirement.advanced_major_elective,
            ),
            row(
                "自主選択科目（超過分含む）",
                totals.voluntary_elective,
                Some(requirement.voluntary_elective),
            ),
            row("合計", totals.grand_total, Some(requirement.total)),
        ];
        Self { rows }
    }

    /// The total column
    #[must_use]
    pub fn total(&self) -> Option<&ComparisonRow> {
        self.rows.last()
    }

    /// Whether every column with a known requirement is met
    #[must_use]
    pub fn all_met(&self) -> bool {
        self.rows.iter().all(|row| row.is_met().unwrap_or(true))
    }

    /// Columns with a known requirement that is not yet met
    #[must_use]
    pub fn unmet(&self) -> Vec<&ComparisonRow> {
        self.rows
            .iter()
            .filter(|row| row.is_met() == Some(false))
            .collect()
    }
}
