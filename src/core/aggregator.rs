//! Credit aggregation
//!
//! Derives the comparison-table totals from raw inputs and selectors. Every
//! function here is pure: totals are recomputed from scratch on each call.
//!
//! Gating is applied here rather than trusted to whoever collected the inputs,
//! so a stale value left in a gated-off field never reaches a total.

use crate::core::models::requirement::{
    GENERAL_EDUCATION_REQUIRED, GRADUATION_COURSE_CAP, PE_CAP, RELATED_CAP,
};
use crate::core::models::{lookup_requirement, Category, RawInputs, Selectors};
use crate::debug;

/// Derived totals, one per comparison-table column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// General-education credits, PE capped
    pub general_education: u32,
    /// English plus the selected second language
    pub language: u32,
    /// Foundational credits
    pub foundational: u32,
    /// Basic-major required credits
    pub basic_major_required: u32,
    /// Basic-major elective credits
    pub basic_major_elective: u32,
    /// Advanced-major required credits (3rd and 4th year)
    pub advanced_major_required: u32,
    /// Advanced-major elective credits, related and graduate-school courses capped
    pub advanced_major_elective: u32,
    /// Voluntary electives including overflow from other columns
    pub voluntary_elective: u32,
    /// Sum of every column above; free electives are never included
    pub grand_total: u32,
}

/// Compute every total for the given inputs and selectors.
#[must_use]
pub fn compute_totals(raw: &RawInputs, selectors: &Selectors) -> Totals {
    let general_education = general_education_total(raw, selectors);
    let language = language_total(raw, selectors);
    let foundational = foundational_total(raw, selectors);
    let basic_major_required = raw.effective(Category::BasicMajorRequired, selectors);
    let basic_major_elective = raw.effective(Category::BasicMajorElective, selectors);
    let advanced_major_required = advanced_major_required_total(raw, selectors);
    let advanced_major_elective = advanced_major_elective_total(raw, selectors);
    let voluntary_elective = voluntary_elective_total(
        raw.effective(Category::VoluntaryElective, selectors),
        general_education,
        basic_major_elective,
        advanced_major_elective,
        selectors.department.as_deref(),
    );

    let grand_total = [
        general_education,
        language,
        foundational,
        basic_major_required,
        basic_major_elective,
        advanced_major_required,
        advanced_major_elective,
        voluntary_elective,
    ]
    .into_iter()
    .fold(0, u32::saturating_add);

    debug!(
        "Totals recomputed (grade={:?}, department={:?}): total={grand_total}",
        selectors.grade, selectors.department
    );

    Totals {
        general_education,
        language,
        foundational,
        basic_major_required,
        basic_major_elective,
        advanced_major_required,
        advanced_major_elective,
        voluntary_elective,
        grand_total,
    }
}

/// Sums saturate at `u32::MAX` so no combination of entries can overflow
fn sum_of(raw: &RawInputs, selectors: &Selectors, categories: &[Category]) -> u32 {
    categories
        .iter()
        .map(|category| raw.effective(*category, selectors))
        .fold(0, u32::saturating_add)
}

/// General-education total.
///
/// Series X/Y and Yagami credits count in full; physical education from both
/// cohorts counts for at most [`PE_CAP`] credits combined.
#[must_use]
pub fn general_education_total(raw: &RawInputs, selectors: &Selectors) -> u32 {
    let courses = sum_of(
        raw,
        selectors,
        &[
            Category::Hiyoshi12X,
            Category::Hiyoshi12Y,
            Category::Hiyoshi34X,
            Category::Hiyoshi34Y,
            Category::Yagami,
        ],
    );
    let pe = sum_of(raw, selectors, &[Category::Hiyoshi12Pe, Category::Hiyoshi34Pe]);
    courses.saturating_add(pe.min(PE_CAP))
}

/// Language total: English, plus second-language credits when a language is selected.
#[must_use]
pub fn language_total(raw: &RawInputs, selectors: &Selectors) -> u32 {
    sum_of(raw, selectors, &[Category::English, Category::Second])
}

/// Foundational total, uncapped.
#[must_use]
pub fn foundational_total(raw: &RawInputs, selectors: &Selectors) -> u32 {
    sum_of(
        raw,
        selectors,
        &[
            Category::FoundationalRequired,
            Category::Math,
            Category::Physics,
            Category::Chemistry,
        ],
    )
}

/// Advanced-major required total (3rd-year plus 4th-year courses).
#[must_use]
pub fn advanced_major_required_total(raw: &RawInputs, selectors: &Selectors) -> u32 {
    sum_of(
        raw,
        selectors,
        &[
            Category::AdvancedMajorRequired3,
            Category::AdvancedMajorRequired4,
        ],
    )
}

/// Advanced-major elective total.
///
/// Related courses are capped at [`RELATED_CAP`] and graduate-school courses
/// at [`GRADUATION_COURSE_CAP`], independently.
#[must_use]
pub fn advanced_major_elective_total(raw: &RawInputs, selectors: &Selectors) -> u32 {
    let elective = raw.effective(Category::AdvancedMajorElective, selectors);
    let related = raw.effective(Category::AdvancedMajorRelated, selectors);
    let graduation = raw.effective(Category::AdvancedMajorGraduation, selectors);
    elective
        .saturating_add(related.min(RELATED_CAP))
        .saturating_add(graduation.min(GRADUATION_COURSE_CAP))
}

/// General-education credits beyond [`GENERAL_EDUCATION_REQUIRED`].
#[must_use]
pub const fn excess_general_education(general_education: u32) -> u32 {
    general_education.saturating_sub(GENERAL_EDUCATION_REQUIRED)
}

/// Major-elective credits beyond the department's thresholds.
///
/// Zero when no department is given or the code is not in the table. The
/// advanced-major excess is taken from the capped elective total.
#[must_use]
pub fn excess_major_electives(
    basic_major_elective: u32,
    advanced_major_elective: u32,
    department: Option<&str>,
) -> u32 {
    let Some(code) = department else {
        return 0;
    };
    let Some(req) = lookup_requirement(code) else {
        debug!("Department '{code}' has no requirement entry; no major-elective overflow");
        return 0;
    };
    basic_major_elective
        .saturating_sub(req.basic_major_elective)
        .saturating_add(advanced_major_elective.saturating_sub(req.advanced_major_elective))
}

/// Voluntary-elective total: entered credits plus overflow from general
/// education and, with a known department, from both major-elective columns.
#[must_use]
pub fn voluntary_elective_total(
    vec: u32,
    general_education: u32,
    basic_major_elective: u32,
    advanced_major_elective: u32,
    department: Option<&str>,
) -> u32 {
    vec.saturating_add(excess_general_education(general_education))
        .saturating_add(excess_major_electives(
            basic_major_elective,
            advanced_major_elective,
            department,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::SecondLanguage;

    fn grade(g: u8) -> Selectors {
        Selectors::new(None, Some(g), None)
    }

    fn inputs(values: &[(Category, u32)]) -> RawInputs {
        let mut raw = RawInputs::default();
        for (category, credits) in values {
            raw.set(*category, Some(*credits));
        }
        raw
    }

    #[test]
    fn test_empty_inputs_total_zero() {
        let totals = compute_totals(&RawInputs::default(), &Selectors::default());
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_pe_cap() {
        let raw = inputs(&[(Category::Hiyoshi12Pe, 3), (Category::Hiyoshi34Pe, 2)]);
        assert_eq!(general_education_total(&raw, &grade(4)), 2);

        let raw = inputs(&[(Category::Hiyoshi12Pe, 1), (Category::Hiyoshi34Pe, 0)]);
        assert_eq!(general_education_total(&raw, &grade(4)), 1);
    }

    #[test]
    fn test_grade_three_fields_excluded_below_grade_three() {
        let raw = inputs(&[
            (Category::Hiyoshi12X, 4),
            (Category::Hiyoshi34X, 5),
            (Category::Hiyoshi34Pe, 2),
        ]);
        assert_eq!(general_education_total(&raw, &grade(2)), 4);
        assert_eq!(general_education_total(&raw, &grade(3)), 11);
        assert_eq!(general_education_total(&raw, &Selectors::default()), 4);
    }

    #[test]
    fn test_language_needs_selected_second_language() {
        let raw = inputs(&[(Category::English, 4), (Category::Second, 6)]);
        assert_eq!(language_total(&raw, &Selectors::default()), 4);

        let raw = inputs(&[(Category::English, 4), (Category::Second, 3)]);
        let french = Selectors::new(None, None, Some(SecondLanguage::French));
        assert_eq!(language_total(&raw, &french), 7);
    }

    #[test]
    fn test_foundational_uncapped() {
        let raw = inputs(&[
            (Category::FoundationalRequired, 10),
            (Category::Math, 9),
            (Category::Physics, 8),
            (Category::Chemistry, 7),
        ]);
        assert_eq!(foundational_total(&raw, &Selectors::default()), 34);
    }

    #[test]
    fn test_advanced_elective_caps() {
        let raw = inputs(&[
            (Category::AdvancedMajorElective, 2),
            (Category::AdvancedMajorRelated, 10),
            (Category::AdvancedMajorGraduation, 15),
        ]);
        assert_eq!(advanced_major_elective_total(&raw, &grade(3)), 16);
    }

    #[test]
    fn test_advanced_required_by_grade() {
        let raw = inputs(&[
            (Category::AdvancedMajorRequired3, 6),
            (Category::AdvancedMajorRequired4, 8),
        ]);
        assert_eq!(advanced_major_required_total(&raw, &grade(2)), 0);
        assert_eq!(advanced_major_required_total(&raw, &grade(3)), 6);
        assert_eq!(advanced_major_required_total(&raw, &grade(4)), 14);
    }

    #[test]
    fn test_voluntary_elective_excess() {
        assert_eq!(voluntary_elective_total(1, 18, 20, 30, Some("J")), 9);
        assert_eq!(voluntary_elective_total(1, 21, 0, 0, Some("J")), 4);
    }

    #[test]
    fn test_voluntary_elective_without_department() {
        assert_eq!(voluntary_elective_total(1, 18, 100, 100, None), 1);
        assert_eq!(excess_major_electives(100, 100, None), 0);
    }

    #[test]
    fn test_unknown_department_has_no_excess() {
        assert_eq!(excess_major_electives(100, 100, Some("Z")), 0);
    }

    #[test]
    fn test_advanced_excess_uses_capped_total() {
        // elective 20 + related min(10,4) + graduation min(15,10) = 34, req 28
        let raw = inputs(&[
            (Category::AdvancedMajorElective, 20),
            (Category::AdvancedMajorRelated, 10),
            (Category::AdvancedMajorGraduation, 15),
        ]);
        let selectors = Selectors::new(Some("J".to_string()), Some(4), None);
        let totals = compute_totals(&raw, &selectors);
        assert_eq!(totals.advanced_major_elective, 34);
        assert_eq!(totals.voluntary_elective, 6);
    }

    #[test]
    fn test_grand_total_sums_columns() {
        let raw = inputs(&[
            (Category::Hiyoshi12X, 10),
            (Category::English, 8),
            (Category::Math, 8),
            (Category::BasicMajorRequired, 12),
            (Category::VoluntaryElective, 2),
        ]);
        let totals = compute_totals(&raw, &grade(2));
        assert_eq!(totals.grand_total, 40);
    }
}
