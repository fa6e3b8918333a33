//! Graduation requirement tables
//!
//! Department-specific thresholds live in [`DEPARTMENTS`]; adding a department
//! means adding an entry there and nothing else. Thresholds shared by every
//! department are plain constants.

/// General-education credits required; anything above rolls into voluntary electives
pub const GENERAL_EDUCATION_REQUIRED: u32 = 18;

/// Foreign-language credits required
pub const LANGUAGE_REQUIRED: u32 = 16;

/// Foundational credits required
pub const FOUNDATIONAL_REQUIRED: u32 = 28;

/// Voluntary-elective credits required
pub const VOLUNTARY_ELECTIVE_REQUIRED: u32 = 8;

/// Total credits required to graduate
pub const GRADUATION_TOTAL_REQUIRED: u32 = 138;

/// Only this many physical-education credits count toward general education
pub const PE_CAP: u32 = 2;

/// Only this many related-course credits count toward advanced-major electives
pub const RELATED_CAP: u32 = 4;

/// Only this many graduate-school credits count toward advanced-major electives
pub const GRADUATION_COURSE_CAP: u32 = 10;

/// Major-course thresholds for one department
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentRequirement {
    /// Department code used by the selector
    pub code: &'static str,
    /// Department name
    pub name: &'static str,
    /// Basic-major required credits
    pub basic_major_required: u32,
    /// Basic-major elective credits
    pub basic_major_elective: u32,
    /// Advanced-major required credits
    pub advanced_major_required: u32,
    /// Advanced-major elective credits
    pub advanced_major_elective: u32,
}

/// Known departments
pub const DEPARTMENTS: &[DepartmentRequirement] = &[DepartmentRequirement {
    code: "J",
    name: "情報工学科",
    basic_major_required: 12,
    basic_major_elective: 14,
    advanced_major_required: 14,
    advanced_major_elective: 28,
}];

/// Look up a department's thresholds by code (exact match).
#[must_use]
pub fn lookup_requirement(department: &str) -> Option<&'static DepartmentRequirement> {
    DEPARTMENTS.iter().find(|dept| dept.code == department)
}

/// The "graduation requirement" row of the comparison table.
///
/// Department-dependent columns are `None` when no known department is
/// selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementRow {
    /// General-education requirement
    pub general_education: u32,
    /// Language requirement
    pub language: u32,
    /// Foundational requirement
    pub foundational: u32,
    /// Basic-major required
    pub basic_major_required: Option<u32>,
    /// Basic-major elective
    pub basic_major_elective: Option<u32>,
    /// Advanced-major required
    pub advanced_major_required: Option<u32>,
    /// Advanced-major elective
    pub advanced_major_elective: Option<u32>,
    /// Voluntary-elective requirement
    pub voluntary_elective: u32,
    /// Total credits to graduate
    pub total: u32,
}

impl RequirementRow {
    /// Build the row for an optional department code
    #[must_use]
    pub fn for_department(department: Option<&str>) -> Self {
        let dept = department.and_then(lookup_requirement);
        Self {
            general_education: GENERAL_EDUCATION_REQUIRED,
            language: LANGUAGE_REQUIRED,
            foundational: FOUNDATIONAL_REQUIRED,
            basic_major_required: dept.map(|d| d.basic_major_required),
            basic_major_elective: dept.map(|d| d.basic_major_elective),
            advanced_major_required: dept.map(|d| d.advanced_major_required),
            advanced_major_elective: dept.map(|d| d.advanced_major_elective),
            voluntary_elective: VOLUNTARY_ELECTIVE_REQUIRED,
            total: GRADUATION_TOTAL_REQUIRED,
        }
    }
}
