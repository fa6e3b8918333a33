//! Credit category model
//!
//! Every input field on the credit sheet is a [`Category`]. A category knows
//! which [`Group`] it rolls up into, which [`Gate`] decides whether it counts
//! under the current selectors, and the label printed on the university's
//! transcript for that field.

use crate::core::models::Selectors;
use std::fmt;
use std::str::FromStr;

/// Result column a category contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// General-education courses (総合教育科目)
    GeneralEducation,
    /// Foreign-language courses (外国語科目)
    Language,
    /// Foundational courses (基礎教育科目)
    Foundational,
    /// Basic-major courses (専門基礎科目)
    BasicMajor,
    /// Advanced-major courses (学科専門科目)
    AdvancedMajor,
    /// Voluntary-elective courses (自主選択科目)
    VoluntaryElective,
    /// Free-elective courses (自由科目), not counted toward graduation
    FreeElective,
}

/// Condition under which a category's credits count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Always counted
    Always,
    /// Counted once the student's grade is at least this value
    MinGrade(u8),
    /// Counted only when a second language is selected
    SecondLanguage,
}

impl Gate {
    /// Whether the gate is open for the given selectors.
    ///
    /// An unset grade opens no grade gate.
    #[must_use]
    pub fn is_open(self, selectors: &Selectors) -> bool {
        match self {
            Self::Always => true,
            Self::MinGrade(min) => selectors.grade.is_some_and(|grade| grade >= min),
            Self::SecondLanguage => selectors.second_language.is_some(),
        }
    }
}

/// An input field on the credit sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Hiyoshi 1st/2nd-year courses, series X
    Hiyoshi12X,
    /// Hiyoshi 1st/2nd-year courses, series Y
    Hiyoshi12Y,
    /// Hiyoshi 1st/2nd-year physical education
    Hiyoshi12Pe,
    /// 3rd/4th-year general education, series X
    Hiyoshi34X,
    /// 3rd/4th-year general education, series Y
    Hiyoshi34Y,
    /// 3rd/4th-year physical education
    Hiyoshi34Pe,
    /// Yagami campus general education
    Yagami,
    /// English
    English,
    /// The selected second language
    Second,
    /// Foundational required courses
    FoundationalRequired,
    /// Foundational mathematics
    Math,
    /// Foundational physics
    Physics,
    /// Foundational chemistry
    Chemistry,
    /// Basic-major required courses
    BasicMajorRequired,
    /// Basic-major elective courses
    BasicMajorElective,
    /// Advanced-major required courses, 3rd year
    AdvancedMajorRequired3,
    /// Advanced-major required courses, 4th year
    AdvancedMajorRequired4,
    /// Advanced-major elective courses
    AdvancedMajorElective,
    /// Related courses counted toward advanced-major electives
    AdvancedMajorRelated,
    /// Graduate-school courses counted toward advanced-major electives
    AdvancedMajorGraduation,
    /// Voluntary-elective courses
    VoluntaryElective,
    /// Free-elective courses
    FreeElective,
}

impl Category {
    /// All categories in sheet order.
    pub const ALL: [Self; 22] = [
        Self::Hiyoshi12X,
        Self::Hiyoshi12Y,
        Self::Hiyoshi12Pe,
        Self::Hiyoshi34X,
        Self::Hiyoshi34Y,
        Self::Hiyoshi34Pe,
        Self::Yagami,
        Self::English,
        Self::Second,
        Self::FoundationalRequired,
        Self::Math,
        Self::Physics,
        Self::Chemistry,
        Self::BasicMajorRequired,
        Self::BasicMajorElective,
        Self::AdvancedMajorRequired3,
        Self::AdvancedMajorRequired4,
        Self::AdvancedMajorElective,
        Self::AdvancedMajorRelated,
        Self::AdvancedMajorGraduation,
        Self::VoluntaryElective,
        Self::FreeElective,
    ];

    /// Field key used on the command line and in the sheet file
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hiyoshi12X => "hiyoshi12x",
            Self::Hiyoshi12Y => "hiyoshi12y",
            Self::Hiyoshi12Pe => "hiyoshi12pe",
            Self::Hiyoshi34X => "hiyoshi34x",
            Self::Hiyoshi34Y => "hiyoshi34y",
            Self::Hiyoshi34Pe => "hiyoshi34pe",
            Self::Yagami => "yagami",
            Self::English => "english",
            Self::Second => "second",
            Self::FoundationalRequired => "fc_required",
            Self::Math => "math",
            Self::Physics => "physics",
            Self::Chemistry => "chemistry",
            Self::BasicMajorRequired => "bmc_required",
            Self::BasicMajorElective => "bmc_elective",
            Self::AdvancedMajorRequired3 => "amc_required3",
            Self::AdvancedMajorRequired4 => "amc_required4",
            Self::AdvancedMajorElective => "amc_elective",
            Self::AdvancedMajorRelated => "amc_related",
            Self::AdvancedMajorGraduation => "amc_graduation",
            Self::VoluntaryElective => "vec",
            Self::FreeElective => "fec",
        }
    }

    /// Result column this category contributes to
    #[must_use]
    pub const fn group(self) -> Group {
        match self {
            Self::Hiyoshi12X
            | Self::Hiyoshi12Y
            | Self::Hiyoshi12Pe
            | Self::Hiyoshi34X
            | Self::Hiyoshi34Y
            | Self::Hiyoshi34Pe
            | Self::Yagami => Group::GeneralEducation,
            Self::English | Self::Second => Group::Language,
            Self::FoundationalRequired | Self::Math | Self::Physics | Self::Chemistry => {
                Group::Foundational
            }
            Self::BasicMajorRequired | Self::BasicMajorElective => Group::BasicMajor,
            Self::AdvancedMajorRequired3
            | Self::AdvancedMajorRequired4
            | Self::AdvancedMajorElective
            | Self::AdvancedMajorRelated
            | Self::AdvancedMajorGraduation => Group::AdvancedMajor,
            Self::VoluntaryElective => Group::VoluntaryElective,
            Self::FreeElective => Group::FreeElective,
        }
    }

    /// Condition under which this category counts
    #[must_use]
    pub const fn gate(self) -> Gate {
        match self {
            Self::Hiyoshi34X
            | Self::Hiyoshi34Y
            | Self::Hiyoshi34Pe
            | Self::Yagami
            | Self::AdvancedMajorRequired3
            | Self::AdvancedMajorElective
            | Self::AdvancedMajorRelated
            | Self::AdvancedMajorGraduation => Gate::MinGrade(3),
            Self::BasicMajorRequired | Self::BasicMajorElective => Gate::MinGrade(2),
            Self::AdvancedMajorRequired4 => Gate::MinGrade(4),
            Self::Second => Gate::SecondLanguage,
            _ => Gate::Always,
        }
    }

    /// Whether this category counts under the given selectors
    #[must_use]
    pub fn is_active(self, selectors: &Selectors) -> bool {
        self.gate().is_open(selectors)
    }

    /// Suggested upper bound for a single entry, if the sheet has one
    #[must_use]
    pub const fn input_max(self) -> Option<u32> {
        match self {
            Self::English | Self::Second | Self::FoundationalRequired | Self::Math | Self::Physics => {
                Some(8)
            }
            Self::Chemistry => Some(4),
            _ => None,
        }
    }

    /// Transcript field label.
    ///
    /// The second-language field takes its label from the selected language, so
    /// this returns a generic label for it; see [`Category::label_for`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hiyoshi12X => "分野：01-01-11 総合教育科目 第１・２学年設置科目 系列Ｘ（人文・社会・学際系列）",
            Self::Hiyoshi12Y => "分野：01-01-12 総合教育科目 第１・２学年設置科目 系列Ｙ（自然科学系列・総合教育セミナー・外国語）",
            Self::Hiyoshi12Pe => "分野：01-01-13 総合教育科目 第１・２学年設置科目 体育実技科目　（日吉１０単位算入分）",
            Self::Hiyoshi34X => "分野：01-01-14 総合教育科目 系列Ｘ（人文・社会・学際系列）",
            Self::Hiyoshi34Y => "分野：01-01-15 総合教育科目 系列Ｙ（自然科学系列・総合教育セミナー・外国語）",
            Self::Hiyoshi34Pe => "分野：01-01-16 総合教育科目 体育実技科目",
            Self::Yagami => "分野：01-02-11 総合教育科目 矢上設置科目",
            Self::English => "分野：02-01-01 外国語科目 英語",
            Self::Second => "外国語科目 第二外国語",
            Self::FoundationalRequired => "分野：03-01-01 基礎教育科目 必修",
            Self::Math => "分野：03-01-02 基礎教育科目 数学",
            Self::Physics => "分野：03-01-03 基礎教育科目 物理学",
            Self::Chemistry => "分野：03-01-04 基礎教育科目 化学",
            Self::BasicMajorRequired => "分野：04-01-01 専門教育科目 専門基礎科目 必修",
            Self::BasicMajorElective => "分野：04-01-02 専門教育科目 専門基礎科目 選択",
            Self::AdvancedMajorRequired3 => "分野：04-02-01 専門教育科目 学科専門科目 必修（３年）",
            Self::AdvancedMajorRequired4 => "分野：04-02-02 専門教育科目 学科専門科目 必修（４年）",
            Self::AdvancedMajorElective => "分野：04-02-11 専門教育科目 学科専門科目 選択",
            Self::AdvancedMajorRelated => "分野：04-02-31 専門教育科目 学科専門科目 関連科目",
            Self::AdvancedMajorGraduation => "分野：04-02-32 専門教育科目 学科専門科目 理工学研究科設置科目",
            Self::VoluntaryElective => "分野：04-02-33 専門教育科目 学科専門科目 自主選択科目",
            Self::FreeElective => "分野：05-01-01 自由科目 （卒業単位対象外）",
        }
    }

    /// Transcript field label under the given selectors
    #[must_use]
    pub fn label_for(self, selectors: &Selectors) -> &'static str {
        match (self, selectors.second_language) {
            (Self::Second, Some(language)) => language.field_label(),
            _ => self.label(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.key() == wanted)
            .ok_or_else(|| format!("Unknown field: '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::SecondLanguage;

    #[test]
    fn test_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("HIYOSHI34PE".parse::<Category>(), Ok(Category::Hiyoshi34Pe));
        assert_eq!(" vec ".parse::<Category>(), Ok(Category::VoluntaryElective));
        assert!("hiyoshi56x".parse::<Category>().is_err());
    }

    #[test]
    fn test_grade_gates() {
        let mut selectors = Selectors::default();
        assert!(Category::Hiyoshi12X.is_active(&selectors));
        assert!(!Category::BasicMajorElective.is_active(&selectors));
        assert!(!Category::Hiyoshi34X.is_active(&selectors));

        selectors.grade = Some(2);
        assert!(Category::BasicMajorElective.is_active(&selectors));
        assert!(!Category::Yagami.is_active(&selectors));

        selectors.grade = Some(3);
        assert!(Category::Yagami.is_active(&selectors));
        assert!(Category::AdvancedMajorRequired3.is_active(&selectors));
        assert!(!Category::AdvancedMajorRequired4.is_active(&selectors));

        selectors.grade = Some(4);
        assert!(Category::AdvancedMajorRequired4.is_active(&selectors));
    }

    #[test]
    fn test_second_language_gate() {
        let mut selectors = Selectors::default();
        assert!(!Category::Second.is_active(&selectors));
        selectors.second_language = Some(SecondLanguage::Korean);
        assert!(Category::Second.is_active(&selectors));
        assert_eq!(
            Category::Second.label_for(&selectors),
            "分野：02-01-06 外国語科目 朝鮮語"
        );
    }

    #[test]
    fn test_free_elective_has_its_own_group() {
        assert_eq!(Category::FreeElective.group(), Group::FreeElective);
        assert_eq!(Category::Yagami.group(), Group::GeneralEducation);
    }
}
