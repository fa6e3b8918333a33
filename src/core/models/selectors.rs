//! Selector model: department, grade, and second language

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Second foreign language offered alongside English
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecondLanguage {
    /// German (the code is `germany`)
    Germany,
    /// French
    French,
    /// Chinese
    Chinese,
    /// Russian
    Russian,
    /// Korean
    Korean,
    /// Japanese (for international students)
    Japanese,
}

impl SecondLanguage {
    /// All selectable languages in menu order.
    pub const ALL: [Self; 6] = [
        Self::Germany,
        Self::French,
        Self::Chinese,
        Self::Russian,
        Self::Korean,
        Self::Japanese,
    ];

    /// Selector code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Germany => "germany",
            Self::French => "french",
            Self::Chinese => "chinese",
            Self::Russian => "russian",
            Self::Korean => "korean",
            Self::Japanese => "japanese",
        }
    }

    /// Name shown in the language menu
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Germany => "ドイツ語",
            Self::French => "フランス語",
            Self::Chinese => "中国語",
            Self::Russian => "ロシア語",
            Self::Korean => "朝鮮語",
            Self::Japanese => "日本語",
        }
    }

    /// Transcript field label for this language's credits
    #[must_use]
    pub const fn field_label(self) -> &'static str {
        match self {
            Self::Germany => "分野：02-01-02 外国語科目 ドイツ語",
            Self::French => "分野：02-01-03 外国語科目 フランス語",
            Self::Chinese => "分野：02-01-04 外国語科目 中国語",
            Self::Russian => "分野：02-01-05 外国語科目 ロシア語",
            Self::Korean => "分野：02-01-06 外国語科目 朝鮮語",
            Self::Japanese => "分野：02-01-07 外国語科目 日本語",
        }
    }
}

impl fmt::Display for SecondLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SecondLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == wanted)
            .ok_or_else(|| {
                let codes: Vec<&str> = Self::ALL.iter().map(|lang| lang.code()).collect();
                format!("Unknown second language: '{s}' (expected one of {})", codes.join(", "))
            })
    }
}

/// Selector values that gate which inputs count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectors {
    /// Department code (e.g., "J")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Grade level, 1 through 4
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,

    /// Selected second language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_language: Option<SecondLanguage>,
}

impl Selectors {
    /// Create selectors from explicit values
    #[must_use]
    pub const fn new(
        department: Option<String>,
        grade: Option<u8>,
        second_language: Option<SecondLanguage>,
    ) -> Self {
        Self {
            department,
            grade,
            second_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_parse() {
        for lang in SecondLanguage::ALL {
            assert_eq!(lang.code().parse::<SecondLanguage>(), Ok(lang));
        }
        assert_eq!("French".parse::<SecondLanguage>(), Ok(SecondLanguage::French));
    }

    #[test]
    fn test_unknown_language_lists_codes() {
        let err = "spanish".parse::<SecondLanguage>().unwrap_err();
        assert!(err.contains("spanish"));
        assert!(err.contains("germany"));
    }

    #[test]
    fn test_default_selectors_are_unset() {
        let selectors = Selectors::default();
        assert!(selectors.department.is_none());
        assert!(selectors.grade.is_none());
        assert!(selectors.second_language.is_none());
    }
}
