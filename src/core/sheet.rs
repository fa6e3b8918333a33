//! Persisted credit sheet
//!
//! The sheet is the form state: selectors plus raw inputs. It is loaded once at
//! start, edited one field at a time, and written back after each change. The
//! aggregator never sees the file; it only receives the in-memory values.

use crate::core::aggregator::{compute_totals, Totals};
use crate::core::models::{
    lookup_requirement, Category, RawInputs, RequirementRow, SecondLanguage, Selectors,
    DEPARTMENTS,
};
use crate::{debug, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Which selector an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// Department code
    Department,
    /// Grade level
    Grade,
    /// Second language
    Language,
}

impl FromStr for SelectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "department" | "dept" => Ok(Self::Department),
            "grade" | "year" => Ok(Self::Grade),
            "language" | "lang" | "second-language" | "second_language" => Ok(Self::Language),
            _ => Err(format!(
                "Unknown selector: '{s}' (expected department, grade, or language)"
            )),
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Department => write!(f, "department"),
            Self::Grade => write!(f, "grade"),
            Self::Language => write!(f, "language"),
        }
    }
}

/// Selectors and raw inputs as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// Department, grade, and second language
    #[serde(default)]
    pub selectors: Selectors,
    /// Credits entered per category
    #[serde(default)]
    pub credits: RawInputs,
}

/// Values that clear a selector or field instead of setting it
fn is_clear_value(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("none")
}

impl Sheet {
    /// Load a sheet from `path`. A missing file yields an empty sheet.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            debug!("No sheet at {}; starting empty", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let mut sheet = Self::from_toml(&content)?;
        sheet.drop_invalid_selectors();
        Ok(sheet)
    }

    /// Clear selectors that `select` would have rejected.
    ///
    /// A hand-edited file can hold a grade outside 1-4 or a department code
    /// that is not in the table; each is cleared with a warning. Returns the
    /// selectors that were cleared.
    pub fn drop_invalid_selectors(&mut self) -> Vec<SelectorKind> {
        let mut cleared = Vec::new();
        if let Some(grade) = self.selectors.grade.filter(|g| !(1..=4).contains(g)) {
            warn!("Ignoring grade {grade} from the sheet file (expected 1 to 4)");
            self.selectors.grade = None;
            cleared.push(SelectorKind::Grade);
        }
        if let Some(code) = self
            .selectors
            .department
            .take_if(|code| lookup_requirement(code).is_none())
        {
            warn!("Ignoring unknown department '{code}' from the sheet file");
            cleared.push(SelectorKind::Department);
        }
        cleared
    }

    /// Parse a sheet from TOML
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or holds invalid values.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize the sheet to TOML
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Write the sheet to `path`, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        debug!("Sheet saved to {}", path.display());
        Ok(())
    }

    /// Set one credit field from user text.
    ///
    /// An empty value (or `none`) clears the field. Values above the field's
    /// suggested maximum are kept, with a warning.
    ///
    /// # Errors
    /// Returns an error if the field is unknown or the value is not a
    /// non-negative integer.
    pub fn set_credit(&mut self, field: &str, value: &str) -> Result<Category, String> {
        let category: Category = field.parse()?;
        if is_clear_value(value) {
            self.credits.set(category, None);
            return Ok(category);
        }
        let credits: u32 = value.trim().parse().map_err(|_| {
            format!("Invalid credit count for '{category}': '{value}' (expected a non-negative integer)")
        })?;
        if let Some(max) = category.input_max().filter(|max| credits > *max) {
            warn!("{category} is usually at most {max} credits; keeping {credits}");
        }
        if !category.is_active(&self.selectors) {
            warn!("{category} does not count under the current selectors; value stored anyway");
        }
        self.credits.set(category, Some(credits));
        Ok(category)
    }

    /// Clear one credit field.
    ///
    /// # Errors
    /// Returns an error if the field is unknown.
    pub fn unset_credit(&mut self, field: &str) -> Result<Category, String> {
        let category: Category = field.parse()?;
        self.credits.set(category, None);
        Ok(category)
    }

    /// Set or clear a selector from user text.
    ///
    /// # Errors
    /// Returns an error for an unknown department code, a grade outside 1-4,
    /// or an unknown language code.
    pub fn select(&mut self, kind: SelectorKind, value: &str) -> Result<(), String> {
        if is_clear_value(value) {
            match kind {
                SelectorKind::Department => self.selectors.department = None,
                SelectorKind::Grade => self.selectors.grade = None,
                SelectorKind::Language => self.selectors.second_language = None,
            }
            return Ok(());
        }

        let value = value.trim();
        match kind {
            SelectorKind::Department => {
                let dept = lookup_requirement(value).ok_or_else(|| {
                    let codes: Vec<&str> = DEPARTMENTS.iter().map(|d| d.code).collect();
                    format!(
                        "Unknown department: '{value}' (expected one of {})",
                        codes.join(", ")
                    )
                })?;
                self.selectors.department = Some(dept.code.to_string());
            }
            SelectorKind::Grade => {
                let grade = value
                    .parse::<u8>()
                    .ok()
                    .filter(|g| (1..=4).contains(g))
                    .ok_or_else(|| format!("Invalid grade: '{value}' (expected 1 to 4)"))?;
                self.selectors.grade = Some(grade);
            }
            SelectorKind::Language => {
                self.selectors.second_language = Some(SecondLanguage::from_str(value)?);
            }
        }
        Ok(())
    }

    /// Reset every selector and field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Totals for the current state
    #[must_use]
    pub fn totals(&self) -> Totals {
        compute_totals(&self.credits, &self.selectors)
    }

    /// Requirement row for the selected department
    #[must_use]
    pub fn requirement(&self) -> RequirementRow {
        RequirementRow::for_department(self.selectors.department.as_deref())
    }
}
