//! Raw credit inputs model

use crate::core::models::{Category, Selectors};
use serde::{Deserialize, Serialize};

/// Completed-credit counts as entered, one optional value per [`Category`].
///
/// `None` means "not yet entered" and counts as zero. Values are kept even when
/// their category is gated off; use [`RawInputs::effective`] to read what
/// actually counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    /// Hiyoshi 1st/2nd-year series X
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiyoshi12x: Option<u32>,
    /// Hiyoshi 1st/2nd-year series Y
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiyoshi12y: Option<u32>,
    /// Hiyoshi 1st/2nd-year physical education
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiyoshi12pe: Option<u32>,
    /// 3rd/4th-year series X
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiyoshi34x: Option<u32>,
    /// 3rd/4th-year series Y
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiyoshi34y: Option<u32>,
    /// 3rd/4th-year physical education
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiyoshi34pe: Option<u32>,
    /// Yagami campus general education
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yagami: Option<u32>,
    /// English
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english: Option<u32>,
    /// Second language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<u32>,
    /// Foundational required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fc_required: Option<u32>,
    /// Foundational mathematics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub math: Option<u32>,
    /// Foundational physics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics: Option<u32>,
    /// Foundational chemistry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemistry: Option<u32>,
    /// Basic-major required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmc_required: Option<u32>,
    /// Basic-major elective
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmc_elective: Option<u32>,
    /// Advanced-major required, 3rd year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amc_required3: Option<u32>,
    /// Advanced-major required, 4th year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amc_required4: Option<u32>,
    /// Advanced-major elective
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amc_elective: Option<u32>,
    /// Advanced-major related courses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amc_related: Option<u32>,
    /// Graduate-school courses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amc_graduation: Option<u32>,
    /// Voluntary electives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vec: Option<u32>,
    /// Free electives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fec: Option<u32>,
}

impl RawInputs {
    const fn slot(&self, category: Category) -> &Option<u32> {
        match category {
            Category::Hiyoshi12X => &self.hiyoshi12x,
            Category::Hiyoshi12Y => &self.hiyoshi12y,
            Category::Hiyoshi12Pe => &self.hiyoshi12pe,
            Category::Hiyoshi34X => &self.hiyoshi34x,
            Category::Hiyoshi34Y => &self.hiyoshi34y,
            Category::Hiyoshi34Pe => &self.hiyoshi34pe,
            Category::Yagami => &self.yagami,
            Category::English => &self.english,
            Category::Second => &self.second,
            Category::FoundationalRequired => &self.fc_required,
            Category::Math => &self.math,
            Category::Physics => &self.physics,
            Category::Chemistry => &self.chemistry,
            Category::BasicMajorRequired => &self.bmc_required,
            Category::BasicMajorElective => &self.bmc_elective,
            Category::AdvancedMajorRequired3 => &self.amc_required3,
            Category::AdvancedMajorRequired4 => &self.amc_required4,
            Category::AdvancedMajorElective => &self.amc_elective,
            Category::AdvancedMajorRelated => &self.amc_related,
            Category::AdvancedMajorGraduation => &self.amc_graduation,
            Category::VoluntaryElective => &self.vec,
            Category::FreeElective => &self.fec,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<u32> {
        match category {
            Category::Hiyoshi12X => &mut self.hiyoshi12x,
            Category::Hiyoshi12Y => &mut self.hiyoshi12y,
            Category::Hiyoshi12Pe => &mut self.hiyoshi12pe,
            Category::Hiyoshi34X => &mut self.hiyoshi34x,
            Category::Hiyoshi34Y => &mut self.hiyoshi34y,
            Category::Hiyoshi34Pe => &mut self.hiyoshi34pe,
            Category::Yagami => &mut self.yagami,
            Category::English => &mut self.english,
            Category::Second => &mut self.second,
            Category::FoundationalRequired => &mut self.fc_required,
            Category::Math => &mut self.math,
            Category::Physics => &mut self.physics,
            Category::Chemistry => &mut self.chemistry,
            Category::BasicMajorRequired => &mut self.bmc_required,
            Category::BasicMajorElective => &mut self.bmc_elective,
            Category::AdvancedMajorRequired3 => &mut self.amc_required3,
            Category::AdvancedMajorRequired4 => &mut self.amc_required4,
            Category::AdvancedMajorElective => &mut self.amc_elective,
            Category::AdvancedMajorRelated => &mut self.amc_related,
            Category::AdvancedMajorGraduation => &mut self.amc_graduation,
            Category::VoluntaryElective => &mut self.vec,
            Category::FreeElective => &mut self.fec,
        }
    }

    /// Value as entered, regardless of gating
    #[must_use]
    pub const fn get(&self, category: Category) -> Option<u32> {
        *self.slot(category)
    }

    /// Replace one field; `None` clears it
    pub fn set(&mut self, category: Category, credits: Option<u32>) {
        *self.slot_mut(category) = credits;
    }

    /// Credits that count for `category` under `selectors`.
    ///
    /// Missing values and gated-off categories both yield zero.
    #[must_use]
    pub fn effective(&self, category: Category, selectors: &Selectors) -> u32 {
        if category.is_active(selectors) {
            self.get(category).unwrap_or(0)
        } else {
            0
        }
    }

    /// Categories that hold a value but do not count under `selectors`
    #[must_use]
    pub fn stale_categories(&self, selectors: &Selectors) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.get(*category).is_some() && !category.is_active(selectors))
            .collect()
    }

    /// Whether no field has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|category| self.get(*category).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_every_category() {
        let mut inputs = RawInputs::default();
        for (credits, category) in (1..).zip(Category::ALL) {
            inputs.set(category, Some(credits));
        }
        for (credits, category) in (1..).zip(Category::ALL) {
            assert_eq!(inputs.get(category), Some(credits));
        }
    }

    #[test]
    fn test_clear_field() {
        let mut inputs = RawInputs::default();
        inputs.set(Category::Math, Some(4));
        assert!(!inputs.is_empty());
        inputs.set(Category::Math, None);
        assert!(inputs.is_empty());
    }

    #[test]
    fn test_effective_ignores_gated_values() {
        let mut inputs = RawInputs::default();
        inputs.set(Category::Hiyoshi34X, Some(5));
        let grade2 = Selectors::new(None, Some(2), None);
        let grade3 = Selectors::new(None, Some(3), None);

        assert_eq!(inputs.effective(Category::Hiyoshi34X, &grade2), 0);
        assert_eq!(inputs.effective(Category::Hiyoshi34X, &grade3), 5);
        assert_eq!(inputs.effective(Category::Hiyoshi12X, &grade3), 0);
    }

    #[test]
    fn test_stale_categories() {
        let mut inputs = RawInputs::default();
        inputs.set(Category::Second, Some(4));
        inputs.set(Category::English, Some(4));
        let stale = inputs.stale_categories(&Selectors::default());
        assert_eq!(stale, vec![Category::Second]);
    }
}
