//! Data models for `CreditTally`

pub mod category;
pub mod inputs;
pub mod requirement;
pub mod selectors;

pub use category::{Category, Gate, Group};
pub use inputs::RawInputs;
pub use requirement::{lookup_requirement, DepartmentRequirement, RequirementRow, DEPARTMENTS};
pub use selectors::{SecondLanguage, Selectors};
