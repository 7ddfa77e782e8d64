//! Eligibility checks — pure predicates over student and opportunity.
//!
//! Two independent checks, both required: exact education-level match and
//! inclusive age bounds. The first failing check names the reason.

use serde::{Deserialize, Serialize};

use crate::catalog::{Opportunity, StudentProfile};

/// Why a student does not qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibilityReason {
    EducationMismatch,
    AgeOutOfRange,
}

impl std::fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::EducationMismatch => "Education level does not match",
            Self::AgeOutOfRange => "Age criteria not satisfied",
        };
        f.write_str(s)
    }
}

/// Outcome of an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible(IneligibilityReason),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// Check a student against an opportunity. Pure, no side effects.
pub fn check(student: &StudentProfile, opportunity: &Opportunity) -> Eligibility {
    if student.education_level != opportunity.education_level {
        return Eligibility::Ineligible(IneligibilityReason::EducationMismatch);
    }

    let bounds = opportunity.eligibility;
    if student.age < bounds.min_age || student.age > bounds.max_age {
        return Eligibility::Ineligible(IneligibilityReason::AgeOutOfRange);
    }

    Eligibility::Eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_opportunity;

    fn student(age: u32, education_level: &str) -> StudentProfile {
        StudentProfile {
            age,
            education_level: education_level.to_string(),
        }
    }

    #[test]
    fn matching_student_is_eligible() {
        let opp = sample_opportunity("a", "2026-09-30"); // ages 18–25, graduate
        assert!(check(&student(22, "graduate"), &opp).is_eligible());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let opp = sample_opportunity("a", "2026-09-30");
        assert!(check(&student(18, "graduate"), &opp).is_eligible());
        assert!(check(&student(25, "graduate"), &opp).is_eligible());
    }

    #[test]
    fn one_year_outside_either_bound_is_ineligible() {
        let opp = sample_opportunity("a", "2026-09-30");
        assert_eq!(
            check(&student(17, "graduate"), &opp),
            Eligibility::Ineligible(IneligibilityReason::AgeOutOfRange)
        );
        assert_eq!(
            check(&student(26, "graduate"), &opp),
            Eligibility::Ineligible(IneligibilityReason::AgeOutOfRange)
        );
    }

    #[test]
    fn education_is_an_exact_categorical_match() {
        let opp = sample_opportunity("a", "2026-09-30");
        assert_eq!(
            check(&student(22, "undergraduate"), &opp),
            Eligibility::Ineligible(IneligibilityReason::EducationMismatch)
        );
    }

    #[test]
    fn education_check_runs_first() {
        // Both checks fail; the education reason wins
        let opp = sample_opportunity("a", "2026-09-30");
        assert_eq!(
            check(&student(40, "diploma"), &opp),
            Eligibility::Ineligible(IneligibilityReason::EducationMismatch)
        );
    }

    #[test]
    fn reason_display_strings() {
        assert_eq!(
            IneligibilityReason::EducationMismatch.to_string(),
            "Education level does not match"
        );
        assert_eq!(
            IneligibilityReason::AgeOutOfRange.to_string(),
            "Age criteria not satisfied"
        );
    }
}
