//! Per-match explanation generation.
//!
//! The generator is a collaborator behind a trait: the pipeline only
//! needs (student, opportunity) → text. The built-in implementation is
//! rule-based; richer generators can be swapped in at the seam.

use crate::catalog::{Opportunity, StudentProfile};

/// Produces a human-readable justification for a matched opportunity.
pub trait ExplanationGenerator: Send + Sync {
    fn explain(&self, student: &StudentProfile, opportunity: &Opportunity) -> String;
}

/// Deterministic explanation from the eligibility facts themselves.
pub struct RuleBasedExplainer;

impl ExplanationGenerator for RuleBasedExplainer {
    fn explain(&self, student: &StudentProfile, opportunity: &Opportunity) -> String {
        format!(
            "Matches your {} education level, and at {} you are within the {} to {} age range. Apply before {}.",
            student.education_level,
            student.age,
            opportunity.eligibility.min_age,
            opportunity.eligibility.max_age,
            opportunity.deadline,
        )
    }
}
