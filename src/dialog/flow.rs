//! Static per-intent question flows.
//!
//! Each intent owns an ordered list of (field, prompt) pairs. The order is
//! the only valid question sequence: a field earlier in the list is always
//! asked before a later one. Loaded once at startup, immutable after.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::i18n::PhraseKey;
use crate::nlu::Intent;

/// A profile attribute collected during the dialog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Age,
    Education,
    Location,
    WorkMode,
    Field,
    Category,
    Gender,
    Income,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Education => "education",
            Self::Location => "location",
            Self::WorkMode => "work_mode",
            Self::Field => "field",
            Self::Category => "category",
            Self::Gender => "gender",
            Self::Income => "income",
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a question flow.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub field: ProfileField,
    pub prompt: PhraseKey,
}

/// Static intent → ordered question list table.
#[derive(Debug)]
pub struct QuestionFlow {
    flows: HashMap<Intent, Vec<Question>>,
}

impl Default for QuestionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionFlow {
    pub fn new() -> Self {
        use PhraseKey::*;
        use ProfileField::*;

        let q = |field, prompt| Question { field, prompt };

        let mut flows = HashMap::new();
        flows.insert(
            Intent::Job,
            vec![
                q(Age, PromptAge),
                q(Education, PromptEducationOrExperience),
                q(Location, PromptCityState),
                q(WorkMode, PromptWorkMode),
            ],
        );
        flows.insert(
            Intent::Internship,
            vec![
                q(Education, PromptDegreeStudying),
                q(Field, PromptFieldOfInterest),
                q(Location, PromptCityState),
                q(WorkMode, PromptWorkMode),
            ],
        );
        flows.insert(
            Intent::Scholarship,
            vec![
                q(Education, PromptClassOrDegree),
                q(Category, PromptCategory),
                q(Gender, PromptGender),
                q(Location, PromptState),
            ],
        );
        flows.insert(
            Intent::Fellowship,
            vec![
                q(Education, PromptQualification),
                q(Field, PromptFieldOrSubject),
                q(Gender, PromptGender),
                q(Location, PromptState),
            ],
        );
        flows.insert(
            Intent::Scheme,
            vec![
                q(Age, PromptAge),
                q(Gender, PromptGender),
                q(Category, PromptCategory),
                q(Income, PromptIncome),
                q(Location, PromptState),
            ],
        );

        Self { flows }
    }

    /// The ordered question list for an intent. Empty for intents with no
    /// flow (unknown).
    pub fn questions(&self, intent: Intent) -> &[Question] {
        self.flows.get(&intent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether an intent has any questions at all.
    pub fn has_questions(&self, intent: Intent) -> bool {
        !self.questions(intent).is_empty()
    }
}
