//! Per-phone-number dialog session.
//!
//! One session per phone number at a time. Intent and locale are set once
//! at creation and never change; the profile grows one answer per turn;
//! `step`, once advanced, only moves forward through the question flow.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dialog::flow::{ProfileField, Question, QuestionFlow};
use crate::nlu::{Intent, Locale};

/// Where the dialog currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DialogStep {
    /// Session created, no question asked yet.
    Start,
    /// Waiting for the answer to `field`.
    Awaiting { field: ProfileField },
}

/// Persisted dialog state for one phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Canonical intent, classified once at creation.
    pub intent: Intent,
    /// Locale, detected once at creation and frozen.
    pub locale: Locale,
    /// Collected answers, keyed by profile field.
    pub profile: BTreeMap<ProfileField, String>,
    /// The field currently awaiting an answer.
    pub step: DialogStep,
    /// True once every field of the intent's flow has an answer.
    pub completed: bool,
}

impl Session {
    /// Create a fresh session. `step` starts at [`DialogStep::Start`] —
    /// the initiating message is never consumed as an answer.
    pub fn new(intent: Intent, locale: Locale) -> Self {
        Self {
            intent,
            locale,
            profile: BTreeMap::new(),
            step: DialogStep::Start,
            completed: false,
        }
    }

    /// Record an answer for a field.
    pub fn record_answer(&mut self, field: ProfileField, answer: impl Into<String>) {
        self.profile.insert(field, answer.into());
    }

    /// First field of the intent's flow that has no answer yet.
    pub fn next_unanswered<'a>(&self, flow: &'a QuestionFlow) -> Option<&'a Question> {
        flow.questions(self.intent)
            .iter()
            .find(|q| !self.profile.contains_key(&q.field))
    }

    /// Advance `step` to the given field.
    pub fn advance_to(&mut self, field: ProfileField) {
        self.step = DialogStep::Awaiting { field };
    }

    /// Mark the session complete.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Profile answers joined in question-flow order, for segment
    /// extraction over everything the user told us.
    pub fn profile_text(&self, flow: &QuestionFlow) -> String {
        flow.questions(self.intent)
            .iter()
            .filter_map(|q| self.profile.get(&q.field).map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
