//! Keyword intent classifier.
//!
//! Deterministic, case-insensitive, substring-based. Categories are
//! evaluated in a fixed priority order and the first match wins — when a
//! message mentions both a job and a scholarship, it is a job request.
//! That tie-break is part of the contract, not an accident.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Canonical category of a user's request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Job,
    Internship,
    Scholarship,
    Fellowship,
    Scheme,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Job => "job",
            Self::Internship => "internship",
            Self::Scholarship => "scholarship",
            Self::Fellowship => "fellowship",
            Self::Scheme => "scheme",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classifier rule: an intent and its compiled keyword pattern.
#[derive(Debug)]
struct IntentRule {
    intent: Intent,
    keywords: Regex,
}

/// Priority-ordered keyword classifier.
///
/// Keyword sets are disjoint across categories; patterns match anywhere
/// in the message ("intern" matches "internship" by design).
#[derive(Debug)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Build the classifier with the canonical priority order:
    /// job → internship → scholarship → fellowship → scheme.
    pub fn new() -> Self {
        let rules = vec![
            IntentRule {
                intent: Intent::Job,
                keywords: Regex::new(r"(?i)(job|naukri|employment)").unwrap(),
            },
            IntentRule {
                intent: Intent::Internship,
                keywords: Regex::new(r"(?i)(intern|training)").unwrap(),
            },
            IntentRule {
                intent: Intent::Scholarship,
                keywords: Regex::new(r"(?i)(scholarship|stipend)").unwrap(),
            },
            IntentRule {
                intent: Intent::Fellowship,
                keywords: Regex::new(r"(?i)(fellowship|research grant)").unwrap(),
            },
            IntentRule {
                intent: Intent::Scheme,
                keywords: Regex::new(r"(?i)(scheme|yojana)").unwrap(),
            },
        ];
        Self { rules }
    }

    /// Classify a raw message. Returns [`Intent::Unknown`] if no keyword
    /// set matches. No side effects.
    pub fn classify(&self, text: &str) -> Intent {
        for rule in &self.rules {
            if rule.keywords.is_match(text) {
                return rule.intent;
            }
        }
        Intent::Unknown
    }
}
