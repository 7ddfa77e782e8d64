//! Profile segment extraction.
//!
//! Substring rules map free text onto a small closed set of segments used
//! to specialize knowledge-base answers. Pure and total: always returns a
//! value, `general` when nothing matches.

use serde::{Deserialize, Serialize};

/// Coarse profile category for knowledge-base specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Female,
    Senior,
    Student,
    General,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Senior => "senior",
            Self::Student => "student",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substring-rule segment extractor.
#[derive(Debug, Default)]
pub struct SegmentExtractor;

impl SegmentExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract a segment from free text. Rules are checked in order;
    /// the first hit wins.
    pub fn extract(&self, text: &str) -> Segment {
        let msg = text.to_lowercase();

        if msg.contains("female") || msg.contains("woman") || msg.contains("girl") {
            return Segment::Female;
        }
        if msg.contains("senior") || msg.contains("old") {
            return Segment::Senior;
        }
        if msg.contains("student") {
            return Segment::Student;
        }

        Segment::General
    }
}
