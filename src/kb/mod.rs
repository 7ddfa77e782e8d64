//! Static knowledge base — intent × segment → summary + links.
//!
//! Resolution never fails: a missing segment falls back to `general`, a
//! missing `general` entry yields an apology, and an unknown intent yields
//! the fixed could-not-understand phrase. Loaded once at startup,
//! immutable after.

use std::collections::HashMap;

use crate::i18n::PhraseKey;
use crate::nlu::{Intent, Segment};

/// One knowledge-base entry: a translatable summary plus reference links.
#[derive(Debug, Clone)]
pub struct KbEntry {
    pub summary: PhraseKey,
    pub links: Vec<&'static str>,
}

/// Outcome of a knowledge-base lookup. Always displayable.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// A real answer with at least one link.
    Answer(KbEntry),
    /// Known intent, but no entry to serve — apologize with the portal link.
    Apology,
    /// The intent was never understood.
    Unknown,
}

/// Static intent → segment → entry mapping.
#[derive(Debug)]
pub struct KnowledgeBase {
    entries: HashMap<Intent, HashMap<Segment, KbEntry>>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    pub fn new() -> Self {
        use Intent::*;
        use PhraseKey::*;

        let entry = |summary, links: &[&'static str]| KbEntry {
            summary,
            links: links.to_vec(),
        };

        let mut entries: HashMap<Intent, HashMap<Segment, KbEntry>> = HashMap::new();

        entries.insert(
            Job,
            HashMap::from([
                (
                    Segment::General,
                    entry(
                        SummaryJobGeneral,
                        &["https://www.sarkariresult.com", "https://www.freejobalert.com"],
                    ),
                ),
                (
                    Segment::Student,
                    entry(
                        SummaryJobStudent,
                        &["https://www.sarkariresult.com/student-jobs"],
                    ),
                ),
            ]),
        );
        entries.insert(
            Internship,
            HashMap::from([
                (
                    Segment::General,
                    entry(SummaryInternshipGeneral, &["https://internship.aicte-india.org"]),
                ),
                (
                    Segment::Student,
                    entry(
                        SummaryInternshipStudent,
                        &["https://internship.aicte-india.org/student"],
                    ),
                ),
            ]),
        );
        entries.insert(
            Scholarship,
            HashMap::from([(
                Segment::General,
                entry(
                    SummaryScholarshipGeneral,
                    &["https://scholarships.gov.in", "https://www.buddy4study.com"],
                ),
            )]),
        );
        entries.insert(
            Fellowship,
            HashMap::from([(
                Segment::General,
                entry(
                    SummaryFellowshipGeneral,
                    &["https://www.ugc.ac.in", "https://www.dst.gov.in"],
                ),
            )]),
        );
        entries.insert(
            Scheme,
            HashMap::from([
                (
                    Segment::General,
                    entry(SummarySchemeGeneral, &["https://www.myscheme.gov.in"]),
                ),
                (
                    Segment::Female,
                    entry(SummarySchemeFemale, &["https://www.myscheme.gov.in/women"]),
                ),
            ]),
        );

        Self { entries }
    }

    /// Look up `segment` under `intent`, falling back per the contract.
    pub fn resolve(&self, intent: Intent, segment: Segment) -> Resolution {
        let Some(segments) = self.entries.get(&intent) else {
            return Resolution::Unknown;
        };
        if let Some(entry) = segments.get(&segment) {
            return Resolution::Answer(entry.clone());
        }
        match segments.get(&Segment::General) {
            Some(entry) => Resolution::Answer(entry.clone()),
            None => Resolution::Apology,
        }
    }
}
