//! Phrase-table translation.
//!
//! Every message the assistant can produce is identified by a symbolic
//! [`PhraseKey`]; the English wording lives on the key and per-locale
//! tables override it. Lookups are keyed, never spelled — rewording an
//! English prompt cannot break its translations.
//!
//! This is phrase-exact translation over the finite set of texts the
//! system itself produces, not free-form machine translation. A key
//! missing from a locale's table silently falls back to English.

use std::collections::HashMap;

use crate::nlu::Locale;

/// Stable identifier for a translatable phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseKey {
    // Question prompts
    PromptAge,
    PromptEducationOrExperience,
    PromptCityState,
    PromptWorkMode,
    PromptDegreeStudying,
    PromptFieldOfInterest,
    PromptClassOrDegree,
    PromptCategory,
    PromptGender,
    PromptState,
    PromptQualification,
    PromptFieldOrSubject,
    PromptIncome,

    // Knowledge-base summaries
    SummaryJobGeneral,
    SummaryJobStudent,
    SummaryInternshipGeneral,
    SummaryInternshipStudent,
    SummaryScholarshipGeneral,
    SummaryFellowshipGeneral,
    SummarySchemeGeneral,
    SummarySchemeFemale,

    // Fixed service phrases
    LinksLabel,
    CouldNotUnderstand,
    ApologyFallback,
}

impl PhraseKey {
    /// Canonical English wording.
    pub fn english(&self) -> &'static str {
        match self {
            Self::PromptAge => "What is your age?",
            Self::PromptEducationOrExperience => "What is your education or experience?",
            Self::PromptCityState => "Which city/state are you from?",
            Self::PromptWorkMode => "Do you prefer WFH or WFO?",
            Self::PromptDegreeStudying => "Which degree or class are you studying in?",
            Self::PromptFieldOfInterest => "Which field are you interested in?",
            Self::PromptClassOrDegree => "Which class or degree are you studying in?",
            Self::PromptCategory => "Your category? (General / OBC / SC / ST)",
            Self::PromptGender => "Your gender?",
            Self::PromptState => "Which state are you from?",
            Self::PromptQualification => "Your highest qualification?",
            Self::PromptFieldOrSubject => "Which field or subject?",
            Self::PromptIncome => "Approx annual family income?",

            Self::SummaryJobGeneral => "Here are some job opportunities.",
            Self::SummaryJobStudent => "Entry-level job openings for students.",
            Self::SummaryInternshipGeneral => "Here are some internship opportunities.",
            Self::SummaryInternshipStudent => "Student internship opportunities.",
            Self::SummaryScholarshipGeneral => {
                "Here are some scholarship opportunities for students."
            }
            Self::SummaryFellowshipGeneral => {
                "Here are some fellowship and research grant opportunities."
            }
            Self::SummarySchemeGeneral => {
                "Here are some government schemes you may be eligible for."
            }
            Self::SummarySchemeFemale => "Women-specific government schemes.",

            Self::LinksLabel => " Links: ",
            Self::CouldNotUnderstand => {
                "Sorry, I couldn't understand. Try jobs, internship or schemes."
            }
            Self::ApologyFallback => {
                "Sorry, we don't have details for that yet. Please check https://www.myscheme.gov.in"
            }
        }
    }
}

/// Immutable phrase tables, loaded once at startup.
pub struct Translator {
    tables: HashMap<Locale, HashMap<PhraseKey, &'static str>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Build the built-in locale tables.
    pub fn new() -> Self {
        use PhraseKey::*;

        let mut tables: HashMap<Locale, HashMap<PhraseKey, &'static str>> = HashMap::new();

        tables.insert(
            Locale::Hi,
            HashMap::from([
                (
                    SummaryScholarshipGeneral,
                    "Yahan students ke liye kuch scholarship ke avsar diye gaye hain.",
                ),
                (PromptClassOrDegree, "Aap kis class ya degree mein padh rahe ho?"),
                (PromptCategory, "Aapki category kya hai? (General / OBC / SC / ST)"),
                (PromptGender, "Aapka gender kya hai?"),
                (PromptState, "Aap kis rajya se ho?"),
                (PromptAge, "Aapki age kya hai?"),
                (
                    CouldNotUnderstand,
                    "Maaf kijiye, samajh nahi aaya. Jobs, internship ya schemes try karein.",
                ),
            ]),
        );

        tables.insert(
            Locale::Or,
            HashMap::from([
                (
                    SummaryScholarshipGeneral,
                    "Ethi students mananka pain kichhi scholarship sujog achhi.",
                ),
                (PromptClassOrDegree, "Apana kon class ba degree re padhuchanti?"),
                (PromptCategory, "Apananka category kana? (General / OBC / SC / ST)"),
                (PromptGender, "Apananka gender kana?"),
                (PromptState, "Apana kon rajya ru?"),
            ]),
        );

        tables.insert(
            Locale::Mr,
            HashMap::from([
                (
                    SummaryScholarshipGeneral,
                    "विद्यार्थ्यांसाठी काही शिष्यवृत्ती संधी येथे दिल्या आहेत.",
                ),
                (LinksLabel, " दुवे: "),
                (
                    PromptClassOrDegree,
                    "तुम्ही कोणत्या वर्गात किंवा पदवीत शिक्षण घेत आहात?",
                ),
                (
                    PromptCategory,
                    "तुमची प्रवर्ग कोणती आहे? (General / OBC / SC / ST)",
                ),
                (PromptGender, "तुमचे लिंग काय आहे?"),
                (PromptState, "तुम्ही कोणत्या राज्यातून आहात?"),
            ]),
        );

        tables.insert(
            Locale::Bn,
            HashMap::from([
                (
                    SummaryScholarshipGeneral,
                    "Chhatro der jonno kichu scholarship sujog ekhane dewa holo.",
                ),
                (PromptClassOrDegree, "Tumi kon class ba degree e porcho?"),
                (PromptCategory, "Tomar category ki? (General / OBC / SC / ST)"),
                (PromptGender, "Tomar gender ki?"),
                (PromptState, "Tumi kon rajyer?"),
            ]),
        );

        Self { tables }
    }

    /// Resolve a phrase in a locale. English is the identity locale;
    /// a missing locale entry falls back to the English wording.
    pub fn resolve(&self, key: PhraseKey, locale: Locale) -> &str {
        if locale == Locale::En {
            return key.english();
        }
        self.tables
            .get(&locale)
            .and_then(|table| table.get(&key).copied())
            .unwrap_or_else(|| key.english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_identity() {
        let t = Translator::new();
        assert_eq!(
            t.resolve(PhraseKey::PromptGender, Locale::En),
            "Your gender?"
        );
    }

    #[test]
    fn translated_phrase_resolves() {
        let t = Translator::new();
        assert_eq!(
            t.resolve(PhraseKey::PromptGender, Locale::Hi),
            "Aapka gender kya hai?"
        );
        assert_eq!(
            t.resolve(PhraseKey::PromptClassOrDegree, Locale::Bn),
            "Tumi kon class ba degree e porcho?"
        );
    }

    #[test]
    fn missing_entry_falls_back_to_english() {
        let t = Translator::new();
        // No Odia wording for the income prompt exists
        assert_eq!(
            t.resolve(PhraseKey::PromptIncome, Locale::Or),
            PhraseKey::PromptIncome.english()
        );
    }

    #[test]
    fn marathi_localizes_links_label() {
        let t = Translator::new();
        assert_eq!(t.resolve(PhraseKey::LinksLabel, Locale::Mr), " दुवे: ");
        // Other locales keep the English label
        assert_eq!(t.resolve(PhraseKey::LinksLabel, Locale::Hi), " Links: ");
    }
}
