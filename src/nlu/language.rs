//! Romanized-token language detector.
//!
//! Fixed-priority token sets per locale, first match wins, `en` default.
//! Tokens are matched on word boundaries: short romanized words like "ki"
//! or "mu" would otherwise fire inside ordinary English words.
//!
//! Detection runs exactly once, when a session is created; the result is
//! frozen for the session's lifetime.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Locale code for prompts and answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Hi,
    Or,
    Mr,
    Bn,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Or => "or",
            Self::Mr => "mr",
            Self::Bn => "bn",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detector rule: a locale and its compiled token pattern.
#[derive(Debug)]
struct LocaleRule {
    locale: Locale,
    tokens: Regex,
}

/// Priority-ordered locale detector over romanized tokens.
#[derive(Debug)]
pub struct LanguageDetector {
    rules: Vec<LocaleRule>,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    pub fn new() -> Self {
        let rules = vec![
            LocaleRule {
                locale: Locale::Hi,
                tokens: Regex::new(r"(?i)\b(chahiye|mujhe|kya|kaise|hai)\b").unwrap(),
            },
            LocaleRule {
                locale: Locale::Or,
                tokens: Regex::new(r"(?i)\b(mu|tume|khojuchi|darkar)\b").unwrap(),
            },
            LocaleRule {
                locale: Locale::Mr,
                tokens: Regex::new(r"(?i)\b(mala|pahije|ahe|kaay)\b").unwrap(),
            },
            LocaleRule {
                locale: Locale::Bn,
                tokens: Regex::new(r"(?i)\b(amar|chai|ki|lagbe)\b").unwrap(),
            },
        ];
        Self { rules }
    }

    /// Detect the locale of a raw message. Defaults to [`Locale::En`].
    pub fn detect(&self, text: &str) -> Locale {
        for rule in &self.rules {
            if rule.tokens.is_match(text) {
                return rule.locale;
            }
        }
        Locale::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_locale() {
        let d = LanguageDetector::new();
        assert_eq!(d.detect("mujhe scholarship chahiye"), Locale::Hi);
        assert_eq!(d.detect("mu scholarship khojuchi"), Locale::Or);
        assert_eq!(d.detect("mala internship pahije"), Locale::Mr);
        assert_eq!(d.detect("amar scholarship lagbe"), Locale::Bn);
    }

    #[test]
    fn defaults_to_english() {
        let d = LanguageDetector::new();
        assert_eq!(d.detect("I need a scholarship"), Locale::En);
        assert_eq!(d.detect(""), Locale::En);
    }

    #[test]
    fn priority_order_on_overlap() {
        let d = LanguageDetector::new();
        // "kya" (hi) appears before "ki" (bn) in the priority list
        assert_eq!(d.detect("kya ki"), Locale::Hi);
    }

    #[test]
    fn tokens_only_match_whole_words() {
        let d = LanguageDetector::new();
        // "ki" inside "looking", "mu" inside "much", "hai" inside "hail"
        assert_eq!(d.detect("looking for work"), Locale::En);
        assert_eq!(d.detect("thanks so much"), Locale::En);
        assert_eq!(d.detect("hail storm damage claim"), Locale::En);
    }

    #[test]
    fn case_insensitive() {
        let d = LanguageDetector::new();
        assert_eq!(d.detect("MUJHE job CHAHIYE"), Locale::Hi);
    }
}
