use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Severity class of a registered pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Dealbreaker,
    Warning,
    Info,
}

/// A single lexical red-flag pattern.
///
/// The phrase is an ordered word sequence; the matcher is compiled once at
/// construction and requires the words to appear in order anywhere in the
/// scanned text, with arbitrary text (including newlines) between them.
#[derive(Debug, Clone)]
pub struct RedFlagPattern {
    phrase: String,
    severity: Severity,
    reason: String,
    weight: u32,
    matcher: Regex,
}

impl RedFlagPattern {
    pub fn new(phrase: &str, severity: Severity, reason: &str, weight: u32) -> Self {
        let phrase = phrase.to_lowercase();
        let matcher = compile_phrase(&phrase);
        Self {
            phrase,
            severity,
            reason: reason.to_string(),
            weight,
            matcher,
        }
    }

    pub fn dealbreaker(phrase: &str, reason: &str, weight: u32) -> Self {
        Self::new(phrase, Severity::Dealbreaker, reason, weight)
    }

    pub fn warning(phrase: &str, reason: &str, weight: u32) -> Self {
        Self::new(phrase, Severity::Warning, reason, weight)
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Pure predicate over (pattern, text); no partial credit.
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

fn compile_phrase(phrase: &str) -> Regex {
    let escaped: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    RegexBuilder::new(&escaped.join(".*"))
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .expect("escaped phrase words always compile to a valid regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_phrase() {
        let pattern = RedFlagPattern::dealbreaker("verhuur niet toegestaan", "no rental", 100);
        assert!(pattern.matches("verhuur niet toegestaan"));
    }

    #[test]
    fn matches_words_with_arbitrary_filler() {
        let pattern = RedFlagPattern::dealbreaker("verhuur niet toegestaan", "no rental", 100);
        assert!(pattern.matches("verhuur is op dit park helaas niet aan derden toegestaan"));
        assert!(pattern.matches("verhuur...\nniet\n\ntoegestaan"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let pattern = RedFlagPattern::dealbreaker("Landal", "park operator", 100);
        assert!(pattern.matches("verhuur via LANDAL GreenParks"));
    }

    #[test]
    fn words_out_of_order_do_not_match() {
        let pattern = RedFlagPattern::dealbreaker("verhuur niet toegestaan", "no rental", 100);
        assert!(!pattern.matches("toegestaan is verhuur, niet?"));
    }

    #[test]
    fn skipped_words_do_not_match() {
        let pattern = RedFlagPattern::warning("geen eigendom grond", "leasehold", 55);
        assert!(!pattern.matches("geen grond"));
    }

    #[test]
    fn phrase_with_regex_metacharacters_is_taken_literally() {
        let pattern = RedFlagPattern::warning("parkkosten €", "park costs", 30);
        assert!(pattern.matches("parkkosten € 3.000 per jaar"));
        assert!(!pattern.matches("parkkosten onbekend"));
    }
}
