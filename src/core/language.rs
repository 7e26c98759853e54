//! Language detection for captured text.
//!
//! Classifies into the closed set the prompt table supports (English or
//! Dutch). Detection failure is never surfaced: empty input, short input and
//! anything unrecognizable all default to English.

use regex::Regex;
use std::sync::OnceLock;
use crate::shared::types::Language;

/// Inputs shorter than this are not worth classifying.
const MIN_DETECTABLE_LEN: usize = 4;

/// Common Dutch function words that rarely appear in English prose.
/// Deliberately excludes overlaps like "in", "is", "met" and "was".
const DUTCH_MARKERS: &[&str] = &[
    "het", "een", "ik", "je", "jij", "niet", "dat", "deze", "dit", "ook",
    "maar", "voor", "naar", "wel", "geen", "heb", "hebben", "wordt", "zijn",
    "mijn", "jouw", "jullie", "waarom", "omdat", "altijd", "vandaag", "goed",
    "goede", "tekst", "de", "en", "te", "dan", "nog", "alsjeblieft",
];

fn word_regex() -> &'static Regex {
    static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
    WORD_REGEX.get_or_init(|| Regex::new(r"\p{L}+").expect("valid word regex"))
}

/// Detect the language of captured text.
///
/// The fallback to English is unconditional: this function cannot fail and
/// never returns anything outside the supported set.
pub fn detect(text: &str) -> Language {
    let trimmed = text.trim();
    if trimmed.len() < MIN_DETECTABLE_LEN {
        return Language::En;
    }

    let words: Vec<String> = word_regex()
        .find_iter(trimmed)
        .map(|m| m.as_str().to_lowercase())
        .collect();

    if words.is_empty() {
        return Language::En;
    }

    let dutch_hits = words
        .iter()
        .filter(|w| DUTCH_MARKERS.contains(&w.as_str()))
        .count();

    // Two marker words and a meaningful share of the text reads as Dutch.
    if dutch_hits >= 2 && dutch_hits * 5 >= words.len() {
        Language::Nl
    } else {
        Language::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_english_prose() {
        assert_eq!(detect("The quick brown fox jumps over the lazy dog"), Language::En);
        assert_eq!(detect("Hello worlld, this sentence has a typo"), Language::En);
    }

    #[test]
    fn detects_dutch_prose() {
        assert_eq!(detect("Ik heb een nieuwe tekst geschreven maar deze is niet goed"), Language::Nl);
        assert_eq!(detect("Dit is een zin die je niet wilt lezen"), Language::Nl);
    }

    #[test]
    fn empty_and_short_input_default_to_english() {
        assert_eq!(detect(""), Language::En);
        assert_eq!(detect("   "), Language::En);
        assert_eq!(detect("ok"), Language::En);
    }

    #[test]
    fn unrecognizable_input_defaults_to_english() {
        assert_eq!(detect("42 17 99 100"), Language::En);
        assert_eq!(detect("你好世界你好世界"), Language::En);
    }

    #[test]
    fn isolated_marker_word_is_not_enough() {
        // "de" alone should not flip an English sentence to Dutch.
        assert_eq!(detect("Tour de France highlights from yesterday evening"), Language::En);
    }
}
