//! Prompt selection
//!
//! Maps (language, style) to the system instruction sent to the rewrite
//! provider. Pure and total: every combination yields a deterministic,
//! non-empty instruction.

use crate::shared::types::{Language, Style};

/// Select the system instruction for a language/style combination.
pub fn instruction_for(language: Language, style: Style) -> &'static str {
    match (language, style) {
        (Language::Nl, Style::Professional) => {
            "You are a helpful assistant that improves Dutch text to be more professional and formal."
        }
        (Language::Nl, Style::Normal) => {
            "You are a helpful assistant that improves Dutch text in a normal, natural style."
        }
        (Language::Nl, Style::Rewrite) => {
            "You are a helpful assistant that rewrites Dutch text entirely while maintaining the original meaning."
        }
        (Language::Nl, Style::SpellCheck) => {
            "You are a helpful assistant that focuses on checking and correcting the spelling of Dutch text."
        }
        (Language::En, Style::Professional) => {
            "You are a helpful assistant that improves English text to be more professional and formal."
        }
        (Language::En, Style::Normal) => {
            "You are a helpful assistant that improves English text in a normal, natural style."
        }
        (Language::En, Style::Rewrite) => {
            "You are a helpful assistant that rewrites English text entirely while maintaining the original meaning."
        }
        (Language::En, Style::SpellCheck) => {
            "You are a helpful assistant that focuses on checking and correcting the spelling of English text."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_STYLES: [Style; 4] = [
        Style::Professional,
        Style::Normal,
        Style::Rewrite,
        Style::SpellCheck,
    ];
    const ALL_LANGUAGES: [Language; 2] = [Language::En, Language::Nl];

    #[test]
    fn every_combination_yields_a_non_empty_instruction() {
        for language in ALL_LANGUAGES {
            for style in ALL_STYLES {
                assert!(!instruction_for(language, style).is_empty());
            }
        }
    }

    #[test]
    fn combinations_are_distinct() {
        let mut seen = HashSet::new();
        for language in ALL_LANGUAGES {
            for style in ALL_STYLES {
                seen.insert(instruction_for(language, style));
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn unknown_style_routes_to_spell_check_instruction() {
        for language in ALL_LANGUAGES {
            assert_eq!(
                instruction_for(language, Style::parse("SomethingNew")),
                instruction_for(language, Style::SpellCheck)
            );
        }
    }
}
