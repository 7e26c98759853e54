use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Rewrite style selected by one of the four window buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub enum Style {
    Professional,
    Normal,
    Rewrite,
    SpellCheck,
}

impl Style {
    /// Parse a style name coming from the frontend.
    ///
    /// Unknown values fall back to SpellCheck. This is the intended
    /// catch-all branch, not an error path.
    pub fn parse(value: &str) -> Self {
        match value {
            "Professional" => Style::Professional,
            "Normal" => Style::Normal,
            "Rewrite" => Style::Rewrite,
            _ => Style::SpellCheck,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Style::Professional => "Professional",
            Style::Normal => "Normal",
            Style::Rewrite => "Rewrite",
            Style::SpellCheck => "Spell Check",
        }
    }
}

/// Languages the prompt table knows about. Anything the detector cannot
/// classify becomes `En`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub enum Language {
    #[default]
    En,
    Nl,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
        }
    }

    /// Map a detected ISO 639-1 code onto the supported set.
    /// Unrecognized codes default to English, never an error.
    pub fn from_code(code: &str) -> Self {
        match code {
            "nl" => Language::Nl,
            _ => Language::En,
        }
    }
}

/// Visible state of the improver window content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub enum UiState {
    #[default]
    Hidden,
    Loading,
    Displaying,
}

/// Snapshot of the two text panes, rendered by the frontend verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub struct PaneView {
    pub state: UiState,
    pub original: String,
    pub improved: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_styles() {
        assert_eq!(Style::parse("Professional"), Style::Professional);
        assert_eq!(Style::parse("Normal"), Style::Normal);
        assert_eq!(Style::parse("Rewrite"), Style::Rewrite);
        assert_eq!(Style::parse("SpellCheck"), Style::SpellCheck);
    }

    #[test]
    fn unknown_style_falls_back_to_spell_check() {
        assert_eq!(Style::parse("Pirate"), Style::SpellCheck);
        assert_eq!(Style::parse(""), Style::SpellCheck);
    }

    #[test]
    fn unknown_language_code_defaults_to_english() {
        assert_eq!(Language::from_code("nl"), Language::Nl);
        assert_eq!(Language::from_code("de"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }
}
