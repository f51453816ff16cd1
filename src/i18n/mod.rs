pub mod templates;

use serde::{Deserialize, Serialize};

pub use templates::TranslatedTemplate;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    /// Hinglish (Hindi + English mix).
    Hi,
}

impl Language {
    /// Exact match on the two-letter code; no case folding.
    pub fn from_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hinglish (Hindi + English)",
        }
    }
}

pub fn supported_languages() -> &'static [Language] {
    &[Language::En, Language::Hi]
}

/// Translates an English explanation. `En` is the identity.
///
/// `Hi` is a substitution stub, not a translator: each pair of
/// [`templates::HINGLISH_REPLACEMENTS`] is applied as a global literal
/// replacement over the running text, longest pattern first, authoring order
/// among equal lengths.
pub fn translate_explanation(text: &str, language: Language) -> String {
    match language {
        Language::En => text.to_string(),
        Language::Hi => {
            let mut pairs: Vec<&(&str, &str)> = templates::HINGLISH_REPLACEMENTS.iter().collect();
            pairs.sort_by_key(|(pattern, _)| std::cmp::Reverse(pattern.chars().count()));
            pairs
                .into_iter()
                .fold(text.to_string(), |acc, (pattern, replacement)| {
                    acc.replace(pattern, replacement)
                })
        }
    }
}

/// Hand-written translation for `class_name`, when one exists.
pub fn translated_template(
    class_name: &str,
    language: Language,
) -> Option<&'static TranslatedTemplate> {
    match language {
        Language::En => None,
        Language::Hi => templates::HINGLISH_TEMPLATES
            .iter()
            .find(|(name, _)| *name == class_name)
            .map(|(_, template)| template),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn language_codes_roundtrip() {
        for language in Language::iter() {
            assert_eq!(Language::from_code(language.code()), Some(language));
            assert_eq!(language.to_string(), language.code());
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("HI"), None);
        assert_eq!(Language::Hi.display_name(), "Hinglish (Hindi + English)");
        assert_eq!(supported_languages().len(), 2);
    }

    #[test]
    fn english_is_identity() {
        let text = "You tried to divide a number by zero";
        assert_eq!(translate_explanation(text, Language::En), text);
    }

    #[test]
    fn hinglish_applies_longest_patterns_first() {
        assert_eq!(
            translate_explanation("You tried to divide a number by zero", Language::Hi),
            "Aapne koshish ki to divide a number by zero"
        );
        assert_eq!(
            translate_explanation("Something went wrong in the program", Language::Hi),
            "Kuch galat ho gaya in program"
        );
    }

    #[test]
    fn hinglish_replaces_every_occurrence() {
        assert_eq!(
            translate_explanation("Check the spelling. It's like a wrong key", Language::Hi),
            "Check karein the spelling. Yeh aisa hai jaise a galat key"
        );
        assert_eq!(
            translate_explanation("Make sure you Use the correct file", Language::Hi),
            "Pakka karein you Use karein the sahi file"
        );
    }

    #[test]
    fn templates_exist_only_for_hinglish() {
        assert!(translated_template("NameError", Language::Hi).is_some());
        assert!(translated_template("NameError", Language::En).is_none());
        assert!(translated_template("MemoryError", Language::Hi).is_none());
        for (name, _) in templates::HINGLISH_TEMPLATES {
            assert!(crate::catalog::contains(name), "{name} is not in the catalog");
        }
    }
}
