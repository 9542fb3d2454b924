//! Supported interface languages and locale detection.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::{debug, instrument};

use super::messages::Messages;

/// Environment variables consulted for the system locale, highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// An interface language, identified by its ISO 639-1 code.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// Portuguese
    Pt,
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// German
    De,
    /// French
    Fr,
    /// Korean
    Ko,
    /// Chinese
    Zh,
    /// Japanese
    Ja,
}

impl Language {
    /// Look up a language by its code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        code.trim().to_ascii_lowercase().parse().ok()
    }

    /// Look up a language by its code, falling back to English.
    #[instrument]
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            debug!("unknown language code, using default");
            Self::default()
        })
    }

    /// The code this language is selected by.
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Comma-separated list of all codes, in display order.
    #[must_use]
    pub fn available_codes() -> String {
        Self::iter().map(Self::code).collect::<Vec<_>>().join(", ")
    }

    /// The string table for this language.
    #[must_use]
    pub fn messages(self) -> &'static Messages {
        Messages::for_language(self)
    }
}

/// Extract a supported language from a locale tag.
///
/// Accepts POSIX (`pt_BR.UTF-8`) and BCP 47 (`zh-Hans-CN`) forms; only the
/// primary subtag is used.
#[must_use]
pub fn parse_locale(tag: &str) -> Option<Language> {
    let primary = tag
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default();
    Language::from_code(primary)
}

/// First supported language among `LC_ALL`, `LC_MESSAGES` and `LANG`.
#[instrument]
pub fn detect_system_language() -> Option<Language> {
    detect_from(|var| std::env::var(var).ok())
}

/// Locale detection over an arbitrary variable lookup.
pub fn detect_from<F>(lookup: F) -> Option<Language>
where
    F: Fn(&str) -> Option<String>,
{
    let detected = LOCALE_ENV_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .filter(|value| !value.is_empty())
        .find_map(|value| parse_locale(&value));
    debug!(?detected, "system language detection");
    detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("pt"), Some(Language::Pt));
        assert_eq!(Language::from_code(" JA "), Some(Language::Ja));
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        assert_eq!(Language::resolve("de"), Language::De);
        assert_eq!(Language::resolve("klingon"), Language::En);
    }

    #[test]
    fn test_code_round_trips() {
        for language in Language::iter() {
            assert_eq!(language.to_string(), language.code());
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn test_available_codes() {
        assert_eq!(Language::available_codes(), "pt, en, es, de, fr, ko, zh, ja");
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!(parse_locale("pt_BR.UTF-8"), Some(Language::Pt));
        assert_eq!(parse_locale("zh-Hans-CN"), Some(Language::Zh));
        assert_eq!(parse_locale("de_DE@euro"), Some(Language::De));
        assert_eq!(parse_locale("fr"), Some(Language::Fr));
        assert_eq!(parse_locale("C"), None);
        assert_eq!(parse_locale("POSIX"), None);
        assert_eq!(parse_locale(""), None);
    }

    #[test]
    fn test_detect_respects_priority() {
        let env: HashMap<&str, &str> = [("LC_ALL", "ko_KR.UTF-8"), ("LANG", "es_ES.UTF-8")]
            .into_iter()
            .collect();

        let detected = detect_from(|var| env.get(var).map(|v| v.to_string()));
        assert_eq!(detected, Some(Language::Ko));
    }

    #[test]
    fn test_detect_skips_unsupported_and_empty() {
        let env: HashMap<&str, &str> = [("LC_ALL", ""), ("LC_MESSAGES", "C"), ("LANG", "ja_JP")]
            .into_iter()
            .collect();

        let detected = detect_from(|var| env.get(var).map(|v| v.to_string()));
        assert_eq!(detected, Some(Language::Ja));
    }

    #[test]
    fn test_detect_none() {
        assert_eq!(detect_from(|_| None), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Ko).unwrap(), "\"ko\"");
        let back: Language = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(back, Language::Fr);
    }
}
