//! Localization: supported languages, the string catalog and lookup.
//!
//! The catalog is a JSON document embedded at compile time
//! (`locales/catalog.json`) mapping language code → key → text. Lookup falls
//! back to English, then to the key itself, so a missing translation never
//! renders as an empty string.

use crate::config::LANGUAGE_KEY;
use crate::error::ParseError;
use crate::storage::{read_or_none, PreferenceStore};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

const CATALOG_JSON: &str = include_str!("../locales/catalog.json");

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Bn,
    Ta,
    Te,
    Mr,
    Gu,
    Kn,
    Ml,
    Pa,
}

impl Language {
    /// All languages in menu order.
    pub const ALL: [Language; 10] = [
        Language::En,
        Language::Hi,
        Language::Bn,
        Language::Ta,
        Language::Te,
        Language::Mr,
        Language::Gu,
        Language::Kn,
        Language::Ml,
        Language::Pa,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Bn => "bn",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Mr => "mr",
            Language::Gu => "gu",
            Language::Kn => "kn",
            Language::Ml => "ml",
            Language::Pa => "pa",
        }
    }

    /// Name of the language in its own script.
    pub fn native_label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Bn => "বাংলা",
            Language::Ta => "தமிழ்",
            Language::Te => "తెలుగు",
            Language::Mr => "मराठी",
            Language::Gu => "ગુજરાતી",
            Language::Kn => "ಕನ್ನಡ",
            Language::Ml => "മലയാളം",
            Language::Pa => "ਪੰਜਾਬੀ",
        }
    }

    /// Upper-case code as shown on the language menu button.
    pub fn badge(self) -> String {
        self.code().to_uppercase()
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| ParseError::UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translation strings keyed by language, then by message key.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    /// Parses a catalog from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The catalog bundled with the application, parsed once.
    ///
    /// A malformed bundle yields an empty catalog (every lookup returns its
    /// key) rather than failing startup.
    pub fn bundled() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| match Catalog::from_json(CATALOG_JSON) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Failed to parse bundled translation catalog: {}", e);
                Catalog::default()
            }
        })
    }

    /// Exact lookup without fallback.
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.entries
            .get(&language)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}

/// Current language plus access to the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Localization {
    language: Language,
    catalog: &'static Catalog,
}

impl PartialEq for Localization {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && std::ptr::eq(self.catalog, other.catalog)
    }
}

impl Localization {
    pub fn new(language: Language, catalog: &'static Catalog) -> Self {
        Self { language, catalog }
    }

    /// Localization over the bundled catalog, starting in the persisted
    /// language (English when nothing valid is stored).
    pub fn restore<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        Self::new(load_language(store), Catalog::bundled())
    }

    pub fn current_language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Looks up `key`: current language, then English, then the key itself.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.catalog
            .get(self.language, key)
            .or_else(|| self.catalog.get(Language::En, key))
            .unwrap_or(key)
    }
}

/// Reads the persisted language, defaulting to English.
pub fn load_language<S: PreferenceStore + ?Sized>(store: &S) -> Language {
    match read_or_none(store, LANGUAGE_KEY) {
        Some(code) => code.parse().unwrap_or_else(|e| {
            debug!("Ignoring persisted language: {}", e);
            Language::default()
        }),
        None => Language::default(),
    }
}

/// Persists the selected language. Failures are logged and dropped.
pub fn save_language<S: PreferenceStore + ?Sized>(store: &S, language: Language) {
    if let Err(e) = store.set(LANGUAGE_KEY, language.code()) {
        warn!("Failed to persist language: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryPreferenceStore;

    #[test]
    fn test_language_order_and_codes() {
        let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(
            codes,
            vec!["en", "hi", "bn", "ta", "te", "mr", "gu", "kn", "ml", "pa"]
        );
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("ta".parse::<Language>(), Ok(Language::Ta));
        assert_eq!(
            "fr".parse::<Language>(),
            Err(ParseError::UnknownLanguage("fr".to_string()))
        );
        assert_eq!(Language::Pa.badge(), "PA");
    }

    #[test]
    fn test_bundled_catalog_covers_every_language() {
        let catalog = Catalog::bundled();
        for lang in Language::ALL {
            assert!(
                catalog.get(lang, "nav.home").is_some(),
                "missing nav.home for {lang}"
            );
        }
    }

    #[test]
    fn test_translate_falls_back_to_english_then_key() {
        let catalog: &'static Catalog = Box::leak(Box::new(
            Catalog::from_json(r#"{"en": {"a": "A", "b": "B"}, "hi": {"a": "अ"}}"#).unwrap(),
        ));
        let mut l10n = Localization::new(Language::Hi, catalog);

        assert_eq!(l10n.translate("a"), "अ");
        assert_eq!(l10n.translate("b"), "B");
        assert_eq!(l10n.translate("missing.key"), "missing.key");

        l10n.set_language(Language::En);
        assert_eq!(l10n.translate("a"), "A");
    }

    #[test]
    fn test_language_persistence() {
        let store = InMemoryPreferenceStore::new();
        assert_eq!(load_language(&store), Language::En);

        save_language(&store, Language::Kn);
        assert_eq!(load_language(&store), Language::Kn);
        assert_eq!(
            Localization::restore(&store).current_language(),
            Language::Kn
        );
    }

    #[test]
    fn test_unknown_persisted_language_defaults_to_english() {
        let store = InMemoryPreferenceStore::with_entries([(LANGUAGE_KEY, "xx")]);
        assert_eq!(load_language(&store), Language::En);
    }
}
