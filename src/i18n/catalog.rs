// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale catalog for the Wakita web client.
//!
//! The set of UI locales is fixed at compile time and does not depend on
//! any configuration. Display names are written in each language's own
//! script so the locale switcher reads naturally to a native speaker.
//!
//! ## Adding a new locale
//!
//! 1. Add a variant to [`Locale`]
//! 2. Add arms to `Locale::code()`, `Locale::from_code()` and
//!    `Locale::display_name()`
//! 3. Append the variant to `Locale::all()` (this is the catalog order)

use serde::ser::{Serialize, SerializeMap, Serializer};

/// UI locales the web client ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    De,
    En,
    Ru,
}

impl Locale {
    /// ISO 639-1 two-letter code for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Parse a locale code into a supported locale.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive, codes are
    /// lowercase as the client stores them.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "de" => Some(Locale::De),
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Native-script display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::De => "Deutsch",
            Locale::En => "English",
            Locale::Ru => "Русский",
        }
    }

    /// All supported locales, in catalog order.
    pub fn all() -> &'static [Locale] {
        &[Locale::De, Locale::En, Locale::Ru]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Mapping from locale code to display name.
///
/// Serializes as an ordered map (`{"de": "Deutsch", ...}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleCatalog;

impl LocaleCatalog {
    pub fn get(&self, code: &str) -> Option<&'static str> {
        Locale::from_code(code).map(|locale| locale.display_name())
    }

    pub fn contains(&self, code: &str) -> bool {
        Locale::from_code(code).is_some()
    }

    pub fn len(&self) -> usize {
        Locale::all().len()
    }

    pub fn is_empty(&self) -> bool {
        Locale::all().is_empty()
    }

    /// `(code, display name)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        Locale::all()
            .iter()
            .map(|locale| (locale.code(), locale.display_name()))
    }
}

impl Serialize for LocaleCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (code, name) in self.iter() {
            map.serialize_entry(code, name)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_roundtrip() {
        for locale in Locale::all() {
            let parsed = Locale::from_code(locale.code()).expect("should parse");
            assert_eq!(*locale, parsed);
        }
    }

    #[test]
    fn unknown_and_uppercase_codes_rejected() {
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn catalog_order_is_de_en_ru() {
        let codes: Vec<_> = LocaleCatalog.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["de", "en", "ru"]);
    }

    #[test]
    fn native_names() {
        assert_eq!(LocaleCatalog.get("de"), Some("Deutsch"));
        assert_eq!(LocaleCatalog.get("en"), Some("English"));
        assert_eq!(LocaleCatalog.get("ru"), Some("Русский"));
        assert_eq!(LocaleCatalog.get("ja"), None);
    }

    #[test]
    fn serializes_in_catalog_order() {
        let json = serde_json::to_string(&LocaleCatalog).expect("serialize");
        assert_eq!(json, r#"{"de":"Deutsch","en":"English","ru":"Русский"}"#);
    }
}
