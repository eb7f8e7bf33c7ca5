//! Locale tables for month names and ordinal-day markers
//!
//! The tokenizer only ever sees a merged [`LocaleTable`]; where the names
//! come from is the provider's concern. [`BuiltinLocales`] ships static
//! tables for a handful of languages. Anything richer (CLDR extraction,
//! user vocabularies) plugs in through [`LocaleProvider`].

use crate::error::{DateOrderError, Result};
use rustc_hash::{FxHashMap, FxHashSet};

/// Merged month-name and ordinal-marker lookup tables
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    months: FxHashMap<String, u32>,
    ordinals: FxHashSet<String>,
}

impl LocaleTable {
    /// Insert a month name or abbreviation mapping to a 1-12 month number.
    ///
    /// Keys are stored lower-cased with one trailing period stripped. A
    /// remap of an existing name to a different number is surfaced as a
    /// warning and the newer value wins.
    pub fn insert_month(&mut self, name: &str, number: u32) {
        let key = normalize(name);
        if let Some(old) = self.months.insert(key.clone(), number) {
            if old != number {
                tracing::warn!(name = %key, old, new = number, "month name remapped");
            }
        }
    }

    /// Insert an ordinal-day marker ("st", "er", ...)
    pub fn insert_ordinal_marker(&mut self, marker: &str) {
        self.ordinals.insert(marker.to_lowercase());
    }

    /// Look up a fragment as a month name, returning its month number
    pub fn month_number(&self, fragment: &str) -> Option<u32> {
        self.months.get(&normalize(fragment)).copied()
    }

    /// Whether `suffix` is a known ordinal-day marker
    pub fn is_ordinal_marker(&self, suffix: &str) -> bool {
        self.ordinals.contains(&suffix.to_lowercase())
    }
}

fn normalize(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_lowercase()
}

/// Source of locale tables, injected into the parser at construction time
pub trait LocaleProvider {
    /// Produce the merged month-name and ordinal-marker tables
    fn locale_table(&self) -> Result<LocaleTable>;
}

/// Provider backed by built-in tables, selected by language code.
///
/// Codes are matched on their primary subtag, so `en-GB` and `en_US` both
/// resolve to the English tables. Later codes win when two languages spell
/// a month the same way.
#[derive(Debug, Clone)]
pub struct BuiltinLocales {
    codes: Vec<String>,
}

impl BuiltinLocales {
    pub fn new<I>(codes: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            codes: codes.into_iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }
}

impl LocaleProvider for BuiltinLocales {
    fn locale_table(&self) -> Result<LocaleTable> {
        if self.codes.is_empty() {
            return Err(DateOrderError::EmptyLocales);
        }
        let mut table = LocaleTable::default();
        for code in &self.codes {
            let data =
                builtin(code).ok_or_else(|| DateOrderError::UnknownLocale(code.clone()))?;
            for &(name, number) in data.months {
                table.insert_month(name, number);
            }
            for &marker in data.ordinal_markers {
                table.insert_ordinal_marker(marker);
            }
        }
        Ok(table)
    }
}

struct LocaleData {
    months: &'static [(&'static str, u32)],
    ordinal_markers: &'static [&'static str],
}

fn builtin(code: &str) -> Option<&'static LocaleData> {
    let primary = code
        .split(['-', '_'])
        .next()
        .unwrap_or(code)
        .to_lowercase();
    match primary.as_str() {
        "en" => Some(&EN),
        "fr" => Some(&FR),
        "de" => Some(&DE),
        "es" => Some(&ES),
        "it" => Some(&IT),
        _ => None,
    }
}

static EN: LocaleData = LocaleData {
    months: &[
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("sept", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ],
    ordinal_markers: &["st", "nd", "rd", "th"],
};

static FR: LocaleData = LocaleData {
    months: &[
        ("janvier", 1),
        ("février", 2),
        ("mars", 3),
        ("avril", 4),
        ("mai", 5),
        ("juin", 6),
        ("juillet", 7),
        ("août", 8),
        ("septembre", 9),
        ("octobre", 10),
        ("novembre", 11),
        ("décembre", 12),
        ("janv", 1),
        ("févr", 2),
        ("avr", 4),
        ("juil", 7),
        ("sept", 9),
        ("oct", 10),
        ("nov", 11),
        ("déc", 12),
    ],
    ordinal_markers: &["er", "re", "e"],
};

static DE: LocaleData = LocaleData {
    months: &[
        ("januar", 1),
        ("februar", 2),
        ("märz", 3),
        ("april", 4),
        ("mai", 5),
        ("juni", 6),
        ("juli", 7),
        ("august", 8),
        ("september", 9),
        ("oktober", 10),
        ("november", 11),
        ("dezember", 12),
        ("jan", 1),
        ("feb", 2),
        ("mär", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("okt", 10),
        ("nov", 11),
        ("dez", 12),
    ],
    // German ordinals are written "1." and the period never survives
    // fragment splitting
    ordinal_markers: &[],
};

static ES: LocaleData = LocaleData {
    months: &[
        ("enero", 1),
        ("febrero", 2),
        ("marzo", 3),
        ("abril", 4),
        ("mayo", 5),
        ("junio", 6),
        ("julio", 7),
        ("agosto", 8),
        ("septiembre", 9),
        ("octubre", 10),
        ("noviembre", 11),
        ("diciembre", 12),
        ("ene", 1),
        ("feb", 2),
        ("mar", 3),
        ("abr", 4),
        ("may", 5),
        ("jun", 6),
        ("jul", 7),
        ("ago", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dic", 12),
    ],
    ordinal_markers: &["º"],
};

static IT: LocaleData = LocaleData {
    months: &[
        ("gennaio", 1),
        ("febbraio", 2),
        ("marzo", 3),
        ("aprile", 4),
        ("maggio", 5),
        ("giugno", 6),
        ("luglio", 7),
        ("agosto", 8),
        ("settembre", 9),
        ("ottobre", 10),
        ("novembre", 11),
        ("dicembre", 12),
        ("gen", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("mag", 5),
        ("giu", 6),
        ("lug", 7),
        ("ago", 8),
        ("set", 9),
        ("ott", 10),
        ("nov", 11),
        ("dic", 12),
    ],
    ordinal_markers: &["º"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_month_lookup() {
        let table = BuiltinLocales::new(["en"]).locale_table().unwrap();
        assert_eq!(table.month_number("March"), Some(3));
        assert_eq!(table.month_number("JAN"), Some(1));
        assert_eq!(table.month_number("Feb."), Some(2));
        assert_eq!(table.month_number("notamonth"), None);
    }

    #[test]
    fn test_ordinal_markers() {
        let table = BuiltinLocales::new(["en"]).locale_table().unwrap();
        assert!(table.is_ordinal_marker("st"));
        assert!(table.is_ordinal_marker("TH"));
        assert!(!table.is_ordinal_marker("er"));
    }

    #[test]
    fn test_region_subtag_resolves_primary_language() {
        let table = BuiltinLocales::new(["en-GB"]).locale_table().unwrap();
        assert_eq!(table.month_number("october"), Some(10));
        let table = BuiltinLocales::new(["fr_FR"]).locale_table().unwrap();
        assert_eq!(table.month_number("août"), Some(8));
    }

    #[test]
    fn test_merged_locales() {
        let table = BuiltinLocales::new(["en", "fr"]).locale_table().unwrap();
        assert_eq!(table.month_number("march"), Some(3));
        assert_eq!(table.month_number("mars"), Some(3));
        assert!(table.is_ordinal_marker("th"));
        assert!(table.is_ordinal_marker("er"));
    }

    #[test]
    fn test_unknown_locale_errors() {
        let result = BuiltinLocales::new(["xx"]).locale_table();
        assert!(matches!(result, Err(DateOrderError::UnknownLocale(_))));
    }

    #[test]
    fn test_empty_locale_list_errors() {
        let codes: [&str; 0] = [];
        let result = BuiltinLocales::new(codes).locale_table();
        assert!(matches!(result, Err(DateOrderError::EmptyLocales)));
    }

    #[test]
    fn test_remap_is_last_write_wins() {
        let mut table = LocaleTable::default();
        table.insert_month("frost", 1);
        table.insert_month("frost", 2);
        assert_eq!(table.month_number("frost"), Some(2));
    }
}
