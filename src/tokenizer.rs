//! Tokenizer for date strings

use crate::locale::LocaleTable;
use smallvec::SmallVec;

/// Syntactic role assigned by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenTag {
    /// Ordinal day ("21st", "1er")
    Day,
    /// Named month ("March", "sept.")
    Month,
    /// Explicit year; never produced by the tokenizer, accepted by the
    /// expander for callers that pre-tag fields
    Year,
    /// Bare 1-4 digit number
    Unknown,
}

/// A classified fragment of a date string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub tag: TokenTag,
    pub value: u32,
}

/// Token storage; a date yields at most [`MAX_TOKENS`] of them
pub type TokenSeq = SmallVec<[Token; 3]>;

/// Dates are read as day/month/year triples; recognized tokens beyond the
/// third are discarded
pub const MAX_TOKENS: usize = 3;

/// Split a date string on punctuation and whitespace and classify each
/// fragment.
///
/// Fragments matching none of the ordinal-day, month-name, or bare-number
/// shapes are dropped silently; a string with nothing recognizable yields
/// an empty sequence rather than an error.
pub fn tokenize(input: &str, locale: &LocaleTable) -> TokenSeq {
    let mut tokens = TokenSeq::new();
    for fragment in input.split(|c: char| !c.is_alphanumeric()) {
        if fragment.is_empty() {
            continue;
        }
        if let Some(token) = classify(fragment, locale) {
            tokens.push(token);
            if tokens.len() == MAX_TOKENS {
                break;
            }
        }
    }
    tokens
}

fn classify(fragment: &str, locale: &LocaleTable) -> Option<Token> {
    if let Some(value) = ordinal_day(fragment, locale) {
        return Some(Token {
            tag: TokenTag::Day,
            value,
        });
    }
    if let Some(value) = locale.month_number(fragment) {
        return Some(Token {
            tag: TokenTag::Month,
            value,
        });
    }
    bare_number(fragment).map(|value| Token {
        tag: TokenTag::Unknown,
        value,
    })
}

/// 1-2 digits immediately followed by an ordinal marker, nothing after
fn ordinal_day(fragment: &str, locale: &LocaleTable) -> Option<u32> {
    let digits = fragment
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if !(1..=2).contains(&digits) || digits == fragment.len() {
        return None;
    }
    let (number, suffix) = fragment.split_at(digits);
    if locale.is_ordinal_marker(suffix) {
        number.parse().ok()
    } else {
        None
    }
}

/// 1-4 digits and nothing else
fn bare_number(fragment: &str) -> Option<u32> {
    if (1..=4).contains(&fragment.len()) && fragment.bytes().all(|b| b.is_ascii_digit()) {
        fragment.parse().ok()
    } else {
        None
    }
}
