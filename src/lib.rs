//! # dateorder
//!
//! Corpus-trained inference of day/month/year field order in ambiguous
//! numeric dates.
//!
//! A string like `2/3/2012` is inherently ambiguous, but seen next to
//! `3/26/2012` (there is no 26th month) the whole group reads as
//! month-first. This library learns exactly that: a training list of
//! exemplar dates is tokenized, each token expanded into the set of fields
//! it could stand for, and the resulting patterns aggregated so that
//! ambiguous patterns can be resolved against the unambiguous ones observed
//! in the same corpus.
//!
//! ## Example
//!
//! ```
//! use dateorder::{create_date_parser, Reliability};
//!
//! let training = vec!["14/3/2012", "1/4/2012", "6/4/2012", "12/4/2012"];
//! let parser = create_date_parser(&training, &["en"]).unwrap();
//!
//! // "2/8/2012" alone could be Feb 8 or Aug 2; the corpus says day-first
//! let parsed = parser.parse("2/8/2012");
//! assert_eq!(parsed.reliability, Reliability::ResolvedUnambiguously);
//! assert_eq!(parsed.day, Some(2));
//! assert_eq!(parsed.month, Some(8));
//! assert_eq!(parsed.year, Some(2012));
//! ```

mod error;
mod fields;
mod locale;
mod reduce;
mod resolve;
mod tokenizer;

pub use error::{DateOrderError, Result};
pub use fields::{expand, possible_kinds, FieldKind, KindSet, Pattern};
pub use locale::{BuiltinLocales, LocaleProvider, LocaleTable};
pub use reduce::{formats_consistent, is_unambiguous, reduce};
pub use tokenizer::{tokenize, Token, TokenSeq, TokenTag, MAX_TOKENS};

use resolve::ResolutionTable;

/// How confidently the field order of a parse was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reliability {
    /// Every field was pinned by the string itself
    Unambiguous,
    /// The string was ambiguous but exactly one trained pattern fits
    ResolvedUnambiguously,
    /// Several trained patterns fit; the best-supported one was chosen
    ResolvedAmbiguously,
    /// Nothing recognizable, or no trained pattern fits
    Invalid,
}

/// Calendar the parsed fields are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calendar {
    Gregorian,
}

/// Result of parsing one date string.
///
/// Field values are carried over verbatim from the input, so `Feb 31`
/// parses with `day: Some(31)` — there is no century inference and no
/// calendar validation. A field is `None` when the chosen pattern has no
/// position for it, or when the parse is [`Reliability::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub reliability: Reliability,
    pub calendar: Calendar,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<u32>,
}

impl ParsedDate {
    fn invalid() -> Self {
        Self {
            reliability: Reliability::Invalid,
            calendar: Calendar::Gregorian,
            day: None,
            month: None,
            year: None,
        }
    }
}

/// A parser trained on a corpus of exemplar dates.
///
/// Training happens once in [`DateParser::train`]; after that the parser is
/// immutable and [`parse`](DateParser::parse) calls may run concurrently
/// from any number of threads.
#[derive(Debug)]
pub struct DateParser {
    locale: LocaleTable,
    table: ResolutionTable,
}

impl DateParser {
    /// Train a parser from exemplar dates and an injected locale provider.
    ///
    /// The training list may be empty; the parser then handles only dates
    /// the string itself disambiguates and degrades everything else to
    /// [`Reliability::Invalid`].
    pub fn train<S: AsRef<str>>(
        training_dates: &[S],
        provider: &dyn LocaleProvider,
    ) -> Result<Self> {
        let locale = provider.locale_table()?;
        let reduced = training_dates.iter().map(|date| {
            let tokens = tokenize(date.as_ref(), &locale);
            reduce(expand(&tokens))
        });
        let table = ResolutionTable::train(reduced);
        Ok(Self { locale, table })
    }

    /// Parse one date string.
    ///
    /// The field kinds come from the string itself when it is unambiguous,
    /// otherwise from the best-supported consistent training pattern; the
    /// numeric values always come from this string's own tokens, matched by
    /// position.
    pub fn parse(&self, input: &str) -> ParsedDate {
        let tokens = tokenize(input, &self.locale);
        let reduced = reduce(expand(&tokens));
        if is_unambiguous(&reduced) {
            return assemble(Reliability::Unambiguous, &reduced, &tokens);
        }
        match self.table.lookup(&reduced) {
            Some([only]) => assemble(Reliability::ResolvedUnambiguously, &only.pattern, &tokens),
            Some([best, ..]) => {
                assemble(Reliability::ResolvedAmbiguously, &best.pattern, &tokens)
            }
            _ => ParsedDate::invalid(),
        }
    }
}

fn assemble(reliability: Reliability, pattern: &Pattern, tokens: &[Token]) -> ParsedDate {
    let mut parsed = ParsedDate {
        reliability,
        calendar: Calendar::Gregorian,
        day: None,
        month: None,
        year: None,
    };
    for (set, token) in pattern.iter().zip(tokens) {
        match set.as_singleton() {
            Some(FieldKind::Day) => parsed.day = Some(token.value),
            Some(FieldKind::Month) => parsed.month = Some(token.value),
            Some(FieldKind::Year) => parsed.year = Some(token.value),
            _ => {}
        }
    }
    parsed
}

/// Train a parser on `training_dates` using the built-in tables for
/// `locale_codes`.
///
/// # Example
///
/// ```
/// use dateorder::{create_date_parser, Reliability};
///
/// let parser = create_date_parser(&["3/14/2012", "4/1/2012"], &["en"]).unwrap();
/// let parsed = parser.parse("2/8/2012");
/// assert_eq!(parsed.month, Some(2));
/// assert_eq!(parsed.day, Some(8));
/// ```
pub fn create_date_parser<S, L>(training_dates: &[S], locale_codes: &[L]) -> Result<DateParser>
where
    S: AsRef<str>,
    L: AsRef<str>,
{
    DateParser::train(training_dates, &BuiltinLocales::new(locale_codes))
}
