//! The parser module of simai chart notation, the text format of `inote_N` blocks in
//! `maidata.txt`.
//!
//! This module consists of two phases: lexical analyzing and token parsing.
//!
//! `lex` module splits the text into tempo and division directives, time advances and note-groups.
//! It keeps numbers as raw literals so that malformed values can be reported where they appear.
//!
//! `parse` module resolves the tokens against a running [`parse::timing::TimingContext`] and
//! produces [`TimingPoint`]s holding the typed [`model::note::NoteEvent`]s.
//!
//! In detail, our policies are:
//!
//! - Never fail on malformed text. Every problem becomes a warning and the parse goes on.
//! - A number which fails to read is replaced as described in [`number`].
//! - Only UTF-8 text is accepted (as `&str`).

pub mod config;
pub mod lex;
pub mod mixin;
pub mod model;
pub mod number;
pub mod parse;
pub mod prelude;

use std::ops::Range;

use thiserror::Error;

use self::{
    config::ParseConfig,
    lex::{LexOutput, LexWarningWithRange},
    model::TimingPoint,
    parse::{ParseOutput, ParseWarningWithRange},
};

/// A warning occurred when parsing a difficulty track.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimaiWarning {
    /// A warning comes from lexical analyzer.
    #[error("Warn: lex: {0}")]
    LexWarning(#[from] LexWarningWithRange),
    /// A warning comes from the note and timing grammar.
    #[error("Warn: parse: {0}")]
    ParseWarning(#[from] ParseWarningWithRange),
}

impl SimaiWarning {
    /// The byte span of the text the warning is about.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        match self {
            Self::LexWarning(warning) => warning.range(),
            Self::ParseWarning(warning) => warning.range(),
        }
    }

    /// Moves the span forward by `offset` bytes.
    #[must_use]
    pub fn shifted(self, offset: usize) -> Self {
        match self {
            Self::LexWarning(warning) => Self::LexWarning(warning.shifted(offset)),
            Self::ParseWarning(warning) => Self::ParseWarning(warning.shifted(offset)),
        }
    }
}

/// Output of parsing a difficulty track.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct SimaiOutput {
    /// Timing points ordered by time.
    pub timing_points: Vec<TimingPoint>,
    /// Warnings that occurred during parsing, lex warnings first.
    pub warnings: Vec<SimaiWarning>,
}

/// Parse a difficulty track from simai text.
///
/// The first note-group is placed at `first_beat_offset_secs`, the value of `&first`.
///
/// # Example
///
/// ```
/// use simai_rs::simai::{SimaiOutput, parse_simai};
///
/// let SimaiOutput { timing_points, warnings } = parse_simai("(120){4}1,2/3,E", 0.0);
/// assert!(warnings.is_empty());
/// assert_eq!(timing_points.len(), 2);
/// assert_eq!(timing_points[1].time_secs, 0.5);
/// assert_eq!(timing_points[1].each_text(), "2/3");
/// ```
pub fn parse_simai(source: &str, first_beat_offset_secs: f64) -> SimaiOutput {
    parse_simai_with_config(source, first_beat_offset_secs, &ParseConfig::default())
}

/// Parse a difficulty track with a custom [`ParseConfig`].
///
/// A step of [`parse_simai`]
pub fn parse_simai_with_config(
    source: &str,
    first_beat_offset_secs: f64,
    config: &ParseConfig,
) -> SimaiOutput {
    let LexOutput {
        tokens,
        lex_warnings,
    } = lex::parse_lex(source);

    let ParseOutput {
        timing_points,
        parse_warnings,
    } = parse::parse_tokens(&tokens, first_beat_offset_secs, config);

    let mut warnings: Vec<SimaiWarning> = lex_warnings
        .into_iter()
        .map(SimaiWarning::LexWarning)
        .collect();
    warnings.extend(parse_warnings.into_iter().map(SimaiWarning::ParseWarning));

    log::debug!(
        "parsed {} timing points with {} warnings",
        timing_points.len(),
        warnings.len()
    );
    SimaiOutput {
        timing_points,
        warnings,
    }
}

/// Parse a difficulty track and keep only the timing points.
///
/// Malformed text never fails; use [`parse_simai`] to see what was replaced or skipped.
#[must_use]
pub fn parse_difficulty_track(text: &str, first_beat_offset_secs: f64) -> Vec<TimingPoint> {
    parse_simai(text, first_beat_offset_secs).timing_points
}
