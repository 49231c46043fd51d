//! Resolving simai tokens into timing points.
//!
//! Raw [String] == [lex] ==> [`TokenWithRange`]s (in [`LexOutput`]) == [parse] ==> [`TimingPoint`]s
//! (in [`ParseOutput`])
//!
//! Data flows from the assembler in this module down through the EACH splitter, the note grammar,
//! the slide grammar and the timing bracket resolver. All of them read the one [`TimingContext`]
//! owned by the parse of a single difficulty.
//!
//! [lex]: crate::simai::lex
//! [`LexOutput`]: crate::simai::lex::LexOutput

pub mod bracket;
mod each;
pub mod note;
mod slide;
pub mod timing;

use std::ops::Range;

use thiserror::Error;

use self::timing::TimingContext;
use super::{
    config::ParseConfig,
    lex::token::{Token, TokenWithRange},
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    model::{TimingPoint, note::NoteEvent},
    number::{ChartNumber, NumericSite, read_number},
};

/// A warning occurred when resolving tokens. None of them stops the parse.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseWarning {
    /// A number failed to read and was replaced by its fallback.
    #[error("malformed {site} literal `{literal}`, used the fallback")]
    MalformedNumericLiteral {
        /// Where the literal was.
        site: NumericSite,
        /// The literal text.
        literal: String,
    },
    /// A `[` was not closed, so the rest of the note was taken as its content.
    #[error("unterminated timing bracket")]
    UnterminatedBracket,
    /// The char has no meaning at its place in the note and was ignored.
    #[error("unknown modifier `{0}`")]
    UnknownModifier(char),
    /// The note text does not start with a button `1`-`8` or a touch area `A`-`E`.
    #[error("note `{0}` has no valid head")]
    InvalidNoteHead(String),
    /// A touch sensor index above 8. The index is kept as written.
    #[error("touch sensor `{area}{index}` is out of range")]
    SensorIndexOutOfRange {
        /// The sensor group letter.
        area: char,
        /// The index as written.
        index: u8,
    },
    /// A slide track had no destination key, so it was dropped.
    #[error("slide track has no destination")]
    MissingSlideDestination,
    /// A chained slide track had no shape, so it took the previous one.
    #[error("slide track has no shape, used the previous one")]
    MissingSlideShape,
}

/// A parse warning with position information.
pub type ParseWarningWithRange = SourceRangeMixin<ParseWarning>;

/// Resolved timing points of one difficulty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct ParseOutput {
    /// Timing points ordered by time.
    pub timing_points: Vec<TimingPoint>,
    /// Warnings that occurred during parsing.
    pub parse_warnings: Vec<ParseWarningWithRange>,
}

/// Collects warnings and applies the numeric fallback policy.
#[derive(Debug, Default)]
pub(crate) struct WarningSink {
    warnings: Vec<ParseWarningWithRange>,
}

impl WarningSink {
    pub(crate) fn push(&mut self, warning: ParseWarning, range: Range<usize>) {
        log::debug!("{warning} at {range:?}");
        self.warnings.push(warning.into_wrapper_range(range));
    }

    /// Reads `literal` for `site`, or reports it and gives `fallback`.
    pub(crate) fn number_or<T: ChartNumber>(
        &mut self,
        literal: &str,
        site: NumericSite,
        fallback: T,
        range: Range<usize>,
    ) -> T {
        read_number(literal, site).unwrap_or_else(|| {
            self.malformed(site, literal, range);
            fallback
        })
    }

    /// Reports a literal which failed to read for `site`.
    pub(crate) fn malformed(&mut self, site: NumericSite, literal: &str, range: Range<usize>) {
        self.push(
            ParseWarning::MalformedNumericLiteral {
                site,
                literal: literal.to_owned(),
            },
            range,
        );
    }

    pub(crate) fn into_warnings(self) -> Vec<ParseWarningWithRange> {
        self.warnings
    }
}

/// Resolves tokens of one difficulty into timing points.
///
/// The first note-group is placed at `first_beat_offset_secs`.
pub fn parse_tokens<'a>(
    tokens: impl IntoIterator<Item = &'a TokenWithRange<'a>>,
    first_beat_offset_secs: f64,
    config: &ParseConfig,
) -> ParseOutput {
    let mut ctx = TimingContext::new(config, first_beat_offset_secs);
    let mut sink = WarningSink::default();
    let mut timing_points = vec![];
    for token in tokens {
        match *token.content() {
            Token::Tempo(literal) => ctx.set_tempo(literal, token.range(), &mut sink),
            Token::Division(literal) => ctx.set_division(literal, token.range(), &mut sink),
            Token::Advance => ctx.advance(),
            Token::NoteGroup(group) => {
                let notes = each::parse_group(group, token.start(), &ctx, config, &mut sink);
                place_notes(&mut timing_points, &ctx, notes);
            }
            Token::End => log::trace!("end marker at {}", token.start()),
        }
    }
    ParseOutput {
        timing_points,
        parse_warnings: sink.into_warnings(),
    }
}

/// Millisecond key under which timing points are merged.
fn time_key(time_secs: f64) -> i64 {
    (time_secs * 1000.0).round() as i64
}

/// Appends `notes` to the last timing point if it has the same time, otherwise starts a new one.
///
/// Time never goes back while parsing, so only the last point can share the time.
fn place_notes(timing_points: &mut Vec<TimingPoint>, ctx: &TimingContext, notes: Vec<NoteEvent>) {
    if notes.is_empty() {
        return;
    }
    let time_secs = ctx.elapsed_secs();
    match timing_points.last_mut() {
        Some(last) if time_key(last.time_secs) == time_key(time_secs) => last.notes.extend(notes),
        _ => timing_points.push(TimingPoint {
            time_secs,
            bpm: ctx.bpm(),
            notes,
        }),
    }
}
