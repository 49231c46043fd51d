//! The single-note grammar.
//!
//! A note text is resolved in two passes. [`lex_note`] turns it into a flat list of
//! [`NoteLexeme`]s, then the finalize pass reads the head, the modifiers before the first slide
//! shape, and hands the rest to the slide grammar. Flags which depend on the whole text, like the
//! slide body break, are resolved there over the complete list instead of while scanning.

use std::ops::Range;

use super::{ParseWarning, WarningSink, bracket, slide};
use crate::simai::{
    config::ParseConfig,
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    model::{
        note::{Hold, Key, NoteEvent, NoteStyle, Sensor, Slide, Tap, Touch, TouchArea, TouchHold},
        slide::SlideShape,
    },
};

/// A modifier char of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `h`.
    Hold,
    /// `b`.
    Break,
    /// `x`.
    Ex,
    /// `f`.
    Fireworks,
    /// `$`.
    Star,
    /// `!`.
    Headless,
    /// `?`.
    FadeInHeadless,
    /// `@`. Cancels the star head implied by a slide.
    NoStar,
}

impl Modifier {
    /// Gets the modifier written as `c`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'h' => Self::Hold,
            'b' => Self::Break,
            'x' => Self::Ex,
            'f' => Self::Fireworks,
            '$' => Self::Star,
            '!' => Self::Headless,
            '?' => Self::FadeInHeadless,
            '@' => Self::NoStar,
            _ => return None,
        })
    }

    /// The char of the modifier.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Hold => 'h',
            Self::Break => 'b',
            Self::Ex => 'x',
            Self::Fireworks => 'f',
            Self::Star => '$',
            Self::Headless => '!',
            Self::FadeInHeadless => '?',
            Self::NoStar => '@',
        }
    }
}

/// One meaningful piece of a note text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteLexeme<'a> {
    /// A digit `0`-`9`.
    Digit(u8),
    /// A touch area letter.
    Area(TouchArea),
    /// A modifier char.
    Modifier(Modifier),
    /// A slide shape marker.
    Shape(SlideShape),
    /// `*`, separating chained slide tracks.
    Chain,
    /// `[...]`. An unterminated bracket holds the rest of the text.
    Bracket {
        /// Text between the brackets.
        content: &'a str,
        /// Whether the closing `]` was found.
        is_terminated: bool,
    },
    /// Any other char.
    Other(char),
}

impl NoteLexeme<'_> {
    /// The first char the lexeme was read from.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match *self {
            Self::Digit(d) => (b'0' + d) as char,
            Self::Area(area) => area.as_char(),
            Self::Modifier(modifier) => modifier.as_char(),
            Self::Shape(shape) => shape.as_char(),
            Self::Chain => '*',
            Self::Bracket { .. } => '[',
            Self::Other(c) => c,
        }
    }
}

/// A note lexeme with its position in the chart source.
pub type NoteLexemeWithRange<'a> = SourceRangeMixin<NoteLexeme<'a>>;

/// Splits a note text at byte `offset` of the source into lexemes, skipping whitespace.
#[must_use]
pub fn lex_note(text: &str, offset: usize) -> Vec<NoteLexemeWithRange<'_>> {
    let mut lexemes = vec![];
    let mut i = 0;
    while let Some(c) = text[i..].chars().next() {
        let start = i;
        i += c.len_utf8();
        let lexeme = match c {
            '[' => {
                let (content, is_terminated) = match text[i..].split_once(']') {
                    Some((content, _)) => (content, true),
                    None => (&text[i..], false),
                };
                i += content.len() + usize::from(is_terminated);
                NoteLexeme::Bracket {
                    content,
                    is_terminated,
                }
            }
            c if c.is_whitespace() => continue,
            '*' => NoteLexeme::Chain,
            '0'..='9' => NoteLexeme::Digit(c as u8 - b'0'),
            c => Modifier::from_char(c)
                .map(NoteLexeme::Modifier)
                .or_else(|| SlideShape::from_char(c).map(NoteLexeme::Shape))
                .or_else(|| TouchArea::from_char(c).map(NoteLexeme::Area))
                .unwrap_or(NoteLexeme::Other(c)),
        };
        lexemes.push(lexeme.into_wrapper_range(offset + start..offset + i));
    }
    lexemes
}

/// What the head of a note selected.
#[derive(Debug, Clone, Copy)]
enum Base {
    Button(Key),
    Touch(Sensor),
}

/// Flags read from the modifiers before the first slide shape.
#[derive(Debug, Default)]
struct HeadModifiers<'a> {
    style: NoteStyle,
    is_hold: bool,
    is_headless: bool,
    is_fade_in: bool,
    hold_bracket: Option<(&'a str, Range<usize>)>,
}

/// Resolves one note text at byte `offset` of the source.
///
/// Returns `None` if the text has no valid head; the reason is reported to `sink`.
pub(crate) fn parse_note(
    text: &str,
    offset: usize,
    bpm: f64,
    config: &ParseConfig,
    sink: &mut WarningSink,
) -> Option<NoteEvent> {
    let lexemes = lex_note(text, offset);
    for lexeme in &lexemes {
        if let NoteLexeme::Bracket {
            is_terminated: false,
            ..
        } = lexeme.content()
        {
            sink.push(ParseWarning::UnterminatedBracket, lexeme.range());
        }
    }

    let Some((base, rest)) = read_head(&lexemes) else {
        sink.push(
            ParseWarning::InvalidNoteHead(text.to_owned()),
            offset..offset + text.len(),
        );
        return None;
    };
    if let Base::Touch(sensor) = base
        && sensor.index > Sensor::MAX_INDEX
    {
        let head_end = lexemes
            .iter()
            .take(lexemes.len() - rest.len())
            .last()
            .map_or(offset + text.len(), SourceRangeMixin::end);
        sink.push(
            ParseWarning::SensorIndexOutOfRange {
                area: sensor.area.as_char(),
                index: sensor.index,
            },
            offset..head_end,
        );
    }
    let (modifiers, slide_part) = match base {
        Base::Button(_) => {
            let shape_at = rest
                .iter()
                .position(|lexeme| matches!(lexeme.content(), NoteLexeme::Shape(_)))
                .unwrap_or(rest.len());
            rest.split_at(shape_at)
        }
        Base::Touch(_) => (rest, &rest[rest.len()..]),
    };
    let head = read_modifiers(modifiers, sink);
    let source = text.to_owned();
    let HeadModifiers {
        style,
        is_hold,
        is_headless,
        is_fade_in,
        hold_bracket,
    } = head;

    let event = match base {
        Base::Button(key) if !slide_part.is_empty() => {
            let tracks = slide::resolve_tracks(slide_part, is_headless, bpm, sink);
            if tracks.is_empty() {
                NoteEvent::Tap(Tap { key, style, source })
            } else {
                NoteEvent::Slide(Slide {
                    key,
                    style,
                    tracks,
                    is_fade_in,
                    source,
                })
            }
        }
        Base::Button(key) if is_hold => NoteEvent::Hold(Hold {
            key,
            style,
            duration_secs: hold_duration_secs(hold_bracket, bpm, config, sink),
            source,
        }),
        Base::Button(key) => NoteEvent::Tap(Tap { key, style, source }),
        Base::Touch(sensor) if is_hold => NoteEvent::TouchHold(TouchHold {
            sensor,
            style,
            duration_secs: hold_duration_secs(hold_bracket, bpm, config, sink),
            source,
        }),
        Base::Touch(sensor) => NoteEvent::Touch(Touch {
            sensor,
            style,
            source,
        }),
    };
    Some(event)
}

/// Reads a button digit, or a touch area with its optional sensor index.
fn read_head<'l, 'a>(
    lexemes: &'l [NoteLexemeWithRange<'a>],
) -> Option<(Base, &'l [NoteLexemeWithRange<'a>])> {
    let (head, rest) = lexemes.split_first()?;
    match *head.content() {
        NoteLexeme::Digit(digit) => Key::new(digit).map(|key| (Base::Button(key), rest)),
        NoteLexeme::Area(area) => {
            let digits = rest
                .iter()
                .take_while(|lexeme| matches!(lexeme.content(), NoteLexeme::Digit(_)))
                .count();
            let (index_digits, rest) = rest.split_at(digits);
            let index = index_digits.iter().fold(0u8, |index, lexeme| match lexeme.content() {
                NoteLexeme::Digit(digit) => index.saturating_mul(10).saturating_add(*digit),
                _ => index,
            });
            Some((Base::Touch(Sensor { area, index }), rest))
        }
        _ => None,
    }
}

fn read_modifiers<'a>(
    lexemes: &[NoteLexemeWithRange<'a>],
    sink: &mut WarningSink,
) -> HeadModifiers<'a> {
    let mut head = HeadModifiers::default();
    let mut stars = 0;
    for lexeme in lexemes {
        match *lexeme.content() {
            NoteLexeme::Modifier(Modifier::Hold) => head.is_hold = true,
            NoteLexeme::Modifier(Modifier::Break) => head.style.is_break = true,
            NoteLexeme::Modifier(Modifier::Ex) => head.style.is_ex = true,
            NoteLexeme::Modifier(Modifier::Fireworks) => head.style.is_fireworks = true,
            NoteLexeme::Modifier(Modifier::Star) => {
                stars += 1;
                head.style.is_star_tap = true;
                head.style.is_fake_rotate |= stars >= 2;
            }
            NoteLexeme::Modifier(Modifier::Headless) => head.is_headless = true,
            NoteLexeme::Modifier(Modifier::FadeInHeadless) => {
                head.is_headless = true;
                head.is_fade_in = true;
            }
            NoteLexeme::Modifier(Modifier::NoStar) => {}
            NoteLexeme::Bracket { content, .. } if head.hold_bracket.is_none() => {
                head.hold_bracket = Some((content, lexeme.range()));
            }
            other => sink.push(ParseWarning::UnknownModifier(other.as_char()), lexeme.range()),
        }
    }
    head
}

/// A hold lasts for its bracket's duration, or `[pseudo_hold_divisor:1]` without one.
fn hold_duration_secs(
    bracket: Option<(&str, Range<usize>)>,
    bpm: f64,
    config: &ParseConfig,
    sink: &mut WarningSink,
) -> f64 {
    let duration_secs = bracket.map_or(0.0, |(content, range)| {
        bracket::resolve(content, range, bpm, sink).duration_secs
    });
    if duration_secs > 0.0 {
        duration_secs
    } else {
        bracket::beat_fraction_secs(bpm, f64::from(config.pseudo_hold_divisor.max(1)), 1.0)
    }
}
