//! The slide grammar: tracks after the star head of a button note.
//!
//! Tracks are separated by `*`. Each track is a shape, the keys it passes, and an optional timing
//! bracket. The destination is the last key before the bracket, so `1-4q7-2[1:2]` ends on `2`.

use super::{
    ParseWarning, WarningSink, bracket,
    bracket::BracketTiming,
    note::{Modifier, NoteLexeme, NoteLexemeWithRange},
};
use crate::simai::model::slide::{SlideShape, SlideTrack};

/// Resolves the slide part of a note, which starts at its first shape marker.
///
/// Tracks without destination are dropped. All kept tracks wait as long as the first one, and
/// every track after the first is headless.
pub(crate) fn resolve_tracks(
    lexemes: &[NoteLexemeWithRange<'_>],
    is_headless: bool,
    bpm: f64,
    sink: &mut WarningSink,
) -> Vec<SlideTrack> {
    let is_body_break = lexemes
        .iter()
        .any(|lexeme| *lexeme.content() == NoteLexeme::Modifier(Modifier::Break));

    let mut tracks: Vec<SlideTrack> = vec![];
    let mut shape = SlideShape::Straight;
    for part in lexemes.split(|lexeme| *lexeme.content() == NoteLexeme::Chain) {
        let (Some(first), Some(last)) = (part.first(), part.last()) else {
            continue;
        };
        let span = first.start()..last.end();
        match *first.content() {
            NoteLexeme::Shape(leading) => shape = leading,
            _ => sink.push(ParseWarning::MissingSlideShape, span.clone()),
        }

        let mut destination = None;
        let mut timing = None;
        for lexeme in part {
            match *lexeme.content() {
                NoteLexeme::Digit(digit @ 1..=8) if timing.is_none() => destination = Some(digit),
                NoteLexeme::Bracket { content, .. } if timing.is_none() => {
                    timing = Some(bracket::resolve(content, lexeme.range(), bpm, sink));
                }
                NoteLexeme::Shape(_)
                | NoteLexeme::Digit(_)
                | NoteLexeme::Bracket { .. }
                | NoteLexeme::Modifier(Modifier::Break | Modifier::NoStar) => {}
                other => sink.push(ParseWarning::UnknownModifier(other.as_char()), lexeme.range()),
            }
        }

        let Some(destination) = destination else {
            sink.push(ParseWarning::MissingSlideDestination, span);
            continue;
        };
        let BracketTiming {
            duration_secs,
            wait_secs,
        } = timing.unwrap_or_else(|| BracketTiming::unbracketed(bpm));
        let (is_headless, wait_secs) = match tracks.first() {
            Some(head) => (true, head.wait_secs),
            None => (is_headless, wait_secs),
        };
        tracks.push(SlideTrack {
            shape,
            destination,
            is_headless,
            is_body_break,
            wait_secs,
            duration_secs,
        });
    }
    tracks
}
