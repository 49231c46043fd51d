//! Prelude module for the simai parser.
//!
//! This module re-exports all public types from the simai module for convenient access.
//! You can use `use simai_rs::simai::prelude::*;` to import all simai types at once.

// Re-export diagnostics from crate level
#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_simai_warnings};

pub use super::{
    SimaiOutput, SimaiWarning,
    config::{DEFAULT_BPM, DEFAULT_DIVISION, DEFAULT_PSEUDO_HOLD_DIVISOR, ParseConfig},
    lex::{
        LexOutput, LexWarning, LexWarningWithRange,
        cursor::Cursor,
        token::{Token, TokenWithRange},
    },
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    model::{
        Chart, ChartMetadata, Difficulty, TimingPoint,
        note::{
            Hold, Key, NoteEvent, NoteKind, NoteStyle, Sensor, Slide, Tap, Touch, TouchArea,
            TouchHold,
        },
        slide::{SlideShape, SlideTrack},
    },
    number::{ChartNumber, NumericSite, read_number},
    parse::{
        ParseOutput, ParseWarning, ParseWarningWithRange,
        bracket::{BracketTiming, beat_fraction_secs},
        note::{Modifier, NoteLexeme, NoteLexemeWithRange, lex_note},
        timing::{Division, TimingContext},
    },
    parse_difficulty_track, parse_simai, parse_simai_with_config,
};
