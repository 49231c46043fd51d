//! The timing context: tempo, subdivision and elapsed time of one difficulty.

use std::ops::Range;

use super::WarningSink;
use crate::simai::{
    config::{DEFAULT_BPM, DEFAULT_DIVISION, ParseConfig},
    number::{ChartNumber, NumericSite, read_number},
};

/// How far one `,` advances.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Division {
    /// `{n}`. A whole measure of four beats is split into `n` ticks.
    Beats(u32),
    /// `{#s}`. Every tick lasts `s` seconds regardless of tempo.
    AbsoluteSecs(f64),
}

/// Mutable timing state while parsing one difficulty.
///
/// Only directives and advances change it. Each difficulty owns its own context.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingContext {
    bpm: f64,
    division: Division,
    elapsed_secs: f64,
}

impl TimingContext {
    /// Creates the context at the first beat.
    #[must_use]
    pub fn new(config: &ParseConfig, first_beat_offset_secs: f64) -> Self {
        let bpm = if config.initial_bpm.is_valid_for(NumericSite::Tempo) {
            config.initial_bpm
        } else {
            log::warn!("initial tempo {} is not positive, using {DEFAULT_BPM}", config.initial_bpm);
            DEFAULT_BPM
        };
        let division = if config.initial_division > 0 {
            config.initial_division
        } else {
            log::warn!("initial division is zero, using {DEFAULT_DIVISION}");
            DEFAULT_DIVISION
        };
        Self {
            bpm,
            division: Division::Beats(division),
            elapsed_secs: first_beat_offset_secs,
        }
    }

    /// The tempo in effect.
    #[must_use]
    pub const fn bpm(&self) -> f64 {
        self.bpm
    }

    /// The division in effect.
    #[must_use]
    pub const fn division(&self) -> Division {
        self.division
    }

    /// Seconds from the start of the music to the current tick.
    #[must_use]
    pub const fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Seconds of one beat at the current tempo.
    #[must_use]
    pub fn one_beat_secs(&self) -> f64 {
        60.0 / self.bpm
    }

    /// Seconds one `,` advances.
    #[must_use]
    pub fn tick_secs(&self) -> f64 {
        match self.division {
            Division::Beats(beats) => 60.0 / self.bpm * (4.0 / f64::from(beats)),
            Division::AbsoluteSecs(secs) => secs,
        }
    }

    /// Processes a `,`.
    pub fn advance(&mut self) {
        self.elapsed_secs += self.tick_secs();
    }

    pub(crate) fn set_tempo(&mut self, literal: &str, range: Range<usize>, sink: &mut WarningSink) {
        self.bpm = sink.number_or(literal, NumericSite::Tempo, self.bpm, range);
    }

    pub(crate) fn set_division(
        &mut self,
        literal: &str,
        range: Range<usize>,
        sink: &mut WarningSink,
    ) {
        let parsed = match literal.trim().strip_prefix('#') {
            Some(step) => read_number(step, NumericSite::AbsoluteStep)
                .map(Division::AbsoluteSecs)
                .ok_or(NumericSite::AbsoluteStep),
            None => read_number(literal, NumericSite::Division)
                .map(Division::Beats)
                .ok_or(NumericSite::Division),
        };
        match parsed {
            Ok(division) => self.division = division,
            Err(site) => sink.malformed(site, literal, range),
        }
    }
}
