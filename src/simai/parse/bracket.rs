//! Timing brackets: the `[...]` suffix giving a duration and a wait.
//!
//! The content is resolved by the first matching notation:
//!
//! 1. `wait##duration`: the wait in seconds, then a duration which is either `bpm#d:c`, `bpm#secs`,
//!    `d:c` at the current tempo, or seconds.
//! 2. `bpm#duration`: the wait is one beat at `bpm`, the duration `d:c` at `bpm` or seconds.
//! 3. `d:c`: `c` notes of a `d`-th note at the current tempo, the wait is one current beat.
//! 4. `secs`: seconds, the wait is one current beat.

use std::ops::Range;

use super::WarningSink;
use crate::simai::number::{NumericSite, read_number};

/// Seconds resolved from a timing bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BracketTiming {
    /// The length of the note.
    pub duration_secs: f64,
    /// The delay before the note starts moving, used by slides.
    pub wait_secs: f64,
}

impl BracketTiming {
    /// Timing of a note written without bracket: no duration and a wait of one beat.
    #[must_use]
    pub fn unbracketed(bpm: f64) -> Self {
        Self {
            duration_secs: 0.0,
            wait_secs: 60.0 / bpm,
        }
    }
}

/// Seconds of `count` notes of a `divisor`-th note at `bpm`.
#[must_use]
pub fn beat_fraction_secs(bpm: f64, divisor: f64, count: f64) -> f64 {
    60.0 / bpm * 4.0 / divisor * count
}

/// Resolves a bracket's `content`; `range` is the bracket's place in the source for warnings.
pub(crate) fn resolve(
    content: &str,
    range: Range<usize>,
    bpm: f64,
    sink: &mut WarningSink,
) -> BracketTiming {
    let mut resolver = Resolver { range, sink };
    let content = content.trim();
    if content.is_empty() {
        return BracketTiming::unbracketed(bpm);
    }
    if let Some((wait, duration)) = content.split_once("##") {
        let wait_secs = resolver.number_or(wait, NumericSite::BracketWait, 60.0 / bpm);
        let duration_secs = match duration.split_once('#') {
            Some((tempo, duration)) => {
                let tempo = resolver.number_or(tempo, NumericSite::BracketTempo, bpm);
                resolver.duration_at(duration, tempo)
            }
            None => resolver.duration_at(duration, bpm),
        };
        BracketTiming {
            duration_secs,
            wait_secs,
        }
    } else if let Some((tempo, duration)) = content.split_once('#') {
        let tempo = resolver.number_or(tempo, NumericSite::BracketTempo, bpm);
        BracketTiming {
            duration_secs: resolver.duration_at(duration, tempo),
            wait_secs: 60.0 / tempo,
        }
    } else {
        BracketTiming {
            duration_secs: resolver.duration_at(content, bpm),
            wait_secs: 60.0 / bpm,
        }
    }
}

struct Resolver<'s> {
    range: Range<usize>,
    sink: &'s mut WarningSink,
}

impl Resolver<'_> {
    /// An empty part silently means the fallback, as in `[#1.5]`.
    fn number_or(&mut self, literal: &str, site: NumericSite, fallback: f64) -> f64 {
        if literal.trim().is_empty() {
            return fallback;
        }
        self.sink
            .number_or(literal, site, fallback, self.range.clone())
    }

    /// A `d:c` beat fraction at `tempo`, or plain seconds.
    fn duration_at(&mut self, literal: &str, tempo: f64) -> f64 {
        let Some((divisor, count)) = literal.split_once(':') else {
            return self.number_or(literal, NumericSite::Duration, 0.0);
        };
        let Some(divisor) = read_number::<f64>(divisor, NumericSite::BeatDivisor) else {
            self.sink
                .malformed(NumericSite::BeatDivisor, divisor, self.range.clone());
            return 0.0;
        };
        let count = self.number_or(count, NumericSite::Duration, 0.0);
        beat_fraction_secs(tempo, divisor, count)
    }
}
