//! The one place where chart numbers are read.
//!
//! Simai text is hand edited, so a number which fails to read never stops the parse. Every grammar
//! site reads its literal through [`read_number`], and on failure substitutes the value given by
//! the fallback table below:
//!
//! | [`NumericSite`]  | Accepted values     | Fallback                      |
//! |------------------|---------------------|-------------------------------|
//! | `Tempo`          | finite, `> 0`       | the tempo already in effect   |
//! | `Division`       | integer, `> 0`      | the division already in effect|
//! | `AbsoluteStep`   | finite, `>= 0`      | the division already in effect|
//! | `BracketTempo`   | finite, `> 0`       | the tempo already in effect   |
//! | `BracketWait`    | finite, `>= 0`      | one beat at the current tempo |
//! | `BeatDivisor`    | finite, `> 0`       | `0.0` for the whole duration  |
//! | `Duration`       | finite, `>= 0`      | `0.0`                         |
//! | `FirstBeatOffset`| finite              | `0.0`                         |

use std::str::FromStr;

/// Where a numeric literal appeared, which decides what counts as valid and what replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericSite {
    /// `(bpm)` directive.
    Tempo,
    /// `{n}` directive.
    Division,
    /// `{#seconds}` directive.
    AbsoluteStep,
    /// Tempo before `#` in a timing bracket.
    BracketTempo,
    /// Seconds before `##` in a timing bracket.
    BracketWait,
    /// `d` of a `d:c` beat fraction.
    BeatDivisor,
    /// A beat fraction part or a seconds value which becomes a duration.
    Duration,
    /// `&first=` in maidata.
    FirstBeatOffset,
}

impl std::fmt::Display for NumericSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Tempo => "tempo",
            Self::Division => "division",
            Self::AbsoluteStep => "absolute step",
            Self::BracketTempo => "bracket tempo",
            Self::BracketWait => "bracket wait",
            Self::BeatDivisor => "beat divisor",
            Self::Duration => "duration",
            Self::FirstBeatOffset => "first beat offset",
        };
        f.write_str(name)
    }
}

/// A number type which can be read from a chart literal.
pub trait ChartNumber: FromStr + Copy {
    /// Whether the value is acceptable for the site.
    fn is_valid_for(self, site: NumericSite) -> bool;
}

impl ChartNumber for f64 {
    fn is_valid_for(self, site: NumericSite) -> bool {
        self.is_finite()
            && match site {
                NumericSite::Tempo | NumericSite::BracketTempo | NumericSite::BeatDivisor => {
                    self > 0.0
                }
                NumericSite::Division
                | NumericSite::AbsoluteStep
                | NumericSite::BracketWait
                | NumericSite::Duration => self >= 0.0,
                NumericSite::FirstBeatOffset => true,
            }
    }
}

impl ChartNumber for u32 {
    fn is_valid_for(self, site: NumericSite) -> bool {
        match site {
            NumericSite::Division
            | NumericSite::Tempo
            | NumericSite::BracketTempo
            | NumericSite::BeatDivisor => self > 0,
            NumericSite::AbsoluteStep
            | NumericSite::BracketWait
            | NumericSite::Duration
            | NumericSite::FirstBeatOffset => true,
        }
    }
}

/// Reads `literal` for `site`, surrounding whitespace ignored.
///
/// Returns `None` when the literal is not a number or is out of range for the site. The caller
/// then uses the fallback from the table in the module docs and reports it.
pub fn read_number<T: ChartNumber>(literal: &str, site: NumericSite) -> Option<T> {
    let value = literal.trim().parse::<T>().ok()?;
    if value.is_valid_for(site) {
        Some(value)
    } else {
        log::trace!("{site} literal `{literal}` out of range");
        None
    }
}
