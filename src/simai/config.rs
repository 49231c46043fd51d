//! Parser configuration.

/// Settings for parsing one difficulty track.
///
/// ```
/// use simai_rs::simai::config::ParseConfig;
///
/// let config = ParseConfig::default().with_initial_bpm(150.0);
/// assert_eq!(config.initial_bpm, 150.0);
/// assert_eq!(config.initial_division, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    /// Tempo before the first `(bpm)` directive. Must be finite and positive.
    pub initial_bpm: f64,
    /// Division before the first `{n}` directive. Must be positive.
    pub initial_division: u32,
    /// A hold without timing bracket lasts as long as `[pseudo_hold_divisor:1]`.
    pub pseudo_hold_divisor: u32,
}

/// Tempo used when a chart does not set one.
pub const DEFAULT_BPM: f64 = 120.0;
/// Division used when a chart does not set one.
pub const DEFAULT_DIVISION: u32 = 4;
/// `[1280:1]` is short enough to be judged like a tap.
pub const DEFAULT_PSEUDO_HOLD_DIVISOR: u32 = 1280;

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            initial_bpm: DEFAULT_BPM,
            initial_division: DEFAULT_DIVISION,
            pseudo_hold_divisor: DEFAULT_PSEUDO_HOLD_DIVISOR,
        }
    }
}

impl ParseConfig {
    /// Sets the tempo before the first `(bpm)` directive.
    #[must_use]
    pub const fn with_initial_bpm(mut self, bpm: f64) -> Self {
        self.initial_bpm = bpm;
        self
    }

    /// Sets the division before the first `{n}` directive.
    #[must_use]
    pub const fn with_initial_division(mut self, division: u32) -> Self {
        self.initial_division = division;
        self
    }

    /// Sets the divisor giving the length of holds without timing bracket.
    #[must_use]
    pub const fn with_pseudo_hold_divisor(mut self, divisor: u32) -> Self {
        self.pseudo_hold_divisor = divisor;
        self
    }
}
