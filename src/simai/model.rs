//! Resolved chart data: timing points holding notes, and the chart they belong to.

pub mod note;
pub mod slide;

use std::collections::BTreeMap;

use itertools::Itertools;

use self::note::NoteEvent;

/// Every note placed at one resolved time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    /// Seconds from the start of the music.
    pub time_secs: f64,
    /// The tempo in effect at this point.
    pub bpm: f64,
    /// Notes in written order.
    pub notes: Vec<NoteEvent>,
}

impl TimingPoint {
    /// The note texts joined by `/`, as they would appear in an EACH group.
    #[must_use]
    pub fn each_text(&self) -> String {
        self.notes.iter().map(NoteEvent::source_text).join("/")
    }
}

/// The seven charts a song may have, in `&inote_1` to `&inote_7` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// `&inote_1`.
    Easy,
    /// `&inote_2`.
    Basic,
    /// `&inote_3`.
    Advanced,
    /// `&inote_4`.
    Expert,
    /// `&inote_5`.
    Master,
    /// `&inote_6`.
    ReMaster,
    /// `&inote_7`.
    Original,
}

impl Difficulty {
    /// All difficulties in index order.
    pub const ALL: [Self; 7] = [
        Self::Easy,
        Self::Basic,
        Self::Advanced,
        Self::Expert,
        Self::Master,
        Self::ReMaster,
        Self::Original,
    ];

    /// Gets the difficulty at 0-based `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The 0-based index, one less than the number in `&inote_N`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Song data written around the charts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartMetadata {
    /// `&title=`.
    pub title: String,
    /// `&artist=`.
    pub artist: String,
    /// `&des=`.
    pub designer: String,
    /// `&first=`. Seconds from the start of the music to the first beat.
    pub first_beat_offset_secs: f64,
    /// `&lv_N=`, indexed by [`Difficulty::index`].
    pub levels: [String; 7],
    /// Other `&key=value` lines in written order.
    pub other_commands: Vec<(String, String)>,
}

impl Default for ChartMetadata {
    fn default() -> Self {
        Self {
            title: "default".into(),
            artist: "default".into(),
            designer: "default".into(),
            first_beat_offset_secs: 0.0,
            levels: Default::default(),
            other_commands: vec![],
        }
    }
}

impl ChartMetadata {
    /// The level text of `difficulty`, if written.
    #[must_use]
    pub fn level(&self, difficulty: Difficulty) -> Option<&str> {
        let level = self.levels[difficulty.index()].as_str();
        (!level.is_empty()).then_some(level)
    }
}

/// A song with all of its charts.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    /// Song data.
    pub metadata: ChartMetadata,
    /// Timing points of each written difficulty, ordered by time.
    pub difficulties: BTreeMap<Difficulty, Vec<TimingPoint>>,
}

impl Chart {
    /// Timing points of `difficulty`, if the chart has it.
    #[must_use]
    pub fn track(&self, difficulty: Difficulty) -> Option<&[TimingPoint]> {
        self.difficulties.get(&difficulty).map(Vec::as_slice)
    }
}
