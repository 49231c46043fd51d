//! Note events placed on a timing point.

use super::slide::SlideTrack;

/// A button on the outer ring, 1 to 8 clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key(u8);

impl Key {
    /// Creates a key if `number` is on the ring.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if 1 <= number && number <= 8 {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Creates a key from a digit char `1`-`8`.
    #[must_use]
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    /// The key number, 1 to 8.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A sensor group on the touch panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchArea {
    /// Outer sensors.
    A,
    /// Inner sensors.
    B,
    /// The center sensor.
    C,
    /// Outer sensors between the buttons.
    D,
    /// Middle sensors between the buttons.
    E,
}

impl TouchArea {
    /// Gets the area named by `c`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'A' => Self::A,
            'B' => Self::B,
            'C' => Self::C,
            'D' => Self::D,
            'E' => Self::E,
            _ => return None,
        })
    }

    /// The area letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }
}

/// A touch sensor, as `B7` or `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sensor {
    /// The sensor group.
    pub area: TouchArea,
    /// The index in the group, `0` when not written (the center `C`).
    pub index: u8,
}

impl Sensor {
    /// The largest sensor index of any group.
    pub const MAX_INDEX: u8 = 8;
}

/// Style flags common to all note variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct NoteStyle {
    /// `b`. Break note.
    pub is_break: bool,
    /// `x`. EX note.
    pub is_ex: bool,
    /// `f`. Fireworks on hit.
    pub is_fireworks: bool,
    /// `$`. Drawn as a star.
    pub is_star_tap: bool,
    /// `$$`. Drawn as a rotating star.
    pub is_fake_rotate: bool,
}

/// A plain button tap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tap {
    /// The button.
    pub key: Key,
    /// Style flags.
    pub style: NoteStyle,
    /// The note text.
    pub source: String,
}

/// A button hold.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hold {
    /// The button.
    pub key: Key,
    /// Style flags.
    pub style: NoteStyle,
    /// Seconds the button must be held.
    pub duration_secs: f64,
    /// The note text.
    pub source: String,
}

/// A slide: a star head on `key` and one or more tracks starting there.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    /// The origin button.
    pub key: Key,
    /// Style flags of the star head.
    pub style: NoteStyle,
    /// The tracks in written order, never empty.
    pub tracks: Vec<SlideTrack>,
    /// `?`. The headless slide fades in instead of popping in.
    pub is_fade_in: bool,
    /// The note text.
    pub source: String,
}

impl Slide {
    /// Splits into one single-track slide per track.
    ///
    /// All parts share the origin, style and wait of this slide, and every part after the first
    /// is headless, as its tracks already are.
    #[must_use]
    pub fn split_tracks(&self) -> Vec<Self> {
        self.tracks
            .iter()
            .map(|track| Self {
                tracks: vec![*track],
                ..self.clone()
            })
            .collect()
    }
}

/// A touch on a sensor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Touch {
    /// The sensor.
    pub sensor: Sensor,
    /// Style flags.
    pub style: NoteStyle,
    /// The note text.
    pub source: String,
}

/// A held touch on a sensor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchHold {
    /// The sensor.
    pub sensor: Sensor,
    /// Style flags.
    pub style: NoteStyle,
    /// Seconds the sensor must be held.
    pub duration_secs: f64,
    /// The note text.
    pub source: String,
}

/// The variant of a [`NoteEvent`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteKind {
    /// See [`Tap`].
    Tap,
    /// See [`Hold`].
    Hold,
    /// See [`Slide`].
    Slide,
    /// See [`Touch`].
    Touch,
    /// See [`TouchHold`].
    TouchHold,
}

/// A playable note resolved from chart text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum NoteEvent {
    /// A button tap.
    Tap(Tap),
    /// A button hold.
    Hold(Hold),
    /// A slide.
    Slide(Slide),
    /// A sensor touch.
    Touch(Touch),
    /// A held sensor touch.
    TouchHold(TouchHold),
}

impl NoteEvent {
    /// The variant of this note.
    #[must_use]
    pub const fn kind(&self) -> NoteKind {
        match self {
            Self::Tap(_) => NoteKind::Tap,
            Self::Hold(_) => NoteKind::Hold,
            Self::Slide(_) => NoteKind::Slide,
            Self::Touch(_) => NoteKind::Touch,
            Self::TouchHold(_) => NoteKind::TouchHold,
        }
    }

    /// The button number for button notes, or the sensor index for touch notes.
    #[must_use]
    pub const fn position(&self) -> u8 {
        match self {
            Self::Tap(Tap { key, .. })
            | Self::Hold(Hold { key, .. })
            | Self::Slide(Slide { key, .. }) => key.get(),
            Self::Touch(Touch { sensor, .. }) | Self::TouchHold(TouchHold { sensor, .. }) => {
                sensor.index
            }
        }
    }

    /// The sensor group for touch notes.
    #[must_use]
    pub const fn touch_area(&self) -> Option<TouchArea> {
        match self {
            Self::Touch(Touch { sensor, .. }) | Self::TouchHold(TouchHold { sensor, .. }) => {
                Some(sensor.area)
            }
            Self::Tap(_) | Self::Hold(_) | Self::Slide(_) => None,
        }
    }

    /// Style flags of the note.
    #[must_use]
    pub const fn style(&self) -> &NoteStyle {
        match self {
            Self::Tap(Tap { style, .. })
            | Self::Hold(Hold { style, .. })
            | Self::Slide(Slide { style, .. })
            | Self::Touch(Touch { style, .. })
            | Self::TouchHold(TouchHold { style, .. }) => style,
        }
    }

    /// The note text this event was resolved from.
    #[must_use]
    pub fn source_text(&self) -> &str {
        match self {
            Self::Tap(Tap { source, .. })
            | Self::Hold(Hold { source, .. })
            | Self::Slide(Slide { source, .. })
            | Self::Touch(Touch { source, .. })
            | Self::TouchHold(TouchHold { source, .. }) => source,
        }
    }

    /// Seconds to hold for holds and touch holds.
    #[must_use]
    pub const fn hold_duration_secs(&self) -> Option<f64> {
        match self {
            Self::Hold(Hold { duration_secs, .. })
            | Self::TouchHold(TouchHold { duration_secs, .. }) => Some(*duration_secs),
            Self::Tap(_) | Self::Slide(_) | Self::Touch(_) => None,
        }
    }

    /// The slide data for slides.
    #[must_use]
    pub const fn as_slide(&self) -> Option<&Slide> {
        if let Self::Slide(slide) = self {
            Some(slide)
        } else {
            None
        }
    }
}
