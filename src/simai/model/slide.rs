//! Slide paths.

/// The path shape of one slide track, named after its marker char.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideShape {
    /// `-`. Straight line.
    Straight,
    /// `^`. The shorter arc along the ring.
    ShortArc,
    /// `v`. Two straight lines through the center.
    ViaCenter,
    /// `<`. Arc turning left from the origin.
    ArcLeft,
    /// `>`. Arc turning right from the origin.
    ArcRight,
    /// `V`. Two straight lines through a turning key, written `1V35`.
    GrandV,
    /// `p`. Counterclockwise curve around the center.
    CurveCcw,
    /// `q`. Clockwise curve around the center.
    CurveCw,
    /// `s`. Zigzag through the center.
    ZigzagS,
    /// `z`. Mirrored zigzag through the center.
    ZigzagZ,
    /// `w`. Fan spreading to three keys.
    Fan,
}

impl SlideShape {
    /// Gets the shape whose marker is `c`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '-' => Self::Straight,
            '^' => Self::ShortArc,
            'v' => Self::ViaCenter,
            '<' => Self::ArcLeft,
            '>' => Self::ArcRight,
            'V' => Self::GrandV,
            'p' => Self::CurveCcw,
            'q' => Self::CurveCw,
            's' => Self::ZigzagS,
            'z' => Self::ZigzagZ,
            'w' => Self::Fan,
            _ => return None,
        })
    }

    /// The marker char in chart text.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Straight => '-',
            Self::ShortArc => '^',
            Self::ViaCenter => 'v',
            Self::ArcLeft => '<',
            Self::ArcRight => '>',
            Self::GrandV => 'V',
            Self::CurveCcw => 'p',
            Self::CurveCw => 'q',
            Self::ZigzagS => 's',
            Self::ZigzagZ => 'z',
            Self::Fan => 'w',
        }
    }
}

impl std::fmt::Display for SlideShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One path segment of a slide.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideTrack {
    /// The path shape.
    pub shape: SlideShape,
    /// The key where the track ends, 1 to 8.
    pub destination: u8,
    /// Whether the approaching star is not drawn for this track.
    pub is_headless: bool,
    /// Whether the body of the slide is a break.
    pub is_body_break: bool,
    /// Seconds between the slide head and the start of the star moving.
    pub wait_secs: f64,
    /// Seconds the star takes to travel the track.
    pub duration_secs: f64,
}
