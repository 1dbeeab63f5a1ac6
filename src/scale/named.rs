#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ScaleError;
use super::step_code::{Pattern, StepCode};

// ── Scale definitions ─────────────────────────────────────────────────────────

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedScale {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
    Blues,
    WholeTone,
    Octatonic,
    Chromatic,
}

impl NamedScale {
    pub const ALL: [NamedScale; 15] = [
        Self::Major,
        Self::NaturalMinor,
        Self::HarmonicMinor,
        Self::MelodicMinor,
        Self::Dorian,
        Self::Phrygian,
        Self::Lydian,
        Self::Mixolydian,
        Self::Locrian,
        Self::MajorPentatonic,
        Self::MinorPentatonic,
        Self::Blues,
        Self::WholeTone,
        Self::Octatonic,
        Self::Chromatic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::NaturalMinor => "Natural Minor",
            Self::HarmonicMinor => "Harmonic Minor",
            Self::MelodicMinor => "Melodic Minor",
            Self::Dorian => "Dorian",
            Self::Phrygian => "Phrygian",
            Self::Lydian => "Lydian",
            Self::Mixolydian => "Mixolydian",
            Self::Locrian => "Locrian",
            Self::MajorPentatonic => "Major Pentatonic",
            Self::MinorPentatonic => "Minor Pentatonic",
            Self::Blues => "Blues",
            Self::WholeTone => "Whole Tone",
            Self::Octatonic => "Octatonic",
            Self::Chromatic => "Chromatic",
        }
    }

    /// Abbreviated name for tables and status lines.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Major => "Maj",
            Self::NaturalMinor => "Min",
            Self::HarmonicMinor => "HMin",
            Self::MelodicMinor => "MMin",
            Self::Dorian => "Dor",
            Self::Phrygian => "Phr",
            Self::Lydian => "Lyd",
            Self::Mixolydian => "Mix",
            Self::Locrian => "Loc",
            Self::MajorPentatonic => "PMaj",
            Self::MinorPentatonic => "PMin",
            Self::Blues => "Blues",
            Self::WholeTone => "Whole",
            Self::Octatonic => "Oct",
            Self::Chromatic => "Chr",
        }
    }

    /// Steps between consecutive degrees, tonic to octave.
    pub fn steps(self) -> &'static [StepCode] {
        use StepCode::{Augmented as A, Major as M, Minor as H};
        match self {
            Self::Major => &[M, M, H, M, M, M, H],
            Self::NaturalMinor => &[M, H, M, M, H, M, M],
            Self::HarmonicMinor => &[M, H, M, M, H, A, H],
            Self::MelodicMinor => &[M, H, M, M, M, M, H],
            Self::Dorian => &[M, H, M, M, M, H, M],
            Self::Phrygian => &[H, M, M, M, H, M, M],
            Self::Lydian => &[M, M, M, H, M, M, H],
            Self::Mixolydian => &[M, M, H, M, M, H, M],
            Self::Locrian => &[H, M, M, H, M, M, M],
            Self::MajorPentatonic => &[M, M, A, M, A],
            Self::MinorPentatonic => &[A, M, M, A, M],
            Self::Blues => &[A, M, H, H, A, M],
            Self::WholeTone => &[M, M, M, M, M, M],
            Self::Octatonic => &[M, H, M, H, M, H, M, H],
            Self::Chromatic => &[H; 12],
        }
    }

    pub fn pattern(self) -> Pattern {
        Pattern::from(self.steps())
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Major => &["major", "maj", "ionian"],
            Self::NaturalMinor => &["natural minor", "minor", "min", "aeolian"],
            Self::HarmonicMinor => &["harmonic minor"],
            Self::MelodicMinor => &["melodic minor"],
            Self::Dorian => &["dorian", "dor"],
            Self::Phrygian => &["phrygian"],
            Self::Lydian => &["lydian"],
            Self::Mixolydian => &["mixolydian", "mix"],
            Self::Locrian => &["locrian"],
            Self::MajorPentatonic => &["major pentatonic", "penta maj"],
            Self::MinorPentatonic => &["minor pentatonic", "penta min"],
            Self::Blues => &["blues"],
            Self::WholeTone => &["whole tone", "hexatonic"],
            Self::Octatonic => &["octatonic", "diminished"],
            Self::Chromatic => &["chromatic"],
        }
    }
}

impl std::fmt::Display for NamedScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl std::str::FromStr for NamedScale {
    type Err = ScaleError;

    /// Case-insensitive; `-` and `_` read as spaces ("whole-tone", "natural_minor").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|scale| scale.aliases().iter().any(|&alias| alias == wanted))
            .ok_or_else(|| ScaleError::UnknownScaleName(s.to_string()))
    }
}
