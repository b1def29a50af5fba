// Music Theory Type Definitions
// Note names, scale and chord qualities, fretboard cells

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A note name from the chromatic alphabet (e.g. "C", "F#", "Bb")
pub type Note = String;

/// Placeholder printed for fret positions outside the scale or chord
pub const BLANK: &str = "__";

/// Errors raised by lookups and sequence derivation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type TheoryResult<T> = Result<T, TheoryError>;

impl TheoryError {
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        TheoryError::NotFound {
            kind,
            name: name.into(),
        }
    }
}

/// Scale types with a configured semitone pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    MajorScale,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    IonianMode,
    DorianMode,
    PhrygianMode,
    LydianMode,
    MixolydianMode,
    AeolianMode,
    LocrianMode,
    PentatonicMajor,
    PentatonicMinor,
}

impl ScaleType {
    pub const ALL: [ScaleType; 13] = [
        ScaleType::MajorScale,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::IonianMode,
        ScaleType::DorianMode,
        ScaleType::PhrygianMode,
        ScaleType::LydianMode,
        ScaleType::MixolydianMode,
        ScaleType::AeolianMode,
        ScaleType::LocrianMode,
        ScaleType::PentatonicMajor,
        ScaleType::PentatonicMinor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleType::MajorScale => "major_scale",
            ScaleType::NaturalMinor => "natural_minor",
            ScaleType::HarmonicMinor => "harmonic_minor",
            ScaleType::MelodicMinor => "melodic_minor",
            ScaleType::IonianMode => "ionian_mode",
            ScaleType::DorianMode => "dorian_mode",
            ScaleType::PhrygianMode => "phrygian_mode",
            ScaleType::LydianMode => "lydian_mode",
            ScaleType::MixolydianMode => "mixolydian_mode",
            ScaleType::AeolianMode => "aeolian_mode",
            ScaleType::LocrianMode => "locrian_mode",
            ScaleType::PentatonicMajor => "pentatonic_major",
            ScaleType::PentatonicMinor => "pentatonic_minor",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ScaleType::ALL
            .iter()
            .copied()
            .find(|scale_type| scale_type.as_str() == wanted)
            .ok_or_else(|| TheoryError::not_found("scale type", s))
    }
}

/// Chord qualities, expressed as scale-step offsets from each degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    /// Root, third, fifth
    Triad,

    /// Root, third, fifth, seventh
    Seventh,
}

impl ChordType {
    pub const ALL: [ChordType; 2] = [ChordType::Triad, ChordType::Seventh];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChordType::Triad => "triad",
            ChordType::Seventh => "seventh",
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChordType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ChordType::ALL
            .iter()
            .copied()
            .find(|chord_type| chord_type.as_str() == wanted)
            .ok_or_else(|| TheoryError::not_found("chord type", s))
    }
}

/// One fret position on a rendered string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// A note name, or an interval name on interval fretboards
    Label(String),

    /// Position outside the scale or chord
    Blank,
}

impl Cell {
    pub fn label(&self) -> Option<&str> {
        match self {
            Cell::Label(label) => Some(label.as_str()),
            Cell::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Label(label) => f.write_str(label),
            Cell::Blank => f.write_str(BLANK),
        }
    }
}
