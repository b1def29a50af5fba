// Library Type Definitions
// Immutable lookup tables shared by every engine

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

use crate::theory::{
    ChordType, ChromaticAlphabet, Note, ScaleType, TheoryError, TheoryResult,
};

/// Errors raised while loading or validating a library
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration incomplete: {0}")]
    ConfigurationIncomplete(String),

    #[error("Failed to get config directory")]
    NoConfigDir,
}

pub type LibraryResult<T> = Result<T, LibraryError>;

/// Fret count used when a library file does not set one
pub const DEFAULT_FRET_COUNT: usize = 16;

fn default_fret_count() -> usize {
    DEFAULT_FRET_COUNT
}

/// Open-string roots of an instrument, lowest string first
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tuning {
    pub name: String,
    pub strings: Vec<Note>,
}

impl Tuning {
    pub fn new(name: impl Into<String>, strings: Vec<Note>) -> TheoryResult<Self> {
        let name = name.into();
        if strings.is_empty() {
            return Err(TheoryError::InvalidArgument(format!(
                "tuning {:?} has no strings",
                name
            )));
        }
        Ok(Tuning { name, strings })
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Open-string roots from the highest string down, the order a
    /// horizontal fretboard is drawn in
    pub fn top_down(&self) -> impl Iterator<Item = &Note> {
        self.strings.iter().rev()
    }
}

/// Static configuration: alphabet, interval tables, degree names, tunings
///
/// Built once (from defaults or a JSON file), validated, then shared
/// read-only for the rest of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Library {
    pub(super) alphabet: ChromaticAlphabet,
    pub(super) scale_intervals: BTreeMap<ScaleType, Vec<usize>>,
    pub(super) chord_intervals: BTreeMap<ChordType, Vec<usize>>,
    pub(super) chord_degrees: BTreeMap<ChordType, BTreeMap<ScaleType, Vec<String>>>,
    pub(super) interval_names: Vec<String>,
    pub(super) tunings: BTreeMap<String, Vec<Note>>,
    #[serde(default = "default_fret_count")]
    pub(super) fret_count: usize,
}

impl Library {
    pub fn alphabet(&self) -> &ChromaticAlphabet {
        &self.alphabet
    }

    pub fn fret_count(&self) -> usize {
        self.fret_count
    }

    /// Semitone pattern of a scale type
    pub fn scale_pattern(&self, scale_type: ScaleType) -> TheoryResult<&[usize]> {
        self.scale_intervals
            .get(&scale_type)
            .map(Vec::as_slice)
            .ok_or_else(|| TheoryError::not_found("scale pattern", scale_type.as_str()))
    }

    /// Scale-step pattern of a chord type
    pub fn chord_pattern(&self, chord_type: ChordType) -> TheoryResult<&[usize]> {
        self.chord_intervals
            .get(&chord_type)
            .map(Vec::as_slice)
            .ok_or_else(|| TheoryError::not_found("chord pattern", chord_type.as_str()))
    }

    /// Roman-numeral names of the chords on each degree of a scale
    pub fn degree_labels(
        &self,
        chord_type: ChordType,
        scale_type: ScaleType,
    ) -> TheoryResult<&[String]> {
        self.chord_degrees
            .get(&chord_type)
            .and_then(|by_scale| by_scale.get(&scale_type))
            .map(Vec::as_slice)
            .ok_or_else(|| {
                TheoryError::not_found("degree labels", format!("{}/{}", chord_type, scale_type))
            })
    }

    /// Name of the interval `semitones` above a root
    pub fn interval_name(&self, semitones: usize) -> TheoryResult<&str> {
        self.interval_names
            .get(semitones)
            .map(String::as_str)
            .ok_or_else(|| TheoryError::not_found("interval name", semitones.to_string()))
    }

    /// Look up a tuning preset by name
    pub fn tuning(&self, name: &str) -> TheoryResult<Tuning> {
        let key = name.trim().to_lowercase();
        self.tunings
            .get(&key)
            .map(|strings| Tuning {
                name: key.clone(),
                strings: strings.clone(),
            })
            .ok_or_else(|| TheoryError::not_found("tuning", name))
    }

    /// All tuning preset names, sorted
    pub fn tuning_names(&self) -> Vec<&str> {
        self.tunings.keys().map(String::as_str).collect()
    }

    /// Copy of this library with a different fret count
    pub fn with_fret_count(mut self, fret_count: usize) -> LibraryResult<Self> {
        self.fret_count = fret_count;
        self.validate()?;
        Ok(self)
    }

    /// Copy of this library with an added (or replaced) tuning preset
    pub fn with_tuning(mut self, tuning: Tuning) -> LibraryResult<Self> {
        self.tunings.insert(tuning.name.to_lowercase(), tuning.strings);
        self.validate()?;
        Ok(self)
    }

    /// Check every table against the alphabet and the full cross-product of
    /// scale and chord types.
    pub fn validate(&self) -> LibraryResult<()> {
        self.validate_alphabet()?;
        self.validate_patterns()?;
        self.validate_degrees()?;
        self.validate_tunings()?;

        if self.interval_names.len() != self.alphabet.len() {
            return Err(LibraryError::ConfigurationIncomplete(format!(
                "expected {} interval names, found {}",
                self.alphabet.len(),
                self.interval_names.len()
            )));
        }
        if self.fret_count == 0 {
            return Err(LibraryError::InvalidArgument(
                "fret count must be positive".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_alphabet(&self) -> LibraryResult<()> {
        let notes = self.alphabet.notes();
        if notes.len() != ChromaticAlphabet::LEN {
            return Err(LibraryError::InvalidArgument(format!(
                "chromatic alphabet must have {} notes, found {}",
                ChromaticAlphabet::LEN,
                notes.len()
            )));
        }
        if notes.iter().any(|n| n.trim().is_empty()) {
            return Err(LibraryError::InvalidArgument(
                "chromatic alphabet contains an empty note name".to_string(),
            ));
        }
        let distinct: HashSet<&Note> = notes.iter().collect();
        if distinct.len() != notes.len() {
            return Err(LibraryError::InvalidArgument(
                "chromatic alphabet contains duplicate note names".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_patterns(&self) -> LibraryResult<()> {
        for scale_type in ScaleType::ALL {
            let intervals = self.scale_intervals.get(&scale_type).ok_or_else(|| {
                LibraryError::ConfigurationIncomplete(format!(
                    "no interval pattern for scale type {}",
                    scale_type
                ))
            })?;
            if intervals.is_empty() {
                return Err(LibraryError::InvalidArgument(format!(
                    "empty interval pattern for scale type {}",
                    scale_type
                )));
            }
            if let Some(&offset) = intervals.iter().find(|&&i| i >= self.alphabet.len()) {
                return Err(LibraryError::InvalidArgument(format!(
                    "scale type {} has offset {} beyond one octave",
                    scale_type, offset
                )));
            }
        }

        for chord_type in ChordType::ALL {
            let intervals = self.chord_intervals.get(&chord_type).ok_or_else(|| {
                LibraryError::ConfigurationIncomplete(format!(
                    "no interval pattern for chord type {}",
                    chord_type
                ))
            })?;
            if intervals.is_empty() {
                return Err(LibraryError::InvalidArgument(format!(
                    "empty interval pattern for chord type {}",
                    chord_type
                )));
            }
            if let Some(&offset) = intervals.iter().find(|&&i| i >= self.alphabet.len()) {
                return Err(LibraryError::InvalidArgument(format!(
                    "chord type {} has step {} beyond one octave",
                    chord_type, offset
                )));
            }
        }

        Ok(())
    }

    fn validate_degrees(&self) -> LibraryResult<()> {
        for chord_type in ChordType::ALL {
            for scale_type in ScaleType::ALL {
                let labels = self.degree_labels(chord_type, scale_type).map_err(|_| {
                    LibraryError::ConfigurationIncomplete(format!(
                        "no degree labels for {} chords in {}",
                        chord_type, scale_type
                    ))
                })?;
                let degrees = self.scale_intervals.get(&scale_type).map_or(0, Vec::len);
                if labels.len() != degrees {
                    return Err(LibraryError::ConfigurationIncomplete(format!(
                        "{} chords in {} need {} degree labels, found {}",
                        chord_type,
                        scale_type,
                        degrees,
                        labels.len()
                    )));
                }
                let distinct: HashSet<&String> = labels.iter().collect();
                if distinct.len() != labels.len() {
                    return Err(LibraryError::ConfigurationIncomplete(format!(
                        "{} chords in {} repeat a degree label",
                        chord_type, scale_type
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_tunings(&self) -> LibraryResult<()> {
        for (name, strings) in &self.tunings {
            // Lookups lowercase the requested name
            if *name != name.trim().to_lowercase() {
                return Err(LibraryError::InvalidArgument(format!(
                    "tuning name {:?} must be lowercase",
                    name
                )));
            }
            if strings.is_empty() {
                return Err(LibraryError::InvalidArgument(format!(
                    "tuning {} has no strings",
                    name
                )));
            }
            if let Some(note) = strings.iter().find(|n| !self.alphabet.contains(n)) {
                return Err(LibraryError::InvalidArgument(format!(
                    "tuning {} uses unknown note {}",
                    name, note
                )));
            }
        }
        Ok(())
    }
}
