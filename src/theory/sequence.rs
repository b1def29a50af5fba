// Note Sequencer - Interval patterns over a cyclic note alphabet
// Derives scales from the chromatic alphabet and chords from scale notes

use serde::{Deserialize, Serialize};

use super::types::{Note, TheoryError, TheoryResult};

/// The twelve semitone-spaced note names of one octave
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChromaticAlphabet(Vec<Note>);

impl ChromaticAlphabet {
    /// Number of notes in a valid alphabet
    pub const LEN: usize = 12;

    pub fn new(notes: Vec<Note>) -> Self {
        ChromaticAlphabet(notes)
    }

    pub fn notes(&self) -> &[Note] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, note: &str) -> bool {
        self.0.iter().any(|n| n == note)
    }

    /// Position of a note name in the alphabet
    pub fn index_of(&self, note: &str) -> TheoryResult<usize> {
        self.0
            .iter()
            .position(|n| n == note)
            .ok_or_else(|| TheoryError::not_found("note", note))
    }

    /// Semitone distance climbing from `from` to `to`, in [0, 12)
    pub fn semitones_between(&self, from: &str, to: &str) -> TheoryResult<usize> {
        let len = self.len();
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        Ok((to + len - from) % len)
    }
}

/// Walk a note sequence from `start` in steps of `intervals`, wrapping
/// around its end.
///
/// Used two ways:
/// - scales: `sequence` is the chromatic alphabet, intervals are semitones
/// - chords: `sequence` is a scale, intervals are scale steps
///
/// Output order follows `intervals`; repeated intervals are kept.
pub fn derive_sequence<T: Clone>(
    start: usize,
    sequence: &[T],
    intervals: &[usize],
) -> TheoryResult<Vec<T>> {
    if sequence.is_empty() {
        return Err(TheoryError::InvalidArgument(
            "cannot derive from an empty sequence".to_string(),
        ));
    }
    if start >= sequence.len() {
        return Err(TheoryError::InvalidArgument(format!(
            "start position {} outside sequence of length {}",
            start,
            sequence.len()
        )));
    }

    let len = sequence.len();
    Ok(intervals
        .iter()
        .map(|&interval| sequence[(start + interval % len) % len].clone())
        .collect())
}
