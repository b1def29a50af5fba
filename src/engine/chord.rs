// Chord Engine - Chord tones on every degree of a scale
// Chord patterns are scale-step offsets, so the scale itself is the alphabet
// the Note Sequencer walks. Memoized by (scale root, scale type, chord type).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::cache::MemoCache;
use crate::library::Library;
use crate::theory::{derive_sequence, ChordType, Note, ScaleType, TheoryError, TheoryResult};

/// Chords built on each degree of one scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordSet {
    /// First note of the source scale
    pub root: Note,
    pub scale_type: ScaleType,
    pub chord_type: ChordType,

    /// Degree name -> chord tones, in degree order
    pub chords: IndexMap<String, Vec<Note>>,
}

impl ChordSet {
    /// Degree name and tones of the chord on a 1-based degree
    pub fn degree(&self, degree: usize) -> Option<(&String, &Vec<Note>)> {
        degree.checked_sub(1).and_then(|index| self.chords.get_index(index))
    }

    /// Tones of the chord with the given degree name
    pub fn get(&self, label: &str) -> Option<&Vec<Note>> {
        self.chords.get(label)
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

pub struct ChordEngine {
    library: Arc<Library>,
    cache: MemoCache<(Note, ScaleType, ChordType), ChordSet>,
}

impl ChordEngine {
    pub fn new(library: Arc<Library>) -> Self {
        ChordEngine {
            library,
            cache: MemoCache::new("chord"),
        }
    }

    /// Chords of `chord_type` on every degree of `scale_notes`
    pub fn get_or_compute(
        &self,
        scale_notes: &[Note],
        scale_type: ScaleType,
        chord_type: ChordType,
    ) -> TheoryResult<Arc<ChordSet>> {
        let root = scale_notes.first().ok_or_else(|| {
            TheoryError::InvalidArgument("cannot build chords from an empty scale".to_string())
        })?;

        self.cache
            .get_or_try_insert_with((root.clone(), scale_type, chord_type), || {
                self.compute(scale_notes, scale_type, chord_type)
            })
    }

    fn compute(
        &self,
        scale_notes: &[Note],
        scale_type: ScaleType,
        chord_type: ChordType,
    ) -> TheoryResult<ChordSet> {
        if let Some(note) = scale_notes
            .iter()
            .find(|note| !self.library.alphabet().contains(note))
        {
            return Err(TheoryError::not_found("note", note.as_str()));
        }

        let intervals = self.library.chord_pattern(chord_type)?;
        let labels = self.library.degree_labels(chord_type, scale_type)?;
        if labels.len() != scale_notes.len() {
            return Err(TheoryError::InvalidArgument(format!(
                "{} has {} degrees but {} scale notes were given",
                scale_type,
                labels.len(),
                scale_notes.len()
            )));
        }

        let mut chords = IndexMap::with_capacity(labels.len());
        for (degree, label) in labels.iter().enumerate() {
            let tones = derive_sequence(degree, scale_notes, intervals)?;
            if chords.insert(label.clone(), tones).is_some() {
                return Err(TheoryError::InvalidArgument(format!(
                    "degree label {} repeats in {} {} chords",
                    label, scale_type, chord_type
                )));
            }
        }

        Ok(ChordSet {
            root: scale_notes[0].clone(),
            scale_type,
            chord_type,
            chords,
        })
    }

    /// Number of chord sets computed (cache misses) so far
    pub fn computations(&self) -> usize {
        self.cache.computations()
    }
}
