// Fretboard Layout - Renders every string of a tuning against a scale or chord
// Memoized by (sequence root, scale/chord type, tuning, fret count)

use std::sync::Arc;

use super::cache::MemoCache;
use super::chord::ChordSet;
use super::grid::{ChordFretboards, Fretboard, StringRow};
use crate::library::{Library, Tuning};
use crate::theory::{render_string, ChordType, Note, ScaleType, TheoryError, TheoryResult};

type ScaleBoardKey = (Note, ScaleType, Vec<Note>, usize);
type ChordBoardKey = (Note, ScaleType, ChordType, Vec<Note>, usize);

pub struct FretboardLayout {
    library: Arc<Library>,
    scale_boards: MemoCache<ScaleBoardKey, Fretboard>,
    chord_boards: MemoCache<ChordBoardKey, ChordFretboards>,
}

impl FretboardLayout {
    pub fn new(library: Arc<Library>) -> Self {
        FretboardLayout {
            library,
            scale_boards: MemoCache::new("scale fretboard"),
            chord_boards: MemoCache::new("chord fretboard"),
        }
    }

    /// Render every string of `tuning`, keeping only notes in `members`.
    ///
    /// Uncached; the `get_or_compute_*` methods memoize on top of this.
    pub fn render(
        &self,
        members: &[Note],
        tuning: &Tuning,
        fret_count: usize,
    ) -> TheoryResult<Fretboard> {
        if tuning.strings.is_empty() {
            return Err(TheoryError::InvalidArgument(format!(
                "tuning {:?} has no strings",
                tuning.name
            )));
        }

        let alphabet = self.library.alphabet();
        let strings = tuning
            .top_down()
            .enumerate()
            .map(|(position, root)| {
                let root_index = alphabet.index_of(root)?;
                Ok(StringRow {
                    string: position + 1,
                    root: root.clone(),
                    cells: render_string(root_index, alphabet.notes(), members, fret_count)?,
                })
            })
            .collect::<TheoryResult<Vec<StringRow>>>()?;

        Ok(Fretboard {
            fret_count,
            strings,
        })
    }

    /// Every fret labeled with its note
    pub fn chromatic(&self, tuning: &Tuning, fret_count: usize) -> TheoryResult<Fretboard> {
        self.render(self.library.alphabet().notes(), tuning, fret_count)
    }

    /// Fretboard showing the notes of one scale
    pub fn get_or_compute_scale(
        &self,
        scale_notes: &[Note],
        scale_type: ScaleType,
        tuning: &Tuning,
        fret_count: usize,
    ) -> TheoryResult<Arc<Fretboard>> {
        let root = scale_notes.first().ok_or_else(|| {
            TheoryError::InvalidArgument("cannot lay out an empty scale".to_string())
        })?;
        let key = (
            root.clone(),
            scale_type,
            tuning.strings.clone(),
            fret_count,
        );

        self.scale_boards.get_or_try_insert_with(key, || {
            self.render(scale_notes, tuning, fret_count)
        })
    }

    /// One fretboard per chord of a chord set, in degree order
    pub fn get_or_compute_chord(
        &self,
        chord_set: &ChordSet,
        tuning: &Tuning,
        fret_count: usize,
    ) -> TheoryResult<Arc<ChordFretboards>> {
        let key = (
            chord_set.root.clone(),
            chord_set.scale_type,
            chord_set.chord_type,
            tuning.strings.clone(),
            fret_count,
        );

        self.chord_boards.get_or_try_insert_with(key, || {
            chord_set
                .chords
                .iter()
                .map(|(label, tones)| Ok((label.clone(), self.render(tones, tuning, fret_count)?)))
                .collect()
        })
    }

    /// Replace note names with their interval above `root` (`1`, `b3`, `5`...)
    pub fn interval_fretboard(&self, board: &Fretboard, root: &str) -> TheoryResult<Fretboard> {
        let alphabet = self.library.alphabet();
        alphabet.index_of(root)?;
        board.relabel(|note| {
            let semitones = alphabet.semitones_between(root, note)?;
            self.library.interval_name(semitones).map(str::to_string)
        })
    }

    /// Number of scale and chord fretboards computed (cache misses) so far
    pub fn computations(&self) -> usize {
        self.scale_boards.computations() + self.chord_boards.computations()
    }
}
