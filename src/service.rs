// Fretboard Service - Public API over the scale, chord and layout engines
// All engines share one validated, read-only Library

use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use crate::engine::{
    ChordEngine, ChordFretboards, ChordSet, Fretboard, FretboardLayout, ScaleEngine,
};
use crate::library::{Library, LibraryResult, Tuning};
use crate::theory::{ChordType, Note, ScaleType, TheoryResult};

/// Cache misses per engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub scales: usize,
    pub chords: usize,
    pub fretboards: usize,
}

pub struct FretboardService {
    library: Arc<Library>,
    scales: ScaleEngine,
    chords: ChordEngine,
    layout: FretboardLayout,
}

impl FretboardService {
    /// Validate `library` and build the engines on top of it
    pub fn new(library: Library) -> LibraryResult<Self> {
        library.validate()?;
        let library = Arc::new(library);

        Ok(FretboardService {
            scales: ScaleEngine::new(Arc::clone(&library)),
            chords: ChordEngine::new(Arc::clone(&library)),
            layout: FretboardLayout::new(Arc::clone(&library)),
            library,
        })
    }

    /// Service over the built-in tables
    pub fn standard() -> LibraryResult<Self> {
        FretboardService::new(Library::standard())
    }

    /// Service over a library file, or the built-in tables if it is missing
    pub fn from_library_file(path: &Path) -> LibraryResult<Self> {
        FretboardService::new(Library::load_or_standard(path)?)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Look up a tuning preset by name
    pub fn tuning(&self, name: &str) -> TheoryResult<Tuning> {
        self.library.tuning(name)
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            scales: self.scales.computations(),
            chords: self.chords.computations(),
            fretboards: self.layout.computations(),
        }
    }

    // ==================== SCALES ====================

    pub fn get_or_compute_scale(
        &self,
        key: &str,
        scale_type: ScaleType,
    ) -> TheoryResult<Arc<Vec<Note>>> {
        self.scales.get_or_compute(key, scale_type)
    }

    // ==================== CHORDS ====================

    pub fn get_or_compute_chord(
        &self,
        scale_notes: &[Note],
        scale_type: ScaleType,
        chord_type: ChordType,
    ) -> TheoryResult<Arc<ChordSet>> {
        self.chords.get_or_compute(scale_notes, scale_type, chord_type)
    }

    // ==================== FRETBOARDS ====================

    pub fn get_or_compute_scale_fretboard(
        &self,
        scale_notes: &[Note],
        scale_type: ScaleType,
        tuning: &Tuning,
    ) -> TheoryResult<Arc<Fretboard>> {
        self.layout
            .get_or_compute_scale(scale_notes, scale_type, tuning, self.library.fret_count())
    }

    pub fn get_or_compute_chord_fretboard(
        &self,
        chord_set: &ChordSet,
        tuning: &Tuning,
    ) -> TheoryResult<Arc<ChordFretboards>> {
        self.layout
            .get_or_compute_chord(chord_set, tuning, self.library.fret_count())
    }

    /// Every fret labeled, no scale applied
    pub fn chromatic_fretboard(&self, tuning: &Tuning) -> TheoryResult<Fretboard> {
        self.layout.chromatic(tuning, self.library.fret_count())
    }

    /// Scale fretboard labeled with intervals above the key
    pub fn interval_fretboard(
        &self,
        key: &str,
        scale_type: ScaleType,
        tuning: &Tuning,
    ) -> TheoryResult<Fretboard> {
        let scale = self.get_or_compute_scale(key, scale_type)?;
        let board = self.get_or_compute_scale_fretboard(&scale, scale_type, tuning)?;
        self.layout.interval_fretboard(&board, key)
    }

    // ==================== BY NAME ====================

    /// Scale fretboard from key, scale type and tuning preset names
    pub fn scale_fretboard_by_name(
        &self,
        key: &str,
        scale_type: &str,
        tuning: &str,
    ) -> TheoryResult<Arc<Fretboard>> {
        let scale_type: ScaleType = scale_type.parse()?;
        let tuning = self.tuning(tuning)?;
        let scale = self.get_or_compute_scale(key, scale_type)?;
        self.get_or_compute_scale_fretboard(&scale, scale_type, &tuning)
    }

    /// Chord fretboards from key, scale type, chord type and tuning preset names
    pub fn chord_fretboard_by_name(
        &self,
        key: &str,
        scale_type: &str,
        chord_type: &str,
        tuning: &str,
    ) -> TheoryResult<Arc<ChordFretboards>> {
        let scale_type: ScaleType = scale_type.parse()?;
        let chord_type: ChordType = chord_type.parse()?;
        let tuning = self.tuning(tuning)?;
        let scale = self.get_or_compute_scale(key, scale_type)?;
        let chord_set = self.get_or_compute_chord(&scale, scale_type, chord_type)?;
        self.get_or_compute_chord_fretboard(&chord_set, &tuning)
    }
}
