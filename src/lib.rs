// Fretboard - Scale, chord and tuning layouts for stringed instruments
// Module declarations

pub mod display;
pub mod engine;
pub mod library;
pub mod service;
pub mod theory;

pub use engine::{ChordFretboards, ChordSet, Fretboard, Orientation};
pub use library::{default_library_path, Library, LibraryError, LibraryResult, Tuning};
pub use service::{CacheStats, FretboardService};
pub use theory::{Cell, ChordType, Note, ScaleType, TheoryError, TheoryResult};
