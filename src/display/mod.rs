// Display - Text and JSON renderings of fretboards
// Consumes engine output only; nothing here feeds back into the engines

pub mod text;

// Re-export main types
pub use text::{format_chord_fretboards, format_fretboard, format_grid, fret_markers};

use serde::Serialize;

/// Pretty JSON for any fretboard, chord set or chord fretboard map
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
