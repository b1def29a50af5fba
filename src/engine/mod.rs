// Fretboard Engines - Scales, chords and fretboard layouts
// Each engine takes the previous one's output as input and memoizes its own

pub mod cache;
pub mod grid;
pub mod scale;
pub mod chord;
pub mod layout;

pub use cache::MemoCache;
pub use grid::{to_horizontal, to_vertical, ChordFretboards, Fretboard, Grid, Orientation, StringRow};
pub use scale::ScaleEngine;
pub use chord::{ChordEngine, ChordSet};
pub use layout::FretboardLayout;
