// Fretboard Grid - Rendered strings and their two orientations
// Horizontal: [string][fret], highest string first
// Vertical:   [fret][string], lowest string in the leftmost column

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::theory::{Cell, Note, TheoryResult};

/// A 2-D grid of cells, rows first
pub type Grid = Vec<Vec<Cell>>;

/// Display orientation of a fretboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// One row per string, frets left to right
    Horizontal,

    /// One row per fret, strings left to right
    Vertical,
}

/// One guitar string rendered across the fretboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRow {
    /// Guitar string number, 1 = highest-pitched string
    pub string: usize,

    /// Open-string note
    pub root: Note,

    /// One cell per fret, starting at the open string
    pub cells: Vec<Cell>,
}

/// All strings of a tuning rendered against one scale or chord.
///
/// Strings are keyed by position, never by root name, so tunings that
/// repeat a note (E standard, open G, DADGAD) keep every string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fretboard {
    pub fret_count: usize,

    /// Highest string first
    pub strings: Vec<StringRow>,
}

/// Fretboards for each chord of a scale, keyed by degree name
pub type ChordFretboards = IndexMap<String, Fretboard>;

impl Fretboard {
    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Row for a 1-based string number
    pub fn string(&self, number: usize) -> Option<&StringRow> {
        self.strings.iter().find(|row| row.string == number)
    }

    /// [string][fret] grid, highest string first
    pub fn horizontal(&self) -> Grid {
        self.strings.iter().map(|row| row.cells.clone()).collect()
    }

    /// [fret][string] grid, lowest string first
    pub fn vertical(&self) -> Grid {
        to_vertical(&self.horizontal())
    }

    pub fn grid(&self, orientation: Orientation) -> Grid {
        match orientation {
            Orientation::Horizontal => self.horizontal(),
            Orientation::Vertical => self.vertical(),
        }
    }

    /// Copy of this fretboard with every labeled cell passed through
    /// `relabel`; blank cells stay blank
    pub fn relabel<F>(&self, mut relabel: F) -> TheoryResult<Fretboard>
    where
        F: FnMut(&str) -> TheoryResult<String>,
    {
        let strings = self
            .strings
            .iter()
            .map(|row| {
                let cells = row
                    .cells
                    .iter()
                    .map(|cell| match cell {
                        Cell::Label(label) => relabel(label.as_str()).map(Cell::Label),
                        Cell::Blank => Ok(Cell::Blank),
                    })
                    .collect::<TheoryResult<Vec<Cell>>>()?;
                Ok(StringRow {
                    string: row.string,
                    root: row.root.clone(),
                    cells,
                })
            })
            .collect::<TheoryResult<Vec<StringRow>>>()?;

        Ok(Fretboard {
            fret_count: self.fret_count,
            strings,
        })
    }
}

/// Rotate a horizontal grid: `vertical[f][N-1-i] = horizontal[i][f]`.
///
/// # Panics
/// If the rows have different lengths.
pub fn to_vertical<T: Clone>(horizontal: &[Vec<T>]) -> Vec<Vec<T>> {
    let strings = horizontal.len();
    let frets = horizontal.first().map_or(0, Vec::len);

    (0..frets)
        .map(|fret| {
            (0..strings)
                .map(|column| horizontal[strings - 1 - column][fret].clone())
                .collect()
        })
        .collect()
}

/// Inverse of [`to_vertical`]: `horizontal[i][f] = vertical[f][N-1-i]`.
///
/// # Panics
/// If the rows have different lengths.
pub fn to_horizontal<T: Clone>(vertical: &[Vec<T>]) -> Vec<Vec<T>> {
    let frets = vertical.len();
    let strings = vertical.first().map_or(0, Vec::len);

    (0..strings)
        .map(|string| {
            (0..frets)
                .map(|fret| vertical[fret][strings - 1 - string].clone())
                .collect()
        })
        .collect()
}
