// Text Display - Fixed-width fretboard rendering for terminals
// Every cell is padded to two characters; blank frets print as `__`

use crate::engine::{ChordFretboards, Fretboard, Grid, Orientation};
use crate::theory::{Cell, BLANK};

const CELL_WIDTH: usize = 2;

fn format_row<'a>(cells: impl IntoIterator<Item = &'a str>) -> String {
    cells
        .into_iter()
        .map(|cell| format!("{:<width$}", cell, width = CELL_WIDTH))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

fn cell_text(cell: &Cell) -> &str {
    cell.label().unwrap_or(BLANK)
}

/// One line per grid row
pub fn format_grid(grid: &Grid) -> String {
    grid.iter()
        .map(|row| format_row(row.iter().map(cell_text)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fret numbers `0..fret_count`, the open string being fret 0
pub fn fret_markers(fret_count: usize) -> Vec<String> {
    (0..fret_count).map(|fret| fret.to_string()).collect()
}

/// Render a fretboard in either orientation.
///
/// With `fret_marker`, horizontal boards get a fret-number row underneath and
/// vertical boards get a fret-number column on the left.
pub fn format_fretboard(board: &Fretboard, orientation: Orientation, fret_marker: bool) -> String {
    let grid = board.grid(orientation);

    if !fret_marker {
        return format_grid(&grid);
    }

    let markers = fret_markers(board.fret_count);
    match orientation {
        Orientation::Horizontal => {
            let mut lines: Vec<String> = grid
                .iter()
                .map(|row| format_row(row.iter().map(cell_text)))
                .collect();
            lines.push(format_row(markers.iter().map(String::as_str)));
            lines.join("\n")
        }
        Orientation::Vertical => grid
            .iter()
            .zip(&markers)
            .map(|(row, marker)| {
                format_row(std::iter::once(marker.as_str()).chain(row.iter().map(cell_text)))
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Every chord fretboard under its degree name, separated by blank lines
pub fn format_chord_fretboards(
    boards: &ChordFretboards,
    orientation: Orientation,
    fret_marker: bool,
) -> String {
    boards
        .iter()
        .map(|(degree, board)| {
            format!("{}\n{}", degree, format_fretboard(board, orientation, fret_marker))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
