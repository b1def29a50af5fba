// String Renderer - Masks one guitar string against a scale or chord
// Fret f of a string tuned to `root` sounds alphabet[(root + f) % 12]

use super::types::{Cell, Note, TheoryError, TheoryResult};

/// Render `fret_count` frets of a string starting at alphabet index `root`.
///
/// Frets whose note is in `members` keep their name; the rest are blanked.
pub fn render_string(
    root: usize,
    alphabet: &[Note],
    members: &[Note],
    fret_count: usize,
) -> TheoryResult<Vec<Cell>> {
    if alphabet.is_empty() {
        return Err(TheoryError::InvalidArgument(
            "cannot render a string over an empty alphabet".to_string(),
        ));
    }
    if root >= alphabet.len() {
        return Err(TheoryError::InvalidArgument(format!(
            "string root index {} outside alphabet of length {}",
            root,
            alphabet.len()
        )));
    }
    if fret_count == 0 {
        return Err(TheoryError::InvalidArgument(
            "fret count must be positive".to_string(),
        ));
    }

    Ok((0..fret_count)
        .map(|fret| {
            let note = &alphabet[(root + fret) % alphabet.len()];
            if members.contains(note) {
                Cell::Label(note.clone())
            } else {
                Cell::Blank
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(names: &[&str]) -> Vec<Note> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn chromatic() -> Vec<Note> {
        notes(&["C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B"])
    }

    fn label(note: &str) -> Cell {
        Cell::Label(note.to_string())
    }

    #[test]
    fn test_low_e_against_c_major() {
        let c_major = notes(&["C", "D", "E", "F", "G", "A", "B"]);
        let row = render_string(4, &chromatic(), &c_major, 4).unwrap();
        assert_eq!(row, vec![label("E"), label("F"), Cell::Blank, label("G")]);
    }

    #[test]
    fn test_row_length_matches_fret_count() {
        let chromatic = chromatic();
        for fret_count in [1, 12, 16, 24] {
            let row = render_string(9, &chromatic, &chromatic, fret_count).unwrap();
            assert_eq!(row.len(), fret_count);
            assert!(row.iter().all(|cell| !cell.is_blank()));
        }
    }

    #[test]
    fn test_wraps_at_octave() {
        let row = render_string(11, &chromatic(), &notes(&["C"]), 14).unwrap();
        assert_eq!(row[1], label("C"));
        assert_eq!(row[13], label("C"));
        assert_eq!(row.iter().filter(|c| !c.is_blank()).count(), 2);
    }

    #[test]
    fn test_empty_member_set_blanks_everything() {
        let row = render_string(0, &chromatic(), &[], 5).unwrap();
        assert!(row.iter().all(Cell::is_blank));
    }

    #[test]
    fn test_rejects_bad_arguments() {
        let chromatic = chromatic();
        assert!(render_string(12, &chromatic, &chromatic, 4).is_err());
        assert!(render_string(0, &chromatic, &chromatic, 0).is_err());
        assert!(render_string(0, &[], &chromatic, 4).is_err());
    }
}
