// Tuning Presets
// Open-string roots, lowest string first

use std::collections::BTreeMap;

use crate::theory::Note;

/// Built-in tunings keyed by preset name
pub fn standard_tunings() -> BTreeMap<String, Vec<Note>> {
    let presets: [(&str, &[&str]); 11] = [
        ("e_standard", &["E", "A", "D", "G", "B", "E"]),
        ("eb_standard", &["Eb", "Ab", "C#", "F#", "Bb", "Eb"]),
        ("d_standard", &["D", "G", "C", "F", "A", "D"]),
        ("drop_d", &["D", "A", "D", "G", "B", "E"]),
        ("drop_c", &["C", "G", "C", "F", "A", "D"]),
        ("open_c", &["C", "G", "C", "G", "C", "E"]),
        ("open_d", &["D", "A", "D", "F#", "A", "D"]),
        ("open_e", &["E", "B", "E", "Ab", "B", "E"]),
        ("open_g", &["D", "G", "D", "G", "B", "D"]),
        ("dadgad", &["D", "A", "D", "G", "A", "D"]),
        ("bass_standard", &["E", "A", "D", "G"]),
    ];

    presets
        .iter()
        .map(|(name, strings)| {
            (
                name.to_string(),
                strings.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect()
}
