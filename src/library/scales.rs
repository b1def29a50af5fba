// Built-in Interval Patterns
// Semitone patterns for scales, scale-step patterns for chords

use std::collections::BTreeMap;

use crate::theory::{ChordType, Note, ScaleType};

/// Note names of the built-in chromatic alphabet
pub fn standard_alphabet() -> Vec<Note> {
    ["C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B"]
        .iter()
        .map(|n| n.to_string())
        .collect()
}

/// Semitone offsets from the key for every scale type
pub fn standard_scale_intervals() -> BTreeMap<ScaleType, Vec<usize>> {
    ScaleType::ALL
        .iter()
        .map(|&scale_type| {
            let intervals = match scale_type {
                ScaleType::MajorScale | ScaleType::IonianMode => vec![0, 2, 4, 5, 7, 9, 11],
                ScaleType::NaturalMinor | ScaleType::AeolianMode => vec![0, 2, 3, 5, 7, 8, 10],
                ScaleType::HarmonicMinor => vec![0, 2, 3, 5, 7, 8, 11],
                ScaleType::MelodicMinor => vec![0, 2, 3, 5, 7, 9, 11],
                ScaleType::DorianMode => vec![0, 2, 3, 5, 7, 9, 10],
                ScaleType::PhrygianMode => vec![0, 1, 3, 5, 7, 8, 10],
                ScaleType::LydianMode => vec![0, 2, 4, 6, 7, 9, 11],
                ScaleType::MixolydianMode => vec![0, 2, 4, 5, 7, 9, 10],
                ScaleType::LocrianMode => vec![0, 1, 3, 5, 6, 8, 10],
                ScaleType::PentatonicMajor => vec![0, 2, 4, 7, 9],
                ScaleType::PentatonicMinor => vec![0, 3, 5, 7, 10],
            };
            (scale_type, intervals)
        })
        .collect()
}

/// Scale-step offsets from each degree for every chord type
pub fn standard_chord_intervals() -> BTreeMap<ChordType, Vec<usize>> {
    ChordType::ALL
        .iter()
        .map(|&chord_type| {
            let intervals = match chord_type {
                ChordType::Triad => vec![0, 2, 4],
                ChordType::Seventh => vec![0, 2, 4, 6],
            };
            (chord_type, intervals)
        })
        .collect()
}

/// Interval names indexed by semitones above the root
pub fn standard_interval_names() -> Vec<String> {
    ["1", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7"]
        .iter()
        .map(|n| n.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_a_pattern() {
        let scales = standard_scale_intervals();
        assert_eq!(scales.len(), ScaleType::ALL.len());
        let chords = standard_chord_intervals();
        assert_eq!(chords.len(), ChordType::ALL.len());
    }

    #[test]
    fn test_patterns_start_at_root_and_ascend() {
        for (scale_type, intervals) in standard_scale_intervals() {
            assert_eq!(intervals[0], 0, "{} does not start at the root", scale_type);
            assert!(intervals.windows(2).all(|w| w[0] < w[1]));
            assert!(intervals.iter().all(|&i| i < 12));
        }
    }

    #[test]
    fn test_modes_share_parent_patterns() {
        let scales = standard_scale_intervals();
        assert_eq!(scales[&ScaleType::MajorScale], scales[&ScaleType::IonianMode]);
        assert_eq!(scales[&ScaleType::NaturalMinor], scales[&ScaleType::AeolianMode]);
    }
}
