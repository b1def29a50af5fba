// Chord Degree Names
// Roman numerals naming the chord built on each scale degree

use std::collections::BTreeMap;

use crate::theory::{ChordType, ScaleType};

fn triad_degrees(scale_type: ScaleType) -> &'static [&'static str] {
    match scale_type {
        ScaleType::MajorScale => &["I", "ii", "iii", "IV", "V", "vi", "vii°"],
        ScaleType::NaturalMinor => &["i", "ii°", "III", "iv", "v", "VI", "VII"],
        ScaleType::HarmonicMinor => &["i", "ii°", "III+", "iv", "V", "VI", "vii°"],
        ScaleType::MelodicMinor => &["i", "ii", "III+", "IV", "V", "vi°", "vii°"],
        ScaleType::IonianMode => &["I", "ii", "iii", "IV", "V", "vi", "vii°"],
        ScaleType::DorianMode => &["i", "ii", "III", "IV", "v", "vi°", "VII"],
        ScaleType::PhrygianMode => &["i", "II", "III", "iv", "v°", "VI", "vii"],
        ScaleType::LydianMode => &["I", "II", "iii", "#iv°", "V", "vi", "vii"],
        ScaleType::MixolydianMode => &["I", "ii", "iii°", "IV", "v", "vi", "VII"],
        ScaleType::AeolianMode => &["i", "ii°", "III", "iv", "v", "VI", "VII"],
        ScaleType::LocrianMode => &["i°", "II", "iii", "iv", "V", "VI", "vii"],
        ScaleType::PentatonicMajor => &["I", "ii", "iii", "V", "vi"],
        ScaleType::PentatonicMinor => &["i", "III", "iv", "v", "VII"],
    }
}

fn seventh_degrees(scale_type: ScaleType) -> &'static [&'static str] {
    match scale_type {
        ScaleType::MajorScale => &["Imaj7", "ii7", "iii7", "IVmaj7", "V7", "vi7", "viiø7"],
        ScaleType::NaturalMinor => &["i7", "iiø7", "IIImaj7", "iv7", "v7", "VImaj7", "VII7"],
        ScaleType::HarmonicMinor => &["iM7", "iiø7", "III+M7", "iv7", "V7", "VImaj7", "vii°7"],
        ScaleType::MelodicMinor => &["iM7", "ii7", "III+M7", "IV7", "V7", "viø7", "viiø7"],
        ScaleType::IonianMode => &["Imaj7", "ii7", "iii7", "IVmaj7", "V7", "vi7", "viiø7"],
        ScaleType::DorianMode => &["i7", "ii7", "IIImaj7", "IV7", "v7", "viø7", "VIImaj7"],
        ScaleType::PhrygianMode => &["i7", "IImaj7", "III7", "iv7", "vø7", "VImaj7", "vii7"],
        ScaleType::LydianMode => &["Imaj7", "II7", "iii7", "#ivø7", "Vmaj7", "vi7", "vii7"],
        ScaleType::MixolydianMode => &["I7", "ii7", "iiiø7", "IVmaj7", "v7", "vi7", "VIImaj7"],
        ScaleType::AeolianMode => &["i7", "iiø7", "IIImaj7", "iv7", "v7", "VImaj7", "VII7"],
        ScaleType::LocrianMode => &["iø7", "IImaj7", "iii7", "iv7", "Vmaj7", "VI7", "vii7"],
        ScaleType::PentatonicMajor => &["Imaj7", "ii7", "iii7", "Vmaj7", "vi7"],
        ScaleType::PentatonicMinor => &["i7", "III7", "iv7", "v7", "VII7"],
    }
}

/// Degree names for every (chord type, scale type) pair
pub fn standard_chord_degrees() -> BTreeMap<ChordType, BTreeMap<ScaleType, Vec<String>>> {
    ChordType::ALL
        .iter()
        .map(|&chord_type| {
            let by_scale = ScaleType::ALL
                .iter()
                .map(|&scale_type| {
                    let names = match chord_type {
                        ChordType::Triad => triad_degrees(scale_type),
                        ChordType::Seventh => seventh_degrees(scale_type),
                    };
                    (scale_type, names.iter().map(|n| n.to_string()).collect())
                })
                .collect();
            (chord_type, by_scale)
        })
        .collect()
}
